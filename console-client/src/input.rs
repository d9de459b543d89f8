use renju_engine::renju::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    NewGame,
    Hint,
    Help,
    Quit,
}

/// Accepts `row col` (0-based numbers, as the engine counts) or `c7` style
/// (column letter, 1-based row as printed on the board).
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err("Enter a move, e.g. `h8` or `7 7`".to_string()),
        "new" | "n" => return Ok(Command::NewGame),
        "hint" | "why" => return Ok(Command::Hint),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Row `{}` is not a number", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Column `{}` is not a number", col))?;
            Ok(Command::Place(Position::new(row, col)))
        }
        [cell] => parse_letter_cell(cell).map(Command::Place),
        _ => Err(format!("Cannot understand `{}`", trimmed)),
    }
}

fn parse_letter_cell(cell: &str) -> Result<Position, String> {
    let mut chars = cell.chars();
    let letter = chars
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .ok_or_else(|| format!("Cannot understand `{}`", cell))?;
    let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;

    let row_text = chars.as_str();
    let row = row_text
        .parse::<usize>()
        .map_err(|_| format!("Row `{}` is not a number", row_text))?;
    if row == 0 {
        return Err("Rows are numbered from 1".to_string());
    }
    Ok(Position::new(row - 1, col))
}
