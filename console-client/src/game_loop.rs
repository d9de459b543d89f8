use std::io::{BufRead, Write};

use renju_engine::renju::{ComputerPlayer, GameSession, GameStatus};
use renju_engine::{log_debug, log_error};

use crate::input::{Command, parse_command};
use crate::render::{cell_label, describe_decision, describe_result, render_board};

const HELP: &str = "\
Moves: `h8` (column letter, row number) or `7 7` (row, column from 0).
Commands: new, hint, help, quit.";

/// Drives one session from line-based input until the player quits or input ends.
pub struct ConsoleGame<'a, P: ComputerPlayer, R: BufRead, W: Write> {
    session: &'a mut GameSession<P>,
    input: R,
    output: W,
}

impl<'a, P: ComputerPlayer, R: BufRead, W: Write> ConsoleGame<'a, P, R, W> {
    pub fn new(session: &'a mut GameSession<P>, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn draw(&mut self) -> std::io::Result<()> {
        let win = self.session.winning_line().map(|(_, line)| line);
        let last = self.session.last_computer_move().map(|d| d.position);
        let text = render_board(self.session.board(), win, last);
        writeln!(self.output, "{}", text)
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        writeln!(
            self.output,
            "Renju {0}x{0}. You play X, the computer plays O. Type `help` for commands.",
            self.session.board_size()
        )?;
        self.draw()?;

        loop {
            if let GameStatus::GameOver(result) = self.session.status() {
                writeln!(self.output, "{}", describe_result(result))?;
                let Some(answer) = self.read_line("New game? [y/n] ")? else {
                    break;
                };
                if !answer.trim().eq_ignore_ascii_case("y") {
                    break;
                }
                self.start_new_game()?;
                continue;
            }

            let Some(line) = self.read_line("Your move> ")? else {
                break;
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };

            match command {
                Command::Place(pos) => match self.session.apply_human_move(pos.row, pos.col) {
                    Ok(outcome) => {
                        self.draw()?;
                        if let Some(decision) = outcome.computer_move {
                            writeln!(self.output, "Computer played {}", cell_label(decision.position))?;
                        }
                    }
                    Err(e) if e.is_recoverable() => {
                        log_debug!("Rejected move {}: {}", pos, e);
                        writeln!(self.output, "{}", e)?;
                    }
                    Err(e) => {
                        log_error!("Error in the game: {}", e);
                        return Err(e.into());
                    }
                },
                Command::NewGame => self.start_new_game()?,
                Command::Hint => match self.session.last_computer_move() {
                    Some(decision) => writeln!(self.output, "{}", describe_decision(decision))?,
                    None => writeln!(self.output, "The computer has not moved yet")?,
                },
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Quit => break,
            }
        }

        Ok(())
    }

    fn start_new_game(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.session.new_game()?;
        if self.session.human_first() {
            writeln!(self.output, "New game: you move first")?;
        } else {
            writeln!(self.output, "New game: the computer moved first")?;
        }
        self.draw()?;
        Ok(())
    }
}
