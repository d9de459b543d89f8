mod config;
mod game_loop;
mod input;
mod render;

use std::io;

use clap::Parser;
use renju_engine::logger::{self, LogLevel};
use renju_engine::renju::GameSession;
use renju_engine::{SessionRng, log};

use config::{Config, get_config_manager};
use game_loop::ConsoleGame;

#[derive(Parser)]
#[command(name = "renju", about = "Five-in-a-row against the computer")]
struct Args {
    /// Path to the YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    size: Option<usize>,
    /// Let the computer open the first game.
    #[arg(long)]
    computer_first: bool,
    /// Seed for the computer's random choices, to replay a game.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    log_level: Option<LogLevel>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(size) = self.size {
            config.game.board_size = size;
        }
        if self.computer_first {
            config.game.human_first = false;
        }
        if self.seed.is_some() {
            config.game.seed = self.seed;
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        if self.use_log_prefix {
            config.log.use_prefix = true;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let config = args.apply_to(config_manager.get_config()?);
    if args.save_config {
        config_manager.set_config(&config)?;
    } else {
        renju_engine::config::Validate::validate(&config)?;
    }

    let prefix = config.log.use_prefix.then(|| "Renju".to_string());
    logger::init_logger(prefix, config.log.level);

    let rng = SessionRng::from_optional_seed(config.game.seed);
    let mut session = GameSession::new(config.game.board_size, config.game.human_first, rng)?;

    let stdin = io::stdin();
    let result = ConsoleGame::new(&mut session, stdin.lock(), io::stdout()).run();

    log!("Game stopped with playing field {0}x{0}", session.board_size());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config_file() {
        let args = Args::parse_from([
            "renju",
            "--size",
            "9",
            "--computer-first",
            "--seed",
            "17",
            "--log-level",
            "trace",
        ]);
        let config = args.apply_to(Config::default());
        assert_eq!(config.game.board_size, 9);
        assert!(!config.game.human_first);
        assert_eq!(config.game.seed, Some(17));
        assert_eq!(config.log.level, LogLevel::Trace);
    }

    #[test]
    fn test_no_flags_keep_config_file_values() {
        let args = Args::parse_from(["renju"]);
        let config = args.apply_to(Config::default());
        assert_eq!(config, Config::default());
    }
}
