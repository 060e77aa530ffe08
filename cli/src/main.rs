mod render;
mod session;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use engine::config::{ConfigManager, DEFAULT_CONFIG_FILE_NAME, GameConfig, Validate};
use engine::connect_four::GameController;
use engine::logger::{self, LogLevel};
use engine::log;

#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four in the terminal")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: PathBuf,

    #[arg(long)]
    height: Option<usize>,

    #[arg(long)]
    width: Option<usize>,

    /// Play these columns in order and exit, e.g. `--moves 0,6,0,6`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    moves: Option<Vec<isize>>,

    #[arg(long)]
    log_level: Option<LogLevel>,

    #[arg(long)]
    log_prefix: Option<String>,
}

impl Args {
    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(width) = self.width {
            config.board.width = width;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(ref prefix) = self.log_prefix {
            config.logging.prefix = Some(prefix.clone());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(args.config.clone());
    let mut config = manager.get_config()?;
    args.apply_overrides(&mut config);
    config.validate()?;

    logger::init_logger(config.logging.prefix.clone(), config.logging.level);
    log!("Using configuration {}", args.config.display());

    let mut game = GameController::new_game(
        config.board,
        config.player1.to_player(),
        config.player2.to_player(),
    )?;

    let mut output = io::stdout().lock();
    match args.moves {
        Some(ref columns) => session::run_scripted(&mut game, columns, &mut output)?,
        None => session::run_interactive(&mut game, io::stdin().lock(), &mut output)?,
    }

    Ok(())
}
