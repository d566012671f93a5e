use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

mod app;
mod config;
mod game;
mod ui;
pub use config::{BOMB_COUNT, CELL_H, CELL_W, DEFAULT_LOG_FILE, MS_COLS, MS_ROWS, STATUS_H};
pub use game::Game;

#[derive(Parser)]
#[command(name = "minesweeper", about = "Minesweeper in the terminal")]
struct Args {
    /// Seed for bomb placement; omit for a fresh random board every run
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the debug log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("minesweeper starting, seed: {:?}", args.seed);

    let game = match args.seed {
        Some(seed) => Game::seeded(MS_ROWS, MS_COLS, BOMB_COUNT, seed),
        None => Game::new(MS_ROWS, MS_COLS, BOMB_COUNT),
    };
    let game = match game {
        Ok(game) => game,
        Err(err) => {
            log::error!("invalid board configuration: {err}");
            eprintln!("invalid board configuration: {err}");
            return ExitCode::from(1);
        }
    };

    if let Err(err) = app::run(game) {
        log::error!("terminal error: {err}");
        eprintln!("minesweeper error: {err}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
