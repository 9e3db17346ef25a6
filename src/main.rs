mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod input;
mod logging;
mod util;
use crate::app::{App, Outcome};
use crate::cli::Arguments;
use crate::config::Config;
use crate::game::Game;
use crate::input::TerminalEvents;
use anyhow::Context;
use log::info;
use std::io::{self, ErrorKind};
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let args = match cli::Command::from_env() {
        Ok(cli::Command::Run(args)) => args,
        Ok(cli::Command::Help) => {
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(cli::Command::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("termsnake: {e}");
            eprint!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true),
            Err(_) => Ok(Config::default()),
        },
    }
    .context("failed to load configuration")?;
    let log_path = args
        .log_file
        .or(config.log.file)
        .or_else(logging::default_path);
    if let Some(path) = log_path {
        if let Err(e) = logging::init(&path, config.log.level) {
            eprintln!("termsnake: warning: logging disabled: {e:#}");
        }
    }
    let speed = args
        .speed
        .map_or_else(|| config.game.speed(), Duration::from_millis);
    let game = Game::new(consts::BOARD_ROWS, consts::BOARD_COLS, speed)?;
    let mut terminal = ratatui::init();
    let r = App::new(game, TerminalEvents).run(&mut terminal);
    ratatui::restore();
    match r? {
        Outcome::GameOver { score } => info!("Exiting after game over; final score {score}"),
        Outcome::Quit => info!("Exiting at player's request"),
    }
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
