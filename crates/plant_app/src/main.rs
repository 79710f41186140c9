mod cli;
mod config;
mod logging;
mod render;
mod session;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use plant_core::HistoryStore;
use plant_engine::{CatalogClient, EngineHandle, VisionClient};
use plant_logging::plant_info;

use crate::cli::{Cli, ShellLine};
use crate::config::AppConfig;
use crate::session::{Outcome, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env()?;
    logging::initialize(cli.log, config.log_level);

    let vision = VisionClient::new(config.vision, config.settings.clone())?;
    let catalog = CatalogClient::new(config.catalog, config.settings)?;
    let engine = EngineHandle::new(Arc::new(vision), Arc::new(catalog))?;
    let mut session = Session::new(engine, HistoryStore::new());
    plant_info!("session started");

    match cli.command {
        Some(command) => {
            if let Outcome::Print(text) = session.handle(command) {
                print!("{text}");
            }
        }
        None => run_shell(&mut session)?,
    }

    plant_info!("session ended history_len={}", session.history().len());
    Ok(())
}

fn run_shell(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Plant companion. Type `help` for commands.")?;

    loop {
        write!(stdout, "plant> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match ShellLine::parse_line(&line) {
            Ok(command) => match session.handle(command) {
                Outcome::Print(text) => write!(stdout, "{text}")?,
                Outcome::Quit => return Ok(()),
            },
            // Covers `help` too, which clap reports as an error carrying the usage text.
            Err(err) => write!(stdout, "{}", err.render())?,
        }
    }
}
