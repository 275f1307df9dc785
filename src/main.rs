mod auth;
mod categorize;
mod config;
mod db;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = config::Config::load(&args)?;

    if let Some(path) = &config.log_path {
        if let Err(e) = logging::init(path, config.log_level) {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }
    log::info!("Starting moneypaz {}", env!("CARGO_PKG_VERSION"));

    let mut backend = run::Backend::open(&config)?;

    if config.command.is_empty() {
        run::as_tui(&mut backend)
    } else {
        run::as_cli(&config.command, &mut backend)
    }
}
