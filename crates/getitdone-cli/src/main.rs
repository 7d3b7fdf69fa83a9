use clap::Parser;
use getitdone_core::error::CoreError;
use getitdone_core::store::JsonStore;
use log::{debug, error};
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod interactive;
mod logging;
mod util;
mod views;

fn main() {
    let cli = cli::Cli::parse();

    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Invalid configuration: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let _logger = match logging::init_logging(&config.log_level, &config.log_dir()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("{} Logging disabled: {}", "Warning:".yellow().bold(), e);
            None
        }
    };

    let store_path = config.store_path();
    let mut store = match JsonStore::open(&store_path) {
        Ok(store) => store,
        Err(e) => {
            error!("failed to open {}: {:?}", store_path.display(), e);
            handle_error(&anyhow::Error::new(e).context(format!(
                "Could not load {}",
                store_path.display()
            )));
            std::process::exit(1);
        }
    };
    debug!("using store at {}", store.path().display());

    let today = util::today();
    let result = match cli.command {
        None => interactive::run(&mut store, &config),
        Some(cli::Commands::Add(command)) => commands::add::add_todo(&mut store, command, today),
        Some(cli::Commands::List(command)) => {
            commands::list::list_todos(&store, command, &config, today)
        }
        Some(cli::Commands::Done(command)) => {
            commands::done::complete_todos(&mut store, command, today)
        }
        Some(cli::Commands::Undo(command)) => commands::undo::reopen_todo(&mut store, command),
        Some(cli::Commands::Due(command)) => commands::due::set_due(&mut store, command, today),
        Some(cli::Commands::Note(command)) => commands::note::edit_note(&mut store, command),
        Some(cli::Commands::Log(command)) => commands::log_time::log_time(&mut store, command),
        Some(cli::Commands::Remove(command)) => {
            commands::remove::remove_todo(&mut store, command)
        }
        Some(cli::Commands::Path) => {
            println!("{}", store.path().display());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("command failed: {:#}", e);
        handle_error(&e);
        std::process::exit(1);
    }
}

/// Print `err` to stderr, with friendlier wording for store errors.
pub(crate) fn handle_error(err: &anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound(id)) => {
            eprintln!(
                "{} Todo with ID '{}' not found.",
                "Error:".style(error_style),
                id.yellow()
            );
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
        }
        Some(CoreError::Json(e)) => {
            eprintln!("{} {:#} ({})", "Error:".style(error_style), err, e);
            eprintln!("Fix or move the file aside; it was left untouched.");
        }
        Some(CoreError::Io(e)) => {
            eprintln!("{} {:#} ({})", "Error:".style(error_style), err, e);
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
