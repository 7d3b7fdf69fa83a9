use anyhow::{anyhow, Result};
use getitdone_core::error::CoreError;
use getitdone_core::parser::parse_duration;
use getitdone_core::store::TodoRepository;
use owo_colors::OwoColorize;

use crate::cli::LogCommand;
use crate::util::find_todo;
use crate::views::format::format_logged_time;

pub fn log_time(repo: &mut impl TodoRepository, command: LogCommand) -> Result<()> {
    let todo = find_todo(&*repo, command.id)?;

    let minutes = parse_duration(&command.duration);
    if minutes == 0 {
        return Err(anyhow!(CoreError::InvalidInput(format!(
            "Could not understand the time '{}'. Try 30m, 1h, 1h30m or a plain number of minutes.",
            command.duration
        ))));
    }

    let updated = repo.log_time(todo.id, minutes)?;
    println!(
        "Logged {} on '{}' (total {})",
        format_logged_time(minutes).green(),
        updated.text,
        format_logged_time(updated.logged_minutes).bold()
    );
    Ok(())
}
