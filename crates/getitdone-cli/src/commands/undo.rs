use anyhow::{anyhow, Result};
use getitdone_core::error::CoreError;
use getitdone_core::store::TodoRepository;
use owo_colors::OwoColorize;

use crate::cli::UndoCommand;
use crate::util::find_todo;

pub fn reopen_todo(repo: &mut impl TodoRepository, command: UndoCommand) -> Result<()> {
    let todo = find_todo(&*repo, command.id)?;
    if !todo.done {
        return Err(anyhow!(CoreError::InvalidInput(format!(
            "Todo {} is not done.",
            todo.id
        ))));
    }

    let reopened = repo.toggle(todo.id)?;
    println!(
        "{} Reopened todo {}: '{}'",
        "↺".blue().bold(),
        reopened.id.to_string().yellow(),
        reopened.text
    );
    Ok(())
}
