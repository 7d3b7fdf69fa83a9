use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use getitdone_core::schedule::date_context;
use getitdone_core::store::TodoRepository;
use owo_colors::OwoColorize;

use crate::cli::DoneCommand;
use crate::util::find_todo;

/// Complete every listed todo. All IDs are checked before anything changes.
pub fn complete_todos(repo: &mut impl TodoRepository, command: DoneCommand, today: NaiveDate) -> Result<()> {
    let mut ids = command.ids;
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(*id));

    let mut todos = Vec::with_capacity(ids.len());
    for id in ids {
        todos.push(find_todo(&*repo, id)?);
    }

    for todo in todos {
        if todo.done {
            println!("Todo {} is already done: '{}'", todo.id, todo.text.dimmed());
            continue;
        }
        let context = date_context(&todo, today);
        let completed = repo.toggle(todo.id)?;
        println!(
            "{} Completed todo {}: '{}' {}",
            "✓".green().bold(),
            completed.id.to_string().yellow(),
            completed.text,
            context.dimmed()
        );
    }

    Ok(())
}
