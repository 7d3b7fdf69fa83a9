use anyhow::Result;
use dialoguer::Confirm;
use getitdone_core::store::TodoRepository;
use owo_colors::OwoColorize;

use crate::cli::RemoveCommand;
use crate::util::find_todo;

pub fn remove_todo(repo: &mut impl TodoRepository, command: RemoveCommand) -> Result<()> {
    let todo = find_todo(&*repo, command.id)?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Remove todo '{}'?", todo.text))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Removal cancelled.");
            return Ok(());
        }
    }

    let removed = repo.remove(todo.id)?;
    println!(
        "{} Removed todo {}: '{}'",
        "✗".red().bold(),
        removed.id.to_string().yellow(),
        removed.text
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::setup_store;
    use getitdone_core::models::{NewTodoData, Schedule};

    #[test]
    fn test_forced_removal() {
        let (mut store, _dir) = setup_store();
        store.add(NewTodoData::new("a", Schedule::Unscheduled)).unwrap();
        store.add(NewTodoData::new("b", Schedule::Unscheduled)).unwrap();

        remove_todo(&mut store, RemoveCommand { id: 1, force: true }).unwrap();
        let ids: Vec<u32> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_missing_todo() {
        let (mut store, _dir) = setup_store();
        assert!(remove_todo(&mut store, RemoveCommand { id: 3, force: true }).is_err());
    }
}
