use anyhow::Result;
use getitdone_core::store::TodoRepository;
use owo_colors::OwoColorize;

use crate::cli::NoteCommand;
use crate::util::find_todo;

pub fn edit_note(repo: &mut impl TodoRepository, command: NoteCommand) -> Result<()> {
    let todo = find_todo(&*repo, command.id)?;

    if command.clear {
        repo.set_notes(todo.id, None)?;
        println!("Cleared notes of todo {}", todo.id.to_string().yellow());
        return Ok(());
    }

    let Some(text) = command.text else {
        match todo.notes.as_deref().filter(|_| todo.has_notes()) {
            Some(notes) => {
                println!("{} {}", "Notes for".bold(), todo.text.bold());
                println!("{notes}");
            }
            None => println!("Todo {} has no notes.", todo.id),
        }
        return Ok(());
    };

    let notes = if command.append {
        append_note(todo.notes.as_deref(), &text)
    } else {
        text
    };
    let updated = repo.set_notes(todo.id, Some(&notes))?;
    println!(
        "Updated notes of todo {}: '{}'",
        updated.id.to_string().yellow(),
        updated.text
    );
    Ok(())
}

/// Add `extra` as a new line below any existing notes.
pub fn append_note(existing: Option<&str>, extra: &str) -> String {
    match existing.map(str::trim_end).filter(|notes| !notes.trim().is_empty()) {
        Some(notes) => format!("{notes}\n{extra}"),
        None => extra.to_string(),
    }
}
