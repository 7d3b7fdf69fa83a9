//! The full-screen interactive session started when no subcommand is given.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use console::{Key, Term};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use getitdone_core::dates::next_day;
use getitdone_core::models::{NewTodoData, Schedule};
use getitdone_core::parser::{extract_trailing_date, parse_due_date, parse_duration, parse_standalone_date};
use getitdone_core::schedule::{classify, schedule_order, SectionKind, Summary};
use getitdone_core::store::{JsonStore, TodoRepository};
use log::{info, warn};
use owo_colors::OwoColorize;

use crate::commands::note::append_note;
use crate::config::{Config, ViewMode};
use crate::util::{self, describe_schedule, find_todo};
use crate::views::{
    self,
    format::{format_done_entry, format_open_entry, format_pick_entry, format_status_bar},
};

const PAGE_SIZE: usize = 15;
const FEEDBACK_PAUSE: Duration = Duration::from_millis(800);
const CANCEL: &str = "(cancel)";
const DELETE_LINE: &str = "//d";

const WHEN_CHOICES: [&str; 6] = [
    "No date",
    "Today",
    "Tomorrow",
    "ASAP",
    "Background task",
    "Pick a date",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    Complete,
    Uncomplete,
    SetDueDate,
    EditNotes,
    LogTime,
    Remove,
    NextView,
    ShowPath,
    OpenFile,
    Quit,
}

const MENU: [MenuAction; 11] = [
    MenuAction::Add,
    MenuAction::Complete,
    MenuAction::Uncomplete,
    MenuAction::SetDueDate,
    MenuAction::EditNotes,
    MenuAction::LogTime,
    MenuAction::Remove,
    MenuAction::NextView,
    MenuAction::ShowPath,
    MenuAction::OpenFile,
    MenuAction::Quit,
];

impl MenuAction {
    fn label(self, view: ViewMode) -> String {
        match self {
            MenuAction::Add => "Add todo".to_string(),
            MenuAction::Complete => "Complete".to_string(),
            MenuAction::Uncomplete => "Uncomplete".to_string(),
            MenuAction::SetDueDate => "Set due date".to_string(),
            MenuAction::EditNotes => "Edit notes".to_string(),
            MenuAction::LogTime => "Log time".to_string(),
            MenuAction::Remove => "Remove".to_string(),
            MenuAction::NextView => format!("View: {}", view.next().label()),
            MenuAction::ShowPath => "Show file path".to_string(),
            MenuAction::OpenFile => "Open storage file".to_string(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

/// Run the session until the user quits.
///
/// Failures of a single action are shown and the session carries on; only
/// terminal errors end it.
pub fn run(store: &mut JsonStore, config: &Config) -> Result<()> {
    let term = Term::stdout();
    let mut view = config.default_view;
    info!("interactive session started in {:?} view", view);

    loop {
        let today = util::today();
        term.clear_screen()?;
        draw(store, view, today);

        let outcome = match term.read_key()? {
            Key::Char(c) => match c.to_ascii_lowercase() {
                'a' => add(store, today),
                'd' => complete(store, today, &term),
                'n' => edit_notes(store, today, &term),
                'v' => {
                    view = view.next();
                    Ok(())
                }
                'q' => break,
                _ => match choose_action(view)? {
                    Some(MenuAction::Quit) => break,
                    Some(action) => perform(action, store, &mut view, today, &term),
                    None => Ok(()),
                },
            },
            _ => match choose_action(view)? {
                Some(MenuAction::Quit) => break,
                Some(action) => perform(action, store, &mut view, today, &term),
                None => Ok(()),
            },
        };

        if let Err(err) = outcome {
            warn!("action failed: {:#}", err);
            crate::handle_error(&err);
            wait_for_key(&term)?;
        }
    }

    info!("interactive session ended");
    Ok(())
}

fn draw(store: &JsonStore, view: ViewMode, today: NaiveDate) {
    let summary = Summary::of(store.items(), today);
    println!(
        "  {}   {}",
        format_status_bar(&summary).bold(),
        format!("[{}]", view.label()).dimmed()
    );
    println!();
    println!("{}", views::render(view, store.items(), today));
    println!(
        "{}",
        "  [a] Add  [d] Done  [n] Notes  [v] View  [q] Quit  [any other key] Menu".dimmed()
    );
    println!();
}

fn choose_action(view: ViewMode) -> Result<Option<MenuAction>> {
    let labels: Vec<String> = MENU.iter().map(|action| action.label(view)).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .max_length(PAGE_SIZE)
        .interact_opt()?;
    Ok(selection.map(|index| MENU[index]))
}

fn perform(
    action: MenuAction,
    store: &mut JsonStore,
    view: &mut ViewMode,
    today: NaiveDate,
    term: &Term,
) -> Result<()> {
    match action {
        MenuAction::Add => add(store, today),
        MenuAction::Complete => complete(store, today, term),
        MenuAction::Uncomplete => uncomplete(store, today, term),
        MenuAction::SetDueDate => set_due_date(store, today, term),
        MenuAction::EditNotes => edit_notes(store, today, term),
        MenuAction::LogTime => log_time(store, today, term),
        MenuAction::Remove => remove(store, today, term),
        MenuAction::NextView => {
            *view = view.next();
            Ok(())
        }
        MenuAction::ShowPath => {
            println!("{} {}", "Storage:".bold(), store.path().display());
            wait_for_key(term)
        }
        MenuAction::OpenFile => open_storage_file(store, term),
        MenuAction::Quit => Ok(()),
    }
}

fn add(repo: &mut impl TodoRepository, today: NaiveDate) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("Todo text")
        .allow_empty(true)
        .interact_text()?;
    if input.trim().is_empty() {
        return Ok(());
    }

    let extraction = extract_trailing_date(input.trim(), today);
    let schedule = match extraction.outcome.into_schedule() {
        Some(schedule) => schedule,
        None => ask_when(today)?,
    };

    let added = repo.add(NewTodoData::new(extraction.text, schedule))?;
    if added.schedule() != Schedule::Unscheduled {
        println!("{}", format!("Added as {}", describe_schedule(added.schedule())).dimmed());
        thread::sleep(FEEDBACK_PAUSE);
    }
    Ok(())
}

fn ask_when(today: NaiveDate) -> Result<Schedule> {
    let choice = Select::new()
        .with_prompt("When is this due?")
        .items(&WHEN_CHOICES)
        .default(0)
        .interact()?;

    let schedule = match choice {
        1 => Schedule::Due(today),
        2 => Schedule::Due(next_day(today)),
        3 => Schedule::Asap,
        4 => Schedule::Background,
        5 => {
            let answer: String = Input::new()
                .with_prompt("Due date (+3d, mon-sun, next tue, yyyy-mm-dd)")
                .allow_empty(true)
                .interact_text()?;
            match parse_due_date(&answer, today) {
                Some(date) => Schedule::Due(date),
                None => {
                    println!("{}", "Could not parse date, adding without due date.".red());
                    thread::sleep(FEEDBACK_PAUSE);
                    Schedule::Unscheduled
                }
            }
        }
        _ => Schedule::Unscheduled,
    };
    Ok(schedule)
}

fn complete(repo: &mut impl TodoRepository, today: NaiveDate, term: &Term) -> Result<()> {
    let (ids, entries): (Vec<u32>, Vec<String>) = schedule_order(repo.items(), today)
        .into_iter()
        .filter(|item| !item.done)
        .map(|item| (item.id, format_open_entry(item, today)))
        .unzip();

    if ids.is_empty() {
        return notice(term, "No incomplete todos.");
    }

    let selected = MultiSelect::new()
        .with_prompt("Mark which todos as done? (Space to toggle, Enter to confirm)")
        .items(&entries)
        .max_length(PAGE_SIZE)
        .interact_opt()?
        .unwrap_or_default();

    for index in selected {
        repo.toggle(ids[index])?;
    }
    Ok(())
}

fn uncomplete(repo: &mut impl TodoRepository, today: NaiveDate, term: &Term) -> Result<()> {
    let (ids, mut entries): (Vec<u32>, Vec<String>) = classify(repo.items(), today)
        .into_iter()
        .filter(|section| section.kind == SectionKind::Completed)
        .flat_map(|section| section.items)
        .map(|item| (item.id, format_done_entry(item)))
        .unzip();

    if ids.is_empty() {
        return notice(term, "No completed todos.");
    }
    entries.push(CANCEL.to_string());

    let picked = Select::new()
        .with_prompt("Uncomplete which todo?")
        .items(&entries)
        .default(0)
        .max_length(PAGE_SIZE)
        .interact_opt()?;

    if let Some(&id) = picked.and_then(|index| ids.get(index)) {
        repo.toggle(id)?;
    }
    Ok(())
}

/// Let the user pick any todo in schedule order. `None` means cancelled.
fn pick_todo(
    repo: &impl TodoRepository,
    today: NaiveDate,
    prompt: &str,
    term: &Term,
) -> Result<Option<u32>> {
    let (ids, mut entries): (Vec<u32>, Vec<String>) = schedule_order(repo.items(), today)
        .into_iter()
        .map(|item| (item.id, format_pick_entry(item, today)))
        .unzip();

    if ids.is_empty() {
        notice(term, "No todos to choose from.")?;
        return Ok(None);
    }
    entries.push(CANCEL.to_string());

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&entries)
        .default(0)
        .max_length(PAGE_SIZE)
        .interact_opt()?;

    Ok(picked.and_then(|index| ids.get(index).copied()))
}

fn set_due_date(repo: &mut impl TodoRepository, today: NaiveDate, term: &Term) -> Result<()> {
    let Some(id) = pick_todo(&*repo, today, "Set due date for which todo?", term)? else {
        return Ok(());
    };
    let todo = find_todo(&*repo, id)?;

    let current = match todo.schedule() {
        Schedule::Unscheduled => String::new(),
        Schedule::Due(date) => format!(" (currently: {})", date.format("%Y-%m-%d")),
        Schedule::Asap => " (currently: ASAP)".to_string(),
        Schedule::Background => " (currently: Background)".to_string(),
    };
    let answer: String = Input::new()
        .with_prompt(format!(
            "Due date{current} (today, tomorrow, +3d, mon-sun, yyyy-mm-dd, asap, bg, or none/clear)"
        ))
        .allow_empty(true)
        .interact_text()?;
    if answer.trim().is_empty() {
        return Ok(());
    }

    match parse_standalone_date(&answer, today).into_schedule() {
        Some(schedule) => {
            repo.set_schedule(id, schedule)?;
            Ok(())
        }
        None => notice(term, "Could not parse date."),
    }
}

fn edit_notes(repo: &mut impl TodoRepository, today: NaiveDate, term: &Term) -> Result<()> {
    let Some(id) = pick_todo(&*repo, today, "Edit notes for which todo?", term)? else {
        return Ok(());
    };
    let todo = find_todo(&*repo, id)?;

    let Some(notes) = todo.notes.as_deref().filter(|_| todo.has_notes()) else {
        let notes: String = Input::new()
            .with_prompt("Notes")
            .allow_empty(true)
            .interact_text()?;
        if !notes.trim().is_empty() {
            repo.set_notes(id, Some(&notes))?;
        }
        return Ok(());
    };

    println!("{}", "Current notes:".bold());
    for line in notes.lines() {
        println!("  {}", line.dimmed());
    }
    println!();

    let action = Select::new()
        .with_prompt("What would you like to do?")
        .items(&["Edit notes", "Append to notes", "Replace notes", "Clear notes", "Cancel"])
        .default(0)
        .interact_opt()?;

    match action {
        Some(0) => {
            let edited = edit_lines(notes)?;
            repo.set_notes(id, Some(&edited.join("\n")))?;
        }
        Some(1) => {
            let extra: String = Input::new().with_prompt("Additional notes").interact_text()?;
            repo.set_notes(id, Some(&append_note(Some(notes), &extra)))?;
        }
        Some(2) => {
            let replacement: String = Input::new().with_prompt("New notes").interact_text()?;
            repo.set_notes(id, Some(&replacement))?;
        }
        Some(3) => {
            repo.set_notes(id, None)?;
        }
        _ => {}
    }
    Ok(())
}

/// Walk through each line of `notes`, then collect extra lines until an
/// empty answer.
fn edit_lines(notes: &str) -> Result<Vec<String>> {
    println!(
        "{} {} {}",
        "For each line: edit the text, press Enter to keep as-is, or type".dimmed(),
        DELETE_LINE.bold(),
        "to delete the line.".dimmed()
    );
    println!();

    let mut edited = Vec::new();
    for (index, line) in notes.lines().enumerate() {
        let answer: String = Input::new()
            .with_prompt(format!("{}.", index + 1))
            .default(line.to_string())
            .allow_empty(true)
            .interact_text()?;
        if let Some(kept) = apply_line_edit(line, &answer) {
            edited.push(kept);
        }
    }

    loop {
        let extra: String = Input::new()
            .with_prompt(format!("{}. new line (empty to finish)", edited.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        if extra.trim().is_empty() {
            break;
        }
        edited.push(extra);
    }
    Ok(edited)
}

/// The line to keep after the user answered `answer` for `original`.
fn apply_line_edit(original: &str, answer: &str) -> Option<String> {
    if answer.trim() == DELETE_LINE {
        None
    } else if answer.is_empty() {
        Some(original.to_string())
    } else {
        Some(answer.to_string())
    }
}

fn log_time(repo: &mut impl TodoRepository, today: NaiveDate, term: &Term) -> Result<()> {
    let Some(id) = pick_todo(&*repo, today, "Log time for which todo?", term)? else {
        return Ok(());
    };

    let answer: String = Input::new()
        .with_prompt("Time spent (e.g. 30m, 1h, 1h30m, or plain number = minutes)")
        .interact_text()?;

    match parse_duration(&answer) {
        0 => notice(term, "Could not parse time."),
        minutes => {
            repo.log_time(id, minutes)?;
            Ok(())
        }
    }
}

fn remove(repo: &mut impl TodoRepository, today: NaiveDate, term: &Term) -> Result<()> {
    let Some(id) = pick_todo(&*repo, today, "Remove which todo?", term)? else {
        return Ok(());
    };
    let todo = find_todo(&*repo, id)?;

    let confirmed = Confirm::new()
        .with_prompt(format!("Remove '{}'?", todo.text))
        .default(false)
        .interact()?;
    if confirmed {
        repo.remove(id)?;
    }
    Ok(())
}

fn open_storage_file(store: &JsonStore, term: &Term) -> Result<()> {
    match util::open_in_default_app(store.path()) {
        Ok(()) => Ok(()),
        Err(err) => {
            warn!("failed to open {}: {}", store.path().display(), err);
            notice(
                term,
                &format!("Could not open {}: {}", store.path().display(), err),
            )
        }
    }
}

fn notice(term: &Term, message: &str) -> Result<()> {
    println!("{}", message.yellow());
    wait_for_key(term)
}

fn wait_for_key(term: &Term) -> Result<()> {
    println!("{}", "Press any key to continue...".dimmed());
    term.read_key()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("first", "", Some("first"))]
    #[case("first", "changed", Some("changed"))]
    #[case("first", "//d", None)]
    #[case("first", "  //d ", None)]
    #[case("first", "  ", Some("  "))]
    fn test_apply_line_edit(
        #[case] original: &str,
        #[case] answer: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(apply_line_edit(original, answer).as_deref(), expected);
    }

    #[test]
    fn test_menu_offers_the_next_view() {
        assert_eq!(MenuAction::NextView.label(ViewMode::Schedule), "View: Week");
        assert_eq!(MenuAction::NextView.label(ViewMode::WeekNotes), "View: List");
        assert_eq!(MenuAction::NextView.label(ViewMode::List), "View: Schedule");
    }

    #[test]
    fn test_menu_ends_with_quit() {
        assert_eq!(MENU.first(), Some(&MenuAction::Add));
        assert_eq!(MENU.last(), Some(&MenuAction::Quit));
    }
}
