use anyhow::Result;
use chrono::NaiveDate;
use getitdone_core::models::NewTodoData;
use getitdone_core::parser::extract_trailing_date;
use getitdone_core::store::TodoRepository;
use owo_colors::{OwoColorize, Style};

use crate::cli::AddCommand;
use crate::util::{describe_schedule, parse_schedule};

pub fn add_todo(repo: &mut impl TodoRepository, command: AddCommand, today: NaiveDate) -> Result<()> {
    let sentence = command.words.join(" ");
    let extraction = extract_trailing_date(&sentence, today);

    let schedule = match command.due.as_deref() {
        Some(due) => parse_schedule(due, today)?,
        None => extraction.outcome.into_schedule().unwrap_or_default(),
    };

    let added = repo.add(NewTodoData::new(extraction.text, schedule))?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Added todo {}: {}",
        "✓".style(success_style),
        added.id.to_string().yellow(),
        added.text.bright_white().bold()
    );
    println!(
        "  {} {}",
        "→".style(info_style),
        describe_schedule(added.schedule()).cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{setup_store, today};
    use getitdone_core::models::Schedule;

    fn add_command(words: &[&str], due: Option<&str>) -> AddCommand {
        AddCommand {
            words: words.iter().map(|w| w.to_string()).collect(),
            due: due.map(str::to_string),
        }
    }

    #[test]
    fn test_trailing_date_is_extracted() {
        let (mut store, _dir) = setup_store();
        add_todo(&mut store, add_command(&["buy", "milk", "tomorrow"], None), today()).unwrap();

        let item = store.find(1).unwrap();
        assert_eq!(item.text, "buy milk");
        assert_eq!(
            item.schedule(),
            Schedule::Due(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
        );
    }

    #[test]
    fn test_due_flag_overrides_sentence() {
        let (mut store, _dir) = setup_store();
        add_todo(&mut store, add_command(&["report", "fri"], Some("asap")), today()).unwrap();

        let item = store.find(1).unwrap();
        assert_eq!(item.text, "report");
        assert_eq!(item.schedule(), Schedule::Asap);
    }

    #[test]
    fn test_bad_due_flag_adds_nothing() {
        let (mut store, _dir) = setup_store();
        let result = add_todo(&mut store, add_command(&["report"], Some("someday")), today());
        assert!(result.is_err());
        assert!(store.items().is_empty());
    }
}
