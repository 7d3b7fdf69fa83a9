use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use getitdone_core::error::CoreError;
use getitdone_core::models::{Schedule, TodoItem};
use getitdone_core::parser::parse_standalone_date;
use getitdone_core::store::TodoRepository;

/// The local calendar date. The only place the CLI reads the clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn find_todo(repo: &impl TodoRepository, id: u32) -> Result<TodoItem> {
    repo.find(id)
        .cloned()
        .ok_or_else(|| anyhow!(CoreError::NotFound(id)))
}

/// Interpret a due date answer, including `asap`, `bg` and `none`/`clear`.
pub fn parse_schedule(input: &str, today: NaiveDate) -> Result<Schedule> {
    parse_standalone_date(input, today)
        .into_schedule()
        .ok_or_else(|| {
            anyhow!(CoreError::InvalidInput(format!(
                "Could not understand the date '{}'. Try today, tomorrow, +3d, fri, next tue, yyyy-mm-dd, asap, bg or none.",
                input.trim()
            )))
        })
}

/// Human description of a schedule, for confirmations.
pub fn describe_schedule(schedule: Schedule) -> String {
    match schedule {
        Schedule::Unscheduled => "no due date".to_string(),
        Schedule::Due(date) => format!("due {}", date.format("%Y-%m-%d")),
        Schedule::Asap => "ASAP".to_string(),
        Schedule::Background => "background task".to_string(),
    }
}

/// Open `path` with the platform's default application.
pub fn open_in_default_app(path: &Path) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };

    let status = command.arg(path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("opener exited with {status}"),
        ))
    }
}
