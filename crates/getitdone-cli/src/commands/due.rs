use anyhow::Result;
use chrono::NaiveDate;
use getitdone_core::store::TodoRepository;
use owo_colors::OwoColorize;

use crate::cli::DueCommand;
use crate::util::{describe_schedule, find_todo, parse_schedule};

pub fn set_due(repo: &mut impl TodoRepository, command: DueCommand, today: NaiveDate) -> Result<()> {
    find_todo(&*repo, command.id)?;
    let schedule = parse_schedule(&command.expr.join(" "), today)?;
    let updated = repo.set_schedule(command.id, schedule)?;

    println!(
        "Todo {} '{}' is now {}",
        updated.id.to_string().yellow(),
        updated.text,
        describe_schedule(updated.schedule()).cyan()
    );
    Ok(())
}
