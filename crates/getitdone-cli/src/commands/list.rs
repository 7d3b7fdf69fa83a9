use anyhow::Result;
use chrono::NaiveDate;
use getitdone_core::schedule::Summary;
use getitdone_core::store::TodoRepository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::{self, format::format_status_bar};

pub fn list_todos(
    repo: &impl TodoRepository,
    command: ListCommand,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let view = command.view.unwrap_or(config.default_view);
    let items = repo.items();

    println!("  {}", format_status_bar(&Summary::of(items, today)));
    println!("{}", views::render(view, items, today));

    Ok(())
}
