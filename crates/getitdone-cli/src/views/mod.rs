pub mod format;
pub mod table;

use chrono::NaiveDate;
use getitdone_core::models::TodoItem;

use crate::config::ViewMode;

pub fn render(view: ViewMode, items: &[TodoItem], today: NaiveDate) -> String {
    let table = match view {
        ViewMode::Schedule => table::schedule_table(items, today),
        ViewMode::Week => table::week_table(items, today, false),
        ViewMode::WeekNotes => table::week_table(items, today, true),
        ViewMode::List => table::list_table(items, today),
    };
    table.to_string()
}
