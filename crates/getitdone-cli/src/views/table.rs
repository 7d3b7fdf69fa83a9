use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Row, Table};
use getitdone_core::models::TodoItem;
use getitdone_core::schedule::{classify, week_agenda, ScheduleSection, SectionKind};

use super::format::{format_logged_time, notes_preview, DUE_SOON_DAYS};

const HEADER: [&str; 4] = ["ID", "Status", "Todo", "Logged"];
const LIST_HEADER: [&str; 5] = ["ID", "Status", "Todo", "Due", "Logged"];

/// Every todo grouped into schedule sections.
pub fn schedule_table(items: &[TodoItem], today: NaiveDate) -> Table {
    let mut table = new_table(&HEADER);
    if items.is_empty() {
        table.add_row(placeholder_row("No todos yet, add one!", HEADER.len()));
        return table;
    }

    for section in classify(items, today) {
        add_section(&mut table, &section, false);
    }
    table
}

/// ASAP, overdue and the next seven days, optionally with notes previews.
pub fn week_table(items: &[TodoItem], today: NaiveDate, with_notes: bool) -> Table {
    let mut table = new_table(&HEADER);
    let sections = week_agenda(items, today);
    if sections.is_empty() {
        table.add_row(placeholder_row("Nothing due this week!", HEADER.len()));
        return table;
    }

    for section in &sections {
        add_section(&mut table, section, with_notes);
    }
    table
}

/// Open todos in store order, then done todos by most recent completion.
pub fn list_table(items: &[TodoItem], today: NaiveDate) -> Table {
    let mut table = new_table(&LIST_HEADER);
    if items.is_empty() {
        table.add_row(placeholder_row("No todos yet, add one!", LIST_HEADER.len()));
        return table;
    }

    let mut sorted: Vec<&TodoItem> = items.iter().collect();
    sorted.sort_by(|a, b| {
        a.done
            .cmp(&b.done)
            .then_with(|| b.completed_at.cmp(&a.completed_at))
    });

    for item in sorted {
        let mut row = Row::new();
        row.add_cell(id_cell(item));
        row.add_cell(status_cell(item));
        row.add_cell(text_cell(item, item.text.clone()));
        row.add_cell(due_cell(item, today));
        row.add_cell(logged_cell(item));
        table.add_row(row);
    }
    table
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(
        header
            .iter()
            .map(|title| Cell::new(title).add_attribute(Attribute::Bold)),
    );
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(header.len() - 1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn placeholder_row(message: &str, columns: usize) -> Row {
    let mut row = Row::new();
    row.add_cell(Cell::new(""));
    row.add_cell(Cell::new(""));
    row.add_cell(Cell::new(message).fg(Color::DarkGrey));
    for _ in 3..columns {
        row.add_cell(Cell::new(""));
    }
    row
}

fn add_section(table: &mut Table, section: &ScheduleSection<'_>, with_notes: bool) {
    let mut header = Row::new();
    header.add_cell(Cell::new(""));
    header.add_cell(Cell::new(""));
    header.add_cell(section_label(section.kind));
    header.add_cell(Cell::new(""));
    table.add_row(header);

    for item in &section.items {
        let mut text = item.text.clone();
        if section.kind == SectionKind::Overdue {
            if let Some(due) = item.due_date {
                text.push_str(&format!(" ({})", due.format("%b %d")));
            }
        }
        if with_notes {
            if let Some(notes) = item.notes.as_deref().filter(|_| item.has_notes()) {
                for line in notes_preview(notes) {
                    text.push('\n');
                    text.push_str(&line);
                }
            }
        }

        let mut row = Row::new();
        row.add_cell(id_cell(item));
        row.add_cell(status_cell(item));
        row.add_cell(text_cell(item, text));
        row.add_cell(logged_cell(item));
        table.add_row(row);
    }
}

fn section_label(kind: SectionKind) -> Cell {
    let cell = Cell::new(kind.label()).add_attribute(Attribute::Bold);
    match kind {
        SectionKind::Asap => cell.fg(Color::Magenta),
        SectionKind::Overdue => cell.fg(Color::Red),
        SectionKind::Today => cell.fg(Color::Yellow),
        SectionKind::Tomorrow | SectionKind::Future(_) => cell,
        SectionKind::NoDate => cell.fg(Color::Blue),
        SectionKind::Background => cell.fg(Color::Cyan),
        SectionKind::Completed => cell.fg(Color::Green),
    }
}

fn id_cell(item: &TodoItem) -> Cell {
    let cell = Cell::new(item.id);
    if item.done {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

fn status_cell(item: &TodoItem) -> Cell {
    if item.done {
        Cell::new("[x]").fg(Color::Green)
    } else {
        Cell::new("[ ]").fg(Color::Grey)
    }
}

fn text_cell(item: &TodoItem, text: String) -> Cell {
    let cell = Cell::new(text);
    if item.done {
        cell.add_attribute(Attribute::CrossedOut).fg(Color::DarkGrey)
    } else {
        cell
    }
}

fn logged_cell(item: &TodoItem) -> Cell {
    let cell = Cell::new(format_logged_time(item.logged_minutes));
    if item.done {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

fn due_cell(item: &TodoItem, today: NaiveDate) -> Cell {
    if item.done {
        let text = item
            .due_date
            .map_or_else(|| "-".to_string(), |due| due.format("%Y-%m-%d").to_string());
        return Cell::new(text).fg(Color::DarkGrey);
    }
    if item.is_asap {
        return Cell::new("ASAP").fg(Color::Magenta).add_attribute(Attribute::Bold);
    }
    if item.is_background {
        return Cell::new("BG").fg(Color::Cyan);
    }

    let Some(due) = item.due_date else {
        return Cell::new("-").fg(Color::DarkGrey);
    };
    let date = due.format("%Y-%m-%d");
    let days_left = (due - today).num_days();

    if days_left < 0 {
        Cell::new(format!("{date}\nOVERDUE"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else if days_left == 0 {
        Cell::new(format!("{date}\nTODAY"))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else if days_left <= DUE_SOON_DAYS {
        Cell::new(date).fg(Color::Yellow)
    } else {
        Cell::new(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Sunday
    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    fn sample_items() -> Vec<TodoItem> {
        let mut asap = TodoItem::new(1, "fix the sink");
        asap.is_asap = true;

        let mut overdue = TodoItem::new(2, "renew passport");
        overdue.due_date = Some(date(2026, 10, 12));

        let mut soon = TodoItem::new(3, "call mom");
        soon.due_date = Some(date(2026, 10, 20));
        soon.notes = Some("1. birthday plans 2. flights".to_string());
        soon.logged_minutes = 90;

        let mut later = TodoItem::new(4, "dentist");
        later.due_date = Some(date(2026, 11, 3));

        let mut bg = TodoItem::new(5, "learn piano");
        bg.is_background = true;

        let mut done = TodoItem::new(6, "taxes");
        done.done = true;
        done.completed_at = Some(Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap());

        vec![asap, overdue, soon, later, bg, done]
    }

    fn position(rendered: &str, needle: &str) -> usize {
        rendered
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} missing from:\n{rendered}"))
    }

    #[test]
    fn test_schedule_table_sections_in_order() {
        let rendered = schedule_table(&sample_items(), today()).to_string();

        let order = [
            "ASAP",
            "OVERDUE",
            "renew passport (Oct 12)",
            "Tue, Oct 20",
            "Tue, Nov 03",
            "BACKGROUND",
            "COMPLETED",
            "taxes",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(&rendered, n)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{rendered}");
        assert!(rendered.contains("1h 30m"));
        assert!(!rendered.contains("birthday plans"));
    }

    #[test]
    fn test_week_table_limits_to_seven_days() {
        let rendered = week_table(&sample_items(), today(), false).to_string();
        assert!(rendered.contains("fix the sink"));
        assert!(rendered.contains("renew passport"));
        assert!(rendered.contains("call mom"));
        assert!(!rendered.contains("dentist"));
        assert!(!rendered.contains("learn piano"));
        assert!(!rendered.contains("taxes"));
    }

    #[test]
    fn test_week_notes_table_shows_previews() {
        let rendered = week_table(&sample_items(), today(), true).to_string();
        assert!(rendered.contains("1. birthday plans"));
        assert!(rendered.contains("2. flights"));
    }

    #[test]
    fn test_empty_views() {
        assert!(schedule_table(&[], today()).to_string().contains("No todos yet"));
        assert!(list_table(&[], today()).to_string().contains("No todos yet"));
        assert!(week_table(&[], today(), true)
            .to_string()
            .contains("Nothing due this week"));
    }

    #[test]
    fn test_list_table_due_column() {
        let rendered = list_table(&sample_items(), today()).to_string();
        assert!(rendered.contains("OVERDUE"));
        assert!(rendered.contains("2026-10-20"));
        assert!(rendered.contains("BG"));
        assert!(position(&rendered, "learn piano") < position(&rendered, "taxes"));
    }
}
