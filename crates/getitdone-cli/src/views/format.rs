use chrono::{Local, NaiveDate};
use getitdone_core::models::TodoItem;
use getitdone_core::schedule::{date_context, Summary};

/// Longest plain-text notes preview before it is cut off.
pub const NOTES_PREVIEW_LEN: usize = 60;

/// Days ahead within which an upcoming due date is highlighted.
pub const DUE_SOON_DAYS: i64 = 3;

pub fn format_logged_time(minutes: u32) -> String {
    let (hours, mins) = (minutes / 60, minutes % 60);
    match (hours, mins) {
        (0, 0) => "-".to_string(),
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// `3 open | 2 done | 1 overdue | 1 asap`, leaving out zero overdue/asap counts.
pub fn format_status_bar(summary: &Summary) -> String {
    let mut parts = vec![
        format!("{} open", summary.open),
        format!("{} done", summary.done),
    ];
    if summary.overdue > 0 {
        parts.push(format!("{} overdue", summary.overdue));
    }
    if summary.asap > 0 {
        parts.push(format!("{} asap", summary.asap));
    }
    parts.join(" | ")
}

/// A menu entry for picking any todo: `<id>. [x] text (context) [note]`.
pub fn format_pick_entry(item: &TodoItem, today: NaiveDate) -> String {
    let mark = if item.done { "[x]" } else { "[ ]" };
    let mut entry = format!("{}. {} {}", item.id, mark, item.text);
    push_context(&mut entry, item, today);
    if item.has_notes() {
        entry.push_str(" [note]");
    }
    entry
}

/// A menu entry for completing an open todo: `<id>. text (context)`.
pub fn format_open_entry(item: &TodoItem, today: NaiveDate) -> String {
    let mut entry = format!("{}. {}", item.id, item.text);
    push_context(&mut entry, item, today);
    entry
}

/// A menu entry for reopening a done todo: `<id>. text (done Mon DD)`.
pub fn format_done_entry(item: &TodoItem) -> String {
    match item.completed_at {
        Some(at) => format!(
            "{}. {} (done {})",
            item.id,
            item.text,
            at.with_timezone(&Local).format("%b %d")
        ),
        None => format!("{}. {}", item.id, item.text),
    }
}

fn push_context(entry: &mut String, item: &TodoItem, today: NaiveDate) {
    let context = date_context(item, today);
    if !context.is_empty() {
        entry.push(' ');
        entry.push_str(&context);
    }
}

/// Preview lines shown under a todo in the week + notes view.
///
/// Notes with at least two numbered lines (`1. a`, `2) b`, `3 c`, including
/// several items written inline on one line) become a numbered list; any
/// other notes collapse to one line cut at [`NOTES_PREVIEW_LEN`] characters.
pub fn notes_preview(notes: &str) -> Vec<String> {
    let lines: Vec<String> = notes
        .lines()
        .flat_map(split_inline_numbered)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let numbered = lines.iter().filter(|line| numbered_item(line).is_some()).count();
    if numbered >= 2 {
        return lines
            .iter()
            .filter_map(|line| match numbered_item(line) {
                Some((number, rest)) if !rest.is_empty() => Some(format!("  {number}. {rest}")),
                Some(_) => None,
                None => Some(format!("  {}", line.trim())),
            })
            .collect();
    }

    let flat = notes.lines().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > NOTES_PREVIEW_LEN {
        let cut: String = flat.chars().take(NOTES_PREVIEW_LEN).collect();
        vec![format!("{cut}...")]
    } else {
        vec![flat]
    }
}

/// Split `1. foo 2. bar` at each `N.` that follows other text.
fn split_inline_numbered(line: &str) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in line.split_whitespace() {
        if !current.is_empty() && is_dotted_number(word) {
            parts.push(current.join(" "));
            current.clear();
        }
        current.push(word);
    }
    if !current.is_empty() {
        parts.push(current.join(" "));
    }
    parts
}

fn is_dotted_number(word: &str) -> bool {
    let digits = word.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && word[digits..].starts_with('.')
}

/// `(number, rest)` when `line` starts with digits followed by `.`, `)` or a space.
fn numbered_item(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let (number, rest) = trimmed.split_at(digits);
    let rest = rest
        .strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .or_else(|| rest.strip_prefix(' '))?;
    Some((number, rest.trim()))
}
