//! Schedule classification.
//!
//! Everything here is a pure function of the current item snapshot and
//! `today`; nothing is cached between calls.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::dates::next_day;
use crate::models::TodoItem;

/// Length of the week agenda window, counted from today inclusive.
pub const WEEK_AGENDA_DAYS: u64 = 7;

/// A schedule section. The derived ordering is the display order, with
/// future sections ordered by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Asap,
    Overdue,
    Today,
    Tomorrow,
    Future(NaiveDate),
    NoDate,
    Background,
    Completed,
}

impl SectionKind {
    pub fn label(&self) -> String {
        match self {
            SectionKind::Asap => "ASAP".to_string(),
            SectionKind::Overdue => "OVERDUE".to_string(),
            SectionKind::Today => "TODAY".to_string(),
            SectionKind::Tomorrow => "TOMORROW".to_string(),
            SectionKind::Future(date) => date.format("%a, %b %d").to_string(),
            SectionKind::NoDate => "NO DATE".to_string(),
            SectionKind::Background => "BACKGROUND".to_string(),
            SectionKind::Completed => "COMPLETED".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSection<'a> {
    pub kind: SectionKind,
    pub items: Vec<&'a TodoItem>,
}

/// The one section `item` belongs to.
///
/// Precedence: completed, ASAP, any due date (overdue, today, tomorrow,
/// future), background, no date.
pub fn section_of(item: &TodoItem, today: NaiveDate) -> SectionKind {
    if item.done {
        return SectionKind::Completed;
    }
    if item.is_asap {
        return SectionKind::Asap;
    }
    if let Some(due) = item.due_date {
        return if due < today {
            SectionKind::Overdue
        } else if due == today {
            SectionKind::Today
        } else if due == next_day(today) {
            SectionKind::Tomorrow
        } else {
            SectionKind::Future(due)
        };
    }
    if item.is_background {
        SectionKind::Background
    } else {
        SectionKind::NoDate
    }
}

/// Partition `items` into non-empty schedule sections in display order.
///
/// Overdue items are ordered by due date and completed items by most recent
/// completion (never-stamped ones last). Everything else keeps store order.
pub fn classify(items: &[TodoItem], today: NaiveDate) -> Vec<ScheduleSection<'_>> {
    let mut buckets: BTreeMap<SectionKind, Vec<&TodoItem>> = BTreeMap::new();
    for item in items {
        buckets.entry(section_of(item, today)).or_default().push(item);
    }

    buckets
        .into_iter()
        .map(|(kind, mut items)| {
            match kind {
                SectionKind::Overdue => items.sort_by_key(|item| item.due_date),
                SectionKind::Completed => {
                    items.sort_by(|a, b| b.completed_at.cmp(&a.completed_at))
                }
                _ => {}
            }
            ScheduleSection { kind, items }
        })
        .collect()
}

/// All items in schedule order, as used by the pick-a-todo menus.
pub fn schedule_order(items: &[TodoItem], today: NaiveDate) -> Vec<&TodoItem> {
    classify(items, today)
        .into_iter()
        .flat_map(|section| section.items)
        .collect()
}

/// Open items that need attention within the coming week: ASAP, overdue,
/// and everything due from today through `today + 7`.
pub fn week_agenda(items: &[TodoItem], today: NaiveDate) -> Vec<ScheduleSection<'_>> {
    let week_end = today
        .checked_add_days(Days::new(WEEK_AGENDA_DAYS))
        .unwrap_or(NaiveDate::MAX);

    classify(items, today)
        .into_iter()
        .filter(|section| match section.kind {
            SectionKind::Asap
            | SectionKind::Overdue
            | SectionKind::Today
            | SectionKind::Tomorrow => true,
            SectionKind::Future(date) => date <= week_end,
            _ => false,
        })
        .collect()
}

/// Short parenthesised hint about where an item sits in the schedule.
pub fn date_context(item: &TodoItem, today: NaiveDate) -> String {
    if item.done {
        return "(DONE)".to_string();
    }
    if item.is_asap {
        return "(ASAP)".to_string();
    }
    if item.is_background {
        return "(BG)".to_string();
    }
    let Some(due) = item.due_date else {
        return String::new();
    };

    if due < today {
        format!("(OVERDUE: {})", due.format("%b %d"))
    } else if due == today {
        "(TODAY)".to_string()
    } else if due == next_day(today) {
        "(TOMORROW)".to_string()
    } else {
        format!("({})", due.format("%a, %b %d"))
    }
}

/// Counts shown in the status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub open: usize,
    pub done: usize,
    pub overdue: usize,
    pub asap: usize,
}

impl Summary {
    pub fn of(items: &[TodoItem], today: NaiveDate) -> Self {
        items.iter().fold(Summary::default(), |mut summary, item| {
            if item.done {
                summary.done += 1;
                return summary;
            }
            summary.open += 1;
            if item.is_asap {
                summary.asap += 1;
            }
            if item.due_date.is_some_and(|due| due < today) {
                summary.overdue += 1;
            }
            summary
        })
    }
}
