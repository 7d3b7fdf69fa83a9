use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single todo as persisted in the store file.
///
/// At most one of `due_date`, `is_asap` and `is_background` is set at any
/// time; the store setters keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_asap: bool,
    #[serde(default)]
    pub is_background: bool,
    pub created_at: DateTime<Utc>,
    /// Absent for open todos and for todos completed before this field existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub logged_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TodoItem {
    /// Create an open todo with no schedule, created now.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            due_date: None,
            is_asap: false,
            is_background: false,
            created_at: Utc::now(),
            completed_at: None,
            logged_minutes: 0,
            notes: None,
        }
    }

    /// The exclusive scheduling state of this todo.
    pub fn schedule(&self) -> Schedule {
        if self.is_asap {
            Schedule::Asap
        } else if self.is_background {
            Schedule::Background
        } else if let Some(date) = self.due_date {
            Schedule::Due(date)
        } else {
            Schedule::Unscheduled
        }
    }

    /// Overwrite the scheduling fields so that exactly `schedule` holds.
    pub(crate) fn apply_schedule(&mut self, schedule: Schedule) {
        self.due_date = match schedule {
            Schedule::Due(date) => Some(date),
            _ => None,
        };
        self.is_asap = schedule == Schedule::Asap;
        self.is_background = schedule == Schedule::Background;
    }

    pub fn has_notes(&self) -> bool {
        self.notes.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// The mutually exclusive scheduling states of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    #[default]
    Unscheduled,
    Due(NaiveDate),
    Asap,
    Background,
}

/// What a date expression resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParseOutcome {
    /// No recognizable date expression
    None,
    Date(NaiveDate),
    Asap,
    Background,
    /// Explicit request to remove date, ASAP and background
    Clear,
}

impl DateParseOutcome {
    pub fn is_match(&self) -> bool {
        !matches!(self, DateParseOutcome::None)
    }

    /// The schedule this outcome asks for, or `None` when nothing matched.
    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            DateParseOutcome::None => None,
            DateParseOutcome::Date(date) => Some(Schedule::Due(date)),
            DateParseOutcome::Asap => Some(Schedule::Asap),
            DateParseOutcome::Background => Some(Schedule::Background),
            DateParseOutcome::Clear => Some(Schedule::Unscheduled),
        }
    }
}

/// A sentence with its trailing date expression split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    /// Never [`DateParseOutcome::Clear`]
    pub outcome: DateParseOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct NewTodoData {
    pub text: String,
    pub schedule: Schedule,
}

impl NewTodoData {
    pub fn new(text: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            text: text.into(),
            schedule,
        }
    }
}
