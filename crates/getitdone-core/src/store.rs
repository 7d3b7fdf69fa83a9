use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use log::{debug, info};
use tempfile::NamedTempFile;

use crate::error::CoreError;
use crate::models::{NewTodoData, Schedule, TodoItem};

/// The authoritative todo collection.
///
/// Every mutation either fully applies and is persisted, or leaves the
/// collection untouched and returns an error. Setters keep due date, ASAP
/// and background mutually exclusive.
pub trait TodoRepository {
    /// Snapshot of all todos in store order.
    fn items(&self) -> &[TodoItem];
    fn add(&mut self, data: NewTodoData) -> Result<TodoItem, CoreError>;
    /// Flip done/open, stamping or clearing the completion time.
    fn toggle(&mut self, id: u32) -> Result<TodoItem, CoreError>;
    fn remove(&mut self, id: u32) -> Result<TodoItem, CoreError>;
    /// Set or clear the due date. Either way ASAP and background are cleared.
    fn set_due_date(&mut self, id: u32, date: Option<NaiveDate>) -> Result<TodoItem, CoreError>;
    fn set_asap(&mut self, id: u32, asap: bool) -> Result<TodoItem, CoreError>;
    fn set_background(&mut self, id: u32, background: bool) -> Result<TodoItem, CoreError>;
    /// Blank notes clear the field; anything else is stored trimmed.
    fn set_notes(&mut self, id: u32, notes: Option<&str>) -> Result<TodoItem, CoreError>;
    fn log_time(&mut self, id: u32, minutes: u32) -> Result<TodoItem, CoreError>;

    fn find(&self, id: u32) -> Option<&TodoItem> {
        self.items().iter().find(|item| item.id == id)
    }

    fn set_schedule(&mut self, id: u32, schedule: Schedule) -> Result<TodoItem, CoreError> {
        match schedule {
            Schedule::Unscheduled => self.set_due_date(id, None),
            Schedule::Due(date) => self.set_due_date(id, Some(date)),
            Schedule::Asap => self.set_asap(id, true),
            Schedule::Background => self.set_background(id, true),
        }
    }
}

/// A [`TodoRepository`] persisted as a pretty-printed JSON array.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    items: Vec<TodoItem>,
}

impl JsonStore {
    /// Load the store at `path`. A missing, blank or `null` file is an
    /// empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str::<Option<Vec<TodoItem>>>(&content)?.unwrap_or_default()
            }
        } else {
            Vec::new()
        };
        debug!("loaded {} todo(s) from {}", items.len(), path.display());
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn next_id(&self) -> Result<u32, CoreError> {
        match self.items.iter().map(|item| item.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                CoreError::InvalidInput("No todo ids left; the highest id is already in use.".to_string())
            }),
        }
    }

    /// Persist `items` and only then adopt them as the in-memory state.
    fn commit(&mut self, items: Vec<TodoItem>) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(&items)?;
        atomic_write(&self.path, content.as_bytes())?;
        debug!("saved {} todo(s) to {}", items.len(), self.path.display());
        self.items = items;
        Ok(())
    }

    fn update<F>(&mut self, id: u32, apply: F) -> Result<TodoItem, CoreError>
    where
        F: FnOnce(&mut TodoItem),
    {
        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::NotFound(id))?;
        apply(item);
        let updated = item.clone();
        self.commit(items)?;
        Ok(updated)
    }
}

impl TodoRepository for JsonStore {
    fn items(&self) -> &[TodoItem] {
        &self.items
    }

    fn add(&mut self, data: NewTodoData) -> Result<TodoItem, CoreError> {
        let text = data.text.trim();
        if text.is_empty() {
            return Err(CoreError::InvalidInput(
                "Todo text cannot be empty.".to_string(),
            ));
        }

        let mut item = TodoItem::new(self.next_id()?, text);
        item.apply_schedule(data.schedule);

        let mut items = self.items.clone();
        items.push(item.clone());
        self.commit(items)?;
        info!("added todo {} ({:?})", item.id, data.schedule);
        Ok(item)
    }

    fn toggle(&mut self, id: u32) -> Result<TodoItem, CoreError> {
        let item = self.update(id, |item| {
            item.done = !item.done;
            item.completed_at = item.done.then(Utc::now);
        })?;
        info!("todo {} marked {}", id, if item.done { "done" } else { "open" });
        Ok(item)
    }

    fn remove(&mut self, id: u32) -> Result<TodoItem, CoreError> {
        let mut items = self.items.clone();
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CoreError::NotFound(id))?;
        let removed = items.remove(position);
        self.commit(items)?;
        info!("removed todo {}", id);
        Ok(removed)
    }

    fn set_due_date(&mut self, id: u32, date: Option<NaiveDate>) -> Result<TodoItem, CoreError> {
        let schedule = date.map_or(Schedule::Unscheduled, Schedule::Due);
        let item = self.update(id, |item| item.apply_schedule(schedule))?;
        info!("todo {} scheduled as {:?}", id, schedule);
        Ok(item)
    }

    fn set_asap(&mut self, id: u32, asap: bool) -> Result<TodoItem, CoreError> {
        let item = self.update(id, |item| {
            if asap {
                item.apply_schedule(Schedule::Asap);
            } else {
                item.is_asap = false;
            }
        })?;
        info!("todo {} asap={}", id, asap);
        Ok(item)
    }

    fn set_background(&mut self, id: u32, background: bool) -> Result<TodoItem, CoreError> {
        let item = self.update(id, |item| {
            if background {
                item.apply_schedule(Schedule::Background);
            } else {
                item.is_background = false;
            }
        })?;
        info!("todo {} background={}", id, background);
        Ok(item)
    }

    fn set_notes(&mut self, id: u32, notes: Option<&str>) -> Result<TodoItem, CoreError> {
        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let item = self.update(id, |item| item.notes = notes)?;
        info!("todo {} notes {}", id, if item.notes.is_some() { "set" } else { "cleared" });
        Ok(item)
    }

    fn log_time(&mut self, id: u32, minutes: u32) -> Result<TodoItem, CoreError> {
        let item = self.update(id, |item| {
            item.logged_minutes = item.logged_minutes.saturating_add(minutes)
        })?;
        info!("todo {} logged {}m (total {}m)", id, minutes, item.logged_minutes);
        Ok(item)
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
