use std::path::PathBuf;

use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

const CONFIG_FILE: &str = "getitdone.toml";
const ENV_PREFIX: &str = "GETITDONE_";
const DEFAULT_STORE_FILE: &str = "todos.json";

/// How the todo table is laid out.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Every todo, grouped into schedule sections
    #[default]
    Schedule,
    /// ASAP, overdue and the coming seven days
    Week,
    /// The week view with a preview of each todo's notes
    WeekNotes,
    /// A flat list with a due column
    List,
}

impl ViewMode {
    /// The view after this one in the interactive cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Schedule => ViewMode::Week,
            ViewMode::Week => ViewMode::WeekNotes,
            ViewMode::WeekNotes => ViewMode::List,
            ViewMode::List => ViewMode::Schedule,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Schedule => "Schedule",
            ViewMode::Week => "Week",
            ViewMode::WeekNotes => "Week + Notes",
            ViewMode::List => "List",
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Location of the todo file; defaults to `todos.json` next to the executable
    pub store_path: Option<PathBuf>,
    pub default_view: ViewMode,
    pub log_level: String,
    /// Defaults to `logs/` next to the todo file
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            default_view: ViewMode::Schedule,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    pub fn store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(default_store_path)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            self.store_path()
                .parent()
                .map(|dir| dir.join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }
}

fn default_store_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_STORE_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}
