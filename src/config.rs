//! Build-time client configuration.
//!
//! Values come from environment variables captured at compile time, since the
//! WASM bundle has no process environment of its own:
//! - `TASKGATE_DATA_SOURCE`: `remote` or `local` (default `local`)
//! - `TASKGATE_TASKS_URL`: tasks endpoint (default `/api/tasks`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TASKS_URL: &str = "/api/tasks";

/// Where the task collection comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    #[default]
    Local,
}

impl DataSource {
    /// Only the exact value `remote` selects the remote source.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("remote") => Self::Remote,
            _ => Self::Local,
        }
    }

    #[must_use]
    pub fn is_remote(self) -> bool {
        self == Self::Remote
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_source: DataSource,
    pub tasks_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { data_source: DataSource::default(), tasks_url: DEFAULT_TASKS_URL.to_owned() }
    }
}

impl AppConfig {
    /// Build the config from values captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TASKGATE_DATA_SOURCE"), option_env!("TASKGATE_TASKS_URL"))
    }

    #[must_use]
    pub fn from_values(data_source: Option<&str>, tasks_url: Option<&str>) -> Self {
        let tasks_url = tasks_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_TASKS_URL)
            .to_owned();
        Self { data_source: DataSource::parse(data_source), tasks_url }
    }
}
