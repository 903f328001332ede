use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlumeConfigInner {
    pub logging: LoggingConfig,
    pub render: RenderConfig,
}

/// Arc-wrapped config so subsystems can hold a cheap clone.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PlumeConfig {
    #[serde(flatten, default)]
    inner: Arc<PlumeConfigInner>,
}

impl Deref for PlumeConfig {
    type Target = PlumeConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PlumeConfig {
    fn deref_mut(&mut self) -> &mut PlumeConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// `[logging]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub level: String,
    /// Extra filter directives, e.g. `plume_schema=trace`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; `None` disables file output.
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

/// `[render]` table: layout knobs applied on top of the namelist format.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit each section's tag on its own column-0 line above the section body.
    pub section_headers: bool,
    /// End written documents with a newline.
    pub trailing_newline: bool,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            path: None,
            json: false,
            max_files: 10,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { section_headers: false, trailing_newline: true }
    }
}
