use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use scanner_engine::{ScreenSettings, DEFAULT_COOLDOWN};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

/// Overrides the settings file location.
pub const SETTINGS_ENV: &str = "SCANNER_SETTINGS";
const DEFAULT_SETTINGS_FILE: &str = "scanner.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub cooldown_ms: u64,
    /// Store-side bound on a single lookup; `None` waits indefinitely.
    pub lookup_timeout_ms: Option<u64>,
    /// Keys seeded into the in-memory record store.
    pub known_records: Vec<String>,
    pub log_destination: LogDestination,
    /// Treat the camera permission as granted on startup.
    pub grant_camera: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN.as_millis() as u64,
            lookup_timeout_ms: None,
            known_records: Vec::new(),
            log_destination: LogDestination::default(),
            grant_camera: true,
        }
    }
}

impl AppSettings {
    pub fn screen_settings(&self) -> ScreenSettings {
        ScreenSettings {
            cooldown: Duration::from_millis(self.cooldown_ms),
        }
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

/// Loads settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<AppSettings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppSettings::default()),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
