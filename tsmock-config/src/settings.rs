//! Generator settings and their explicit reload cycle.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tsmock_core::Indent;

use crate::{Error, Result, SourceContext};

/// Default settings file name.
pub const CONFIG_FILE: &str = "tsmock.toml";

/// Table that holds [`Settings`] in the settings file.
pub const SETTINGS_SECTION: &str = "settings";

/// Where mocks go when nothing is configured, relative to the mocked file.
pub const DEFAULT_MOCK_LOCATION: &str = "../__mocks__";

/// Settings for a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Output directory, resolved against the path of the mocked file
    /// (so `..` is the directory the file lives in).
    pub mock_location: String,
    /// Indentation unit for the mock expression.
    pub indent: Indent,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mock_location: DEFAULT_MOCK_LOCATION.to_string(),
            indent: Indent::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    settings: Settings,
}

impl Settings {
    /// Parse settings from the content of a settings file.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let file: SettingsFile =
            toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

        if file.settings.mock_location.trim().is_empty() {
            return Err(source_ctx.validation_error(
                "mock_location must not be empty",
                crate::validate::find_value_span(content, "mock_location", ""),
            ));
        }

        Ok(file.settings)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_str_with_filename(&content, &path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }
}

/// A configuration change reported by the host environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigChange {
    keys: Vec<String>,
}

impl ConfigChange {
    /// Create a change event for the given dotted keys (e.g. `settings.indent`).
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if any changed key is `section` or lives below it.
    pub fn affects(&self, section: &str) -> bool {
        self.keys.iter().any(|key| {
            key == section
                || key
                    .strip_prefix(section)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

/// Owns the current [`Settings`] and the file they came from.
///
/// Settings are read once on open and only change through [`reload`] or
/// [`on_change`]; callers hand `settings()` to each generation request.
///
/// [`reload`]: ConfigStore::reload
/// [`on_change`]: ConfigStore::on_change
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    settings: Settings,
}

impl ConfigStore {
    /// Open the settings file at `path` (defaults when it does not exist).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = Settings::load(&path)?;
        Ok(Self { path, settings })
    }

    /// Get the settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Re-read the settings file.
    ///
    /// On error the previous settings are kept.
    pub fn reload(&mut self) -> Result<()> {
        self.settings = Settings::load(&self.path)?;
        tracing::debug!(path = %self.path.display(), "settings reloaded");
        Ok(())
    }

    /// Reload if `change` touches the settings section.
    ///
    /// Returns whether a reload happened.
    pub fn on_change(&mut self, change: &ConfigChange) -> Result<bool> {
        if !change.affects(SETTINGS_SECTION) {
            return Ok(false);
        }
        self.reload()?;
        Ok(true)
    }
}
