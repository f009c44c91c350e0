//! Settings file loading and validation.
//!
//! Settings are read once at startup from a JSON file and stay immutable
//! for the process lifetime:
//!
//! ```json
//! {
//!   "shortcuts": [
//!     {"shortcut": "ctrl+alt+1", "photo_path": "images/thanks.png"}
//!   ],
//!   "need_enter": true,
//!   "sleep_time": 1.0
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BinderError, Result};

/// One hotkey-to-image association from the settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortcutBinding {
    /// Shortcut specification, e.g. `"ctrl+alt+1"`.
    pub shortcut: String,
    /// Path of the image file pasted when the shortcut fires.
    pub photo_path: PathBuf,
}

/// Top-level settings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Configured shortcut bindings.
    #[serde(default)]
    pub shortcuts: Vec<ShortcutBinding>,

    /// Send an Enter keystroke after the paste.
    #[serde(default)]
    pub need_enter: bool,

    /// Seconds to wait between the paste and the Enter keystroke.
    #[serde(default = "default_sleep_time")]
    pub sleep_time: f64,

    /// Show a desktop notification for each configured image file that is
    /// missing on disk. Missing files are always logged regardless.
    #[serde(default)]
    pub notify_missing_images: bool,
}

fn default_sleep_time() -> f64 {
    1.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shortcuts: Vec::new(),
            need_enter: false,
            sleep_time: default_sleep_time(),
            notify_missing_images: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing file is reported as [`BinderError::ConfigMissing`] so the
    /// caller can surface the dedicated "settings not found" notification;
    /// any other read or parse failure is a [`BinderError::ConfigLoad`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(BinderError::ConfigMissing {
                    path: path.to_path_buf(),
                });
            }
            Err(err) => {
                return Err(BinderError::config_load(
                    path.display().to_string(),
                    err.to_string(),
                ));
            }
        };

        let settings: Settings = serde_json::from_str(&contents).map_err(|err| {
            BinderError::config_load(path.display().to_string(), err.to_string())
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Validate field values. Existence of the image files is checked later
    /// during hotkey registration, not here.
    pub fn validate(&self) -> Result<()> {
        if self.sleep_time < 0.0 || !self.sleep_time.is_finite() {
            return Err(BinderError::config_validation(format!(
                "sleep_time must be a non-negative number of seconds, got {}",
                self.sleep_time
            )));
        }

        for binding in &self.shortcuts {
            if binding.shortcut.trim().is_empty() {
                return Err(BinderError::config_validation(
                    "shortcut cannot be empty",
                ));
            }
        }

        Ok(())
    }

    /// Delay between the paste keystroke and the Enter keystroke.
    pub fn enter_delay(&self) -> Duration {
        Duration::from_secs_f64(self.sleep_time)
    }
}
