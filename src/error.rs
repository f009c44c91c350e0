//! Custom error types for pastebind.
//!
//! This module provides structured error types using `thiserror` so the
//! binary can tell fatal configuration problems apart from trigger-phase
//! failures that only warrant a warning.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pastebind operations.
#[derive(Error, Debug)]
pub enum BinderError {
    /// The settings file does not exist at the expected path.
    #[error("settings file not found at '{}'", path.display())]
    ConfigMissing { path: PathBuf },

    /// Error reading or parsing the settings file.
    #[error("failed to load settings from '{path}': {reason}")]
    ConfigLoad { path: String, reason: String },

    /// Configuration validation error.
    #[error("configuration error: {0}")]
    ConfigValidation(String),

    /// Error parsing a shortcut specification.
    #[error("invalid shortcut '{shortcut}': {reason}")]
    InvalidShortcut { shortcut: String, reason: String },

    /// Error registering or handling a global hotkey.
    #[error("hotkey error: {0}")]
    Hotkey(String),

    /// None of the configured image files exist on disk.
    #[error("no usable shortcuts: none of the configured image files exist")]
    NoUsableShortcuts,

    /// Clipboard read/write failure.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// The image file could not be decoded or converted to bitmap data.
    #[error("failed to prepare image '{path}': {reason}")]
    ImageDecode { path: String, reason: String },

    /// Error injecting a synthetic keystroke.
    #[error("failed to send '{key}' keystroke: {reason}")]
    KeySend { key: String, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pastebind operations.
pub type Result<T> = std::result::Result<T, BinderError>;

impl BinderError {
    /// Create a new ConfigLoad error.
    pub fn config_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new ConfigValidation error.
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation(message.into())
    }

    /// Create a new InvalidShortcut error.
    pub fn invalid_shortcut(shortcut: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShortcut {
            shortcut: shortcut.into(),
            reason: reason.into(),
        }
    }

    /// Create a new Hotkey error.
    pub fn hotkey(message: impl Into<String>) -> Self {
        Self::Hotkey(message.into())
    }

    /// Create a new Clipboard error.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }

    /// Create a new ImageDecode error.
    pub fn image_decode(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ImageDecode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new KeySend error.
    pub fn key_send(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::KeySend {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is fatal for startup (as opposed to a
    /// trigger-phase failure that only gets logged).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissing { .. }
                | Self::ConfigLoad { .. }
                | Self::ConfigValidation(_)
                | Self::NoUsableShortcuts
        )
    }
}
