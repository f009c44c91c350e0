//! Synthetic keystroke injection backed by the `enigo` crate.
//!
//! Keystrokes go to whatever window currently has focus; there is no
//! validation that the intended target application is focused.

use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use crate::error::{BinderError, Result};

/// Sends paste and enter keystrokes to the foreground application.
///
/// A fresh `Enigo` handle is created per keystroke because `Enigo` is not
/// `Send` and the handle is cheap to construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySender;

impl KeySender {
    pub fn new() -> Self {
        Self
    }

    /// Send the OS paste shortcut (Cmd+V on macOS, Ctrl+V elsewhere).
    pub fn send_paste(&self) -> Result<()> {
        let mut enigo = new_handle("paste")?;

        #[cfg(target_os = "macos")]
        let modifier = Key::Meta;
        #[cfg(not(target_os = "macos"))]
        let modifier = Key::Control;

        enigo
            .key(modifier, Direction::Press)
            .map_err(|e| BinderError::key_send("paste", e.to_string()))?;
        let result = enigo
            .key(Key::Unicode('v'), Direction::Click)
            .map_err(|e| BinderError::key_send("paste", e.to_string()));
        // Release the modifier even if the 'v' click failed.
        enigo
            .key(modifier, Direction::Release)
            .map_err(|e| BinderError::key_send("paste", e.to_string()))?;

        result
    }

    /// Send an Enter keystroke.
    pub fn send_enter(&self) -> Result<()> {
        let mut enigo = new_handle("enter")?;
        enigo
            .key(Key::Return, Direction::Click)
            .map_err(|e| BinderError::key_send("enter", e.to_string()))
    }
}

fn new_handle(key: &str) -> Result<Enigo> {
    Enigo::new(&Settings::default()).map_err(|e| BinderError::key_send(key, e.to_string()))
}
