//! # pastebind
//!
//! Global keyboard shortcuts that paste pre-selected images into whatever
//! application currently has focus.
//!
//! ## Features
//!
//! - Multiple global hotkeys, each bound to an image file
//! - Saves and restores clipboard text around each paste
//! - Converts any decodable image file to clipboard bitmap data
//! - Optional Enter keystroke after the paste, with a configurable delay
//! - Desktop notifications for startup and fatal configuration problems
//! - JSON configuration file support
//!
//! ## Example
//!
//! ```no_run
//! use pastebind::{HotkeyRegistrar, Settings};
//!
//! let settings = Settings::from_file("settings.json").unwrap();
//! let mut registrar = HotkeyRegistrar::new().unwrap();
//! let report =
//!     registrar.register_bindings(&settings.shortcuts, settings.notify_missing_images);
//! println!("{} shortcuts ready", report.registered);
//! ```
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "shortcuts": [
//!     {"shortcut": "ctrl+alt+1", "photo_path": "images/thanks.png"},
//!     {"shortcut": "ctrl+alt+2", "photo_path": "images/done.png"}
//!   ],
//!   "need_enter": true,
//!   "sleep_time": 1.0
//! }
//! ```

pub mod bitmap;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod hotkey;
pub mod keys;
pub mod logging;
pub mod notify;
pub mod sequencer;

pub use config::{Settings, ShortcutBinding};
pub use error::{BinderError, Result};
pub use hotkey::{HotkeyBinding, HotkeyRegistrar, RegistrationReport};
pub use keys::KeySender;
pub use sequencer::PasteSequencer;
