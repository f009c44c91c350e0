//! The paste sequence executed when a bound hotkey fires.
//!
//! Per trigger: snapshot clipboard text, replace the clipboard with the
//! bound image, send a paste keystroke, optionally send Enter after the
//! configured delay, restore the snapshot. Each sub-step failure is logged
//! and the sequence continues; a trigger never crashes the listener.

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::clipboard;
use crate::config::Settings;
use crate::hotkey::HotkeyBinding;
use crate::keys::KeySender;

/// Delay between placing the image on the clipboard and the paste
/// keystroke, letting the clipboard settle.
const CLIPBOARD_SETTLE: Duration = Duration::from_millis(200);

pub struct PasteSequencer {
    keys: KeySender,
    need_enter: bool,
    enter_delay: Duration,
    // Serializes whole sequences: the snapshot/restore pair must never
    // interleave with a second trigger.
    lock: Mutex<()>,
}

impl PasteSequencer {
    pub fn new(need_enter: bool, enter_delay: Duration) -> Self {
        Self {
            keys: KeySender::new(),
            need_enter,
            enter_delay,
            lock: Mutex::new(()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.need_enter, settings.enter_delay())
    }

    /// Run the full paste sequence for one fired hotkey.
    pub fn run(&self, binding: &HotkeyBinding) {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        info!("get shortcut: {}", binding.shortcut);

        let snapshot = clipboard::read_text();

        if let Err(err) = clipboard::write_image(&binding.photo_path) {
            warn!(
                "cannot put {} on the clipboard: {err}",
                binding.photo_path.display()
            );
        }

        thread::sleep(CLIPBOARD_SETTLE);

        match self.keys.send_paste() {
            Ok(()) => info!("send paste"),
            Err(err) => warn!("{err}"),
        }

        if self.need_enter {
            thread::sleep(self.enter_delay);
            match self.keys.send_enter() {
                Ok(()) => info!("send enter"),
                Err(err) => warn!("{err}"),
            }
        }

        if let Err(err) = clipboard::restore_text(snapshot) {
            warn!("cannot restore clipboard contents: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            need_enter: true,
            sleep_time: 0.5,
            ..Settings::default()
        };

        let sequencer = PasteSequencer::from_settings(&settings);
        assert!(sequencer.need_enter);
        assert_eq!(sequencer.enter_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_enter_disabled_by_default() {
        let sequencer = PasteSequencer::from_settings(&Settings::default());
        assert!(!sequencer.need_enter);
    }
}
