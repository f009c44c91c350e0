use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tracing::{info, warn};

use crate::config::ShortcutBinding;
use crate::error::{BinderError, Result};
use crate::notify;
use crate::sequencer::PasteSequencer;

/// A registered shortcut and the image it pastes. Created during
/// registration, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct HotkeyBinding {
    pub shortcut: String,
    pub photo_path: PathBuf,
}

/// Outcome of a registration pass over the configured shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationReport {
    pub registered: usize,
    pub skipped: usize,
}

pub struct HotkeyRegistrar {
    manager: GlobalHotKeyManager,
    bindings: HashMap<u32, HotkeyBinding>,
}

impl HotkeyRegistrar {
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new().map_err(|e| {
            BinderError::hotkey(format!("failed to create global hotkey manager: {e}"))
        })?;

        Ok(Self {
            manager,
            bindings: HashMap::new(),
        })
    }

    /// Register every configured shortcut whose image file exists on disk.
    ///
    /// Bindings with a missing image file are skipped with a warning (and a
    /// toast when `notify_missing` is set). Unparseable shortcut strings and
    /// OS registration failures are skipped the same way so the remaining
    /// shortcuts stay usable.
    pub fn register_bindings(
        &mut self,
        shortcuts: &[ShortcutBinding],
        notify_missing: bool,
    ) -> RegistrationReport {
        let mut report = RegistrationReport {
            registered: 0,
            skipped: 0,
        };

        for binding in shortcuts {
            if !binding.photo_path.exists() {
                warn!("no {}", binding.photo_path.display());
                if notify_missing {
                    notify::notify(
                        "Notice",
                        &format!("Image file {} is missing", binding.photo_path.display()),
                    );
                }
                report.skipped += 1;
                continue;
            }

            match self.register_one(binding) {
                Ok(()) => {
                    info!("add {} to {}", binding.photo_path.display(), binding.shortcut);
                    report.registered += 1;
                }
                Err(err) => {
                    warn!("skipping shortcut '{}': {err}", binding.shortcut);
                    report.skipped += 1;
                }
            }
        }

        report
    }

    fn register_one(&mut self, binding: &ShortcutBinding) -> Result<()> {
        let hotkey = parse_hotkey(&binding.shortcut)?;
        self.manager.register(hotkey).map_err(|e| {
            BinderError::hotkey(format!("failed to register '{}': {e}", binding.shortcut))
        })?;

        self.bindings.insert(
            hotkey.id(),
            HotkeyBinding {
                shortcut: binding.shortcut.clone(),
                photo_path: binding.photo_path.clone(),
            },
        );
        Ok(())
    }

    pub fn binding_for(&self, id: u32) -> Option<&HotkeyBinding> {
        self.bindings.get(&id)
    }

    pub fn registered_count(&self) -> usize {
        self.bindings.len()
    }

    /// Drain hotkey events on a dedicated blocking thread, running the paste
    /// sequence for each press. Triggers execute on this one thread, so two
    /// hotkey presses can never interleave mid-sequence.
    pub async fn start_listener(self: Arc<Self>, sequencer: Arc<PasteSequencer>) -> Result<()> {
        let receiver = GlobalHotKeyEvent::receiver();

        tokio::task::spawn_blocking(move || {
            loop {
                if let Ok(event) = receiver.try_recv() {
                    if event.state == HotKeyState::Pressed {
                        match self.binding_for(event.id) {
                            Some(binding) => sequencer.run(binding),
                            None => warn!("hotkey event for unknown id {}", event.id),
                        }
                    }
                }

                // Small sleep to prevent busy waiting
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
        });

        Ok(())
    }
}

pub fn parse_hotkey(spec: &str) -> Result<global_hotkey::hotkey::HotKey> {
    use global_hotkey::hotkey::{HotKey, Modifiers};

    let binding = spec.to_lowercase();
    let parts: Vec<&str> = binding.split('+').map(|s| s.trim()).collect();

    let mut modifiers = Modifiers::empty();
    let mut key_code = None;

    for part in &parts {
        match *part {
            "" => {
                return Err(BinderError::invalid_shortcut(spec, "empty segment"));
            }
            "ctrl" | "control" => modifiers |= Modifiers::CONTROL,
            "alt" => modifiers |= Modifiers::ALT,
            "shift" => modifiers |= Modifiers::SHIFT,
            "meta" | "cmd" | "super" => modifiers |= Modifiers::SUPER,
            key => {
                if key_code.is_some() {
                    return Err(BinderError::invalid_shortcut(
                        spec,
                        "multiple keys specified",
                    ));
                }
                key_code = Some(parse_key_code(spec, key)?);
            }
        }
    }

    let code =
        key_code.ok_or_else(|| BinderError::invalid_shortcut(spec, "no key specified"))?;

    Ok(HotKey::new(Some(modifiers), code))
}

fn parse_key_code(spec: &str, key: &str) -> Result<global_hotkey::hotkey::Code> {
    use global_hotkey::hotkey::Code;

    let code = match key {
        // Letters
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,

        // Numbers
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,

        // Function keys
        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,

        // Special keys
        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "tab" => Code::Tab,
        "escape" | "esc" => Code::Escape,
        "backspace" => Code::Backspace,
        "delete" => Code::Delete,
        "insert" => Code::Insert,
        "home" => Code::Home,
        "end" => Code::End,
        "pageup" => Code::PageUp,
        "pagedown" => Code::PageDown,

        // Arrow keys
        "up" | "arrowup" => Code::ArrowUp,
        "down" | "arrowdown" => Code::ArrowDown,
        "left" | "arrowleft" => Code::ArrowLeft,
        "right" | "arrowright" => Code::ArrowRight,

        _ => {
            return Err(BinderError::invalid_shortcut(
                spec,
                format!("unsupported key '{key}'"),
            ))
        }
    };

    Ok(code)
}
