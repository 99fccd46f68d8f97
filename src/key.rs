//! Type-safe key bindings for the timer widget.
//!
//! A [`Binding`] pairs one or more key presses with the help text shown for
//! them. Bindings can be disabled at runtime, in which case they stop
//! matching input and disappear from help views. This is how the widget
//! expresses "this control is currently unavailable" without any extra
//! state in the caller.
//!
//! Bindings can be built either with the builder methods:
//!
//! ```rust
//! use digital_timer::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let reset = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset");
//! ```
//!
//! or with the option-style constructors:
//!
//! ```rust
//! use digital_timer::key;
//!
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["q", "ctrl+c"]),
//!     key::with_help("q", "quit"),
//! ]);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Parses a key description like `"q"`, `"space"`, `"pgup"` or `"ctrl+c"`.
fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = s;

    loop {
        if let Some(tail) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = tail;
        } else {
            break;
        }
    }

    let code = match rest {
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        _ => {
            let mut chars = rest.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyPress { code, mods })
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// Display label for the key(s), e.g. `"←/h"`.
    pub key: String,
    /// Short description of the action, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of key presses bound to one action, with help text.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key presses. `KeyCode` values and
    /// `(KeyCode, KeyModifiers)` tuples both convert into [`KeyPress`].
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text shown for this binding.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently accepts input. A binding with no keys
    /// is never enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are skipped by help views.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|press| press_matches(press, msg))
    }
}

fn press_matches(press: &KeyPress, msg: &KeyMsg) -> bool {
    if press.code != msg.key {
        return false;
    }
    let mut have = msg.modifiers;
    let mut want = press.mods;
    // Terminals report shifted characters with the SHIFT modifier set;
    // the character itself already carries the distinction.
    if matches!(press.code, KeyCode::Char(_)) {
        have.remove(KeyModifiers::SHIFT);
        want.remove(KeyModifiers::SHIFT);
    }
    have == want
}

/// An option applied by [`new_binding`] while constructing a [`Binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: bind the given key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b| b.keys = keys)
}

/// Option: bind keys described as strings, e.g. `&["q", "ctrl+c"]`.
/// Descriptions that do not parse are ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = keys.iter().filter_map(|s| parse_key(s)).collect();
    with_keys(keys)
}

/// Option: set the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

/// Reports whether the key message triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether the key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Key bindings a model exposes to help views.
///
/// `short_help` feeds the single-line help view; `full_help` returns
/// columns of related bindings for the expanded view.
pub trait KeyMap {
    /// The essential bindings, displayed in one line.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
