//! A mini help view for the timer's key bindings.
//!
//! Renders the bindings exposed through [`key::KeyMap`] either as a single
//! line (`space start/pause • r reset • …`) or, with `show_all` set, as
//! aligned columns. Disabled bindings are skipped in both views, so
//! controls that are currently unavailable (like limit adjustment once the
//! countdown is underway) disappear from the help footer automatically.
//!
//! ```rust
//! use digital_timer::help;
//! use digital_timer::timer::TimerKeyMap;
//!
//! let help = help::Model::new();
//! let footer = help.view(&TimerKeyMap::default());
//! assert!(footer.contains("start/pause"));
//! ```

use crate::key;
use bubbletea_rs::{Cmd, Msg};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view, covering both display modes.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the truncation indicator.
    pub ellipsis: Style,
    /// Style for key names in the single-line view.
    pub short_key: Style,
    /// Style for descriptions in the single-line view.
    pub short_desc: Style,
    /// Style for the separator between single-line items.
    pub short_separator: Style,
    /// Style for key names in the column view.
    pub full_key: Style,
    /// Style for descriptions in the column view.
    pub full_desc: Style,
    /// Style for the separator between columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help view state: display mode, width budget, and styling.
#[derive(Debug, Clone)]
pub struct Model {
    /// Whether to render the full column view instead of the single line.
    pub show_all: bool,
    /// Maximum render width in cells; 0 means unlimited.
    pub width: usize,

    /// Separator between items in the single-line view.
    pub short_separator: String,
    /// Separator between columns in the full view.
    pub full_separator: String,
    /// Indicator appended when the single-line view is truncated.
    pub ellipsis: String,

    /// The styles applied while rendering.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help view with default separators and adaptive styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum render width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Help has no state driven by messages; this exists so the component
    /// can sit in an update loop like any other.
    pub fn update(&mut self, _msg: Msg) -> Option<Cmd> {
        None
    }

    /// Renders the key map in the mode selected by `show_all`.
    pub fn view<K: key::KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings as a single line, truncated with an ellipsis when
    /// a width is set and the line would overflow it.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let mut out = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for binding in bindings {
            if !binding.enabled() {
                continue;
            }

            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = binding.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles
                    .short_desc
                    .clone()
                    .inline(true)
                    .render(&help.desc),
            );

            let item_width = lipgloss::width_visible(&item);
            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(
                    " {}",
                    self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
                );
                if total_width + lipgloss::width_visible(&tail) < self.width {
                    out.push_str(&tail);
                }
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders bindings as columns of `key description` rows. Columns with
    /// no enabled bindings are dropped entirely.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns: Vec<String> = Vec::new();
        for group in &groups {
            let enabled: Vec<&&key::Binding> =
                group.iter().filter(|b| b.enabled()).collect();
            if enabled.is_empty() {
                continue;
            }

            let key_width = enabled
                .iter()
                .map(|b| lipgloss::width_visible(&b.help().key))
                .max()
                .unwrap_or(0);

            let rows: Vec<String> = enabled
                .iter()
                .map(|b| {
                    let help = b.help();
                    let padded = format!("{:key_width$}", help.key);
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&padded),
                        self.styles.full_desc.clone().inline(true).render(&help.desc),
                    )
                })
                .collect();
            columns.push(rows.join("\n"));
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(col.as_str());
        }

        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{new_binding, with_help, with_keys_str};

    struct TestKeys {
        go: key::Binding,
        stop: key::Binding,
    }

    impl key::KeyMap for TestKeys {
        fn short_help(&self) -> Vec<&key::Binding> {
            vec![&self.go, &self.stop]
        }

        fn full_help(&self) -> Vec<Vec<&key::Binding>> {
            vec![vec![&self.go], vec![&self.stop]]
        }
    }

    fn test_keys() -> TestKeys {
        TestKeys {
            go: new_binding(vec![with_keys_str(&["g"]), with_help("g", "go")]),
            stop: new_binding(vec![with_keys_str(&["s"]), with_help("s", "stop")]),
        }
    }

    #[test]
    fn test_short_view_lists_bindings() {
        let help = Model::new();
        let out = help.view(&test_keys());

        assert!(out.contains("go"));
        assert!(out.contains("stop"));
    }

    #[test]
    fn test_short_view_skips_disabled() {
        let help = Model::new();
        let mut keys = test_keys();
        keys.stop.set_enabled(false);

        let out = help.view(&keys);
        assert!(out.contains("go"));
        assert!(!out.contains("stop"));
    }

    #[test]
    fn test_full_view_renders_columns() {
        let mut help = Model::new();
        help.show_all = true;

        let out = help.view(&test_keys());
        assert!(out.contains("go"));
        assert!(out.contains("stop"));
    }

    #[test]
    fn test_full_view_drops_empty_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let mut keys = test_keys();
        keys.go.set_enabled(false);

        let out = help.view(&keys);
        assert!(!out.contains("go"));
        assert!(out.contains("stop"));
    }

    #[test]
    fn test_short_view_truncates_at_width() {
        let help = Model::new().with_width(6);
        let out = help.view(&test_keys());

        // Only the first item fits inside six cells.
        assert!(out.contains("go"));
        assert!(!out.contains("stop"));
    }
}
