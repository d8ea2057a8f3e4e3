//! Colour theme for the doxidx TUI.
//!
//! Themes are defined as TOML files. The default theme is embedded in the
//! binary via [`include_str!`] so the application works without any files
//! on disk. Call [`Theme::load_default`] at startup and pass the result
//! through the application as a shared reference.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawTheme {
    #[serde(default)]
    border_focused: RawStyle,
    #[serde(default)]
    border_unfocused: RawStyle,
    #[serde(default)]
    key: RawStyle,
    #[serde(default)]
    key_match: RawStyle,
    #[serde(default)]
    name: RawStyle,
    #[serde(default)]
    url: RawStyle,
    #[serde(default)]
    label: RawStyle,
    #[serde(default)]
    status: RawStyle,
    #[serde(default)]
    help_key: RawStyle,
    #[serde(default)]
    help_text: RawStyle,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Resolved styles for every themed element.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,
    /// An entry key in the result list.
    pub key: Style,
    /// The matched span of a key.
    pub key_match: Style,
    /// The display name shown next to a key.
    pub name: Style,
    /// A target URL in the target pane.
    pub url: Style,
    /// A target's scope label.
    pub label: Style,
    /// The bottom status line.
    pub status: Style,
    pub help_key: Style,
    pub help_text: Style,
}

impl Theme {
    /// Load the embedded default theme.
    pub fn load_default() -> Theme {
        Self::from_toml(DEFAULT_THEME_SRC)
            .expect("embedded default theme must be valid TOML")
    }

    fn from_toml(src: &str) -> anyhow::Result<Theme> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Theme {
            border_focused: raw.border_focused.into_style(),
            border_unfocused: raw.border_unfocused.into_style(),
            key: raw.key.into_style(),
            key_match: raw.key_match.into_style(),
            name: raw.name.into_style(),
            url: raw.url.into_style(),
            label: raw.label.into_style(),
            status: raw.status.into_style(),
            help_key: raw.help_key.into_style(),
            help_text: raw.help_text.into_style(),
        })
    }
}

/// Parse a colour name or `#rrggbb` literal.
fn parse_color(s: &str) -> Option<Color> {
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_parses() {
        let theme = Theme::load_default();
        assert_eq!(theme.border_focused, Style::default().fg(Color::Cyan));
        assert_eq!(
            theme.key_match,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_color("#1a2b3c"), Some(Color::Rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_color("#xyz"), None);
        assert_eq!(parse_color("mauve"), None);
    }
}
