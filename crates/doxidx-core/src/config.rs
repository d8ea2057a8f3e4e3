//! Configuration types for doxidx.
//!
//! [`Config::load`] reads `~/.config/doxidx/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[query]
limit     = 200
substring = false

[ui]
show_urls              = true
targets_pane_width_pct = 40

[keybindings]
query_focus = "/"
toggle_mode = "m"
reload      = "r"
jump_top    = "g"
jump_end    = "G"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/doxidx/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[query]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Maximum number of results rendered per keystroke in the TUI. The
    /// match counter still reports the full total.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Start in substring mode instead of prefix mode.
    #[serde(default)]
    pub substring: bool,
}

fn default_limit() -> usize { 200 }

impl Default for QueryConfig {
    fn default() -> Self {
        Self { limit: default_limit(), substring: false }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_urls")]
    pub show_urls: bool,
    #[serde(default = "default_targets_pane_width_pct")]
    pub targets_pane_width_pct: u16,
}

fn default_show_urls() -> bool { true }
fn default_targets_pane_width_pct() -> u16 { 40 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_urls: default_show_urls(),
            targets_pane_width_pct: default_targets_pane_width_pct(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_toggle_mode")]
    pub toggle_mode: String,
    #[serde(default = "default_reload")]
    pub reload: String,
    #[serde(default = "default_jump_top")]
    pub jump_top: String,
    #[serde(default = "default_jump_end")]
    pub jump_end: String,
}

fn default_query_focus() -> String { "/".to_string() }
fn default_toggle_mode() -> String { "m".to_string() }
fn default_reload() -> String { "r".to_string() }
fn default_jump_top() -> String { "g".to_string() }
fn default_jump_end() -> String { "G".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            query_focus: default_query_focus(),
            toggle_mode: default_toggle_mode(),
            reload: default_reload(),
            jump_top: default_jump_top(),
            jump_end: default_jump_end(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/doxidx/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("doxidx")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.query.limit, 200);
        assert!(!cfg.query.substring);
        assert!(cfg.ui.show_urls);
        assert_eq!(cfg.ui.targets_pane_width_pct, 40);
        assert_eq!(cfg.keybindings.query_focus, "/");
    }
}
