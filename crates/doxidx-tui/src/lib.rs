//! doxidx TUI — ratatui application shell for incremental symbol search.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use doxidx_core::{config::Config, SymbolCategory};
use std::path::PathBuf;

/// Load the index under `root` and start the interactive search UI.
///
/// With `watch` set, the search directory is monitored and the index is
/// rebuilt in place whenever the documentation is regenerated.
pub fn run(root: PathBuf, category: Option<SymbolCategory>, watch: bool) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let theme = theme::Theme::load_default();

    let index = doxidx_scan::load_dir(&root, category)?;
    let watcher = if watch {
        let search_dir = doxidx_scan::resolve_search_dir(&root)?;
        Some(doxidx_scan::watch(&search_dir)?)
    } else {
        None
    };

    App::new(index, root, category, watcher, config, theme).run()
}
