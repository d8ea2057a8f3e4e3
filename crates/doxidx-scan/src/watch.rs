//! Watch — signals when the search directory is regenerated.
//!
//! Doxygen rewrites every fragment on a doc build, so the watcher does not
//! try to be clever about which file changed: any create/modify/remove in
//! the search directory collapses into one "reload the index" signal. The
//! caller polls [`IndexWatcher::changed`] from its own loop and rebuilds
//! on its own thread.

use crate::ScanError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::{self, Receiver};

/// A live watch on a search directory. Dropping it stops the watch.
pub struct IndexWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<()>,
}

/// Start watching `search_dir` for fragment changes.
pub fn watch(search_dir: &Path) -> Result<IndexWatcher, ScanError> {
    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        match res {
            Ok(event) => {
                if matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    let _ = tx.send(());
                }
            }
            Err(err) => tracing::warn!(error = %err, "watch event error"),
        }
    })
    .map_err(|e| ScanError::Watch { path: search_dir.to_path_buf(), source: e })?;

    watcher
        .watch(search_dir, RecursiveMode::NonRecursive)
        .map_err(|e| ScanError::Watch { path: search_dir.to_path_buf(), source: e })?;

    tracing::debug!(dir = %search_dir.display(), "watching for fragment changes");
    Ok(IndexWatcher { _watcher: watcher, rx })
}

impl IndexWatcher {
    /// Drain pending notifications. Returns true when anything changed
    /// since the last call — successive events between polls collapse into
    /// one reload.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
