//! doxidx-scan — filesystem side of doxidx.
//!
//! Discovers the fragment files a Doxygen build leaves under
//! `docs/html/search/`, classifies them by [`SymbolCategory`], bulk-loads
//! them into an [`Index`](doxidx_core::Index), and can watch the search
//! directory for regeneration. All I/O happens here; doxidx-core never
//! touches the filesystem.

pub mod discover;
pub mod watch;

pub use discover::{discover, load_dir, load_files, resolve_search_dir, FragmentFile};
pub use watch::{watch, IndexWatcher};

use doxidx_core::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from discovering, reading, or watching fragment files. Each
/// variant names the path it failed on.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// `root` does not contain a `search/` directory in any of the layouts
    /// Doxygen produces.
    #[error("no search index found under {path}")]
    MissingIndex { path: PathBuf },

    #[error("failed to watch {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io { path: path.into(), source }
    }
}
