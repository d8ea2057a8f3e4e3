//! Test builders — ergonomic constructors for `IndexEntry` and `Fragment`
//! values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use doxidx_core::{Fragment, IndexEntry, Target};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`IndexEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = EntryBuilder::new("capture_13")
///     .name("capture")
///     .target("../classCamera.html#a813d", "Camera")
///     .build();
/// ```
pub struct EntryBuilder {
    key: String,
    name: String,
    targets: Vec<Target>,
}

impl EntryBuilder {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        // Default display name: the key without its numeric suffix.
        let name = key.rsplit_once('_').map(|(base, _)| base).unwrap_or(&key).to_string();
        Self { key, name, targets: Vec::new() }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn target(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.targets.push(Target::new(url, label));
        self
    }

    pub fn build(self) -> IndexEntry {
        let targets = if self.targets.is_empty() {
            vec![Target::new(format!("../class{}.html", self.name), "")]
        } else {
            self.targets
        };
        IndexEntry { key: self.key, name: self.name, targets }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an entry with one target at `url`.
pub fn entry(key: &str, url: &str) -> IndexEntry {
    EntryBuilder::new(key).target(url, "").build()
}

/// Wrap entries in a `searchData` fragment.
pub fn fragment(entries: Vec<IndexEntry>) -> Fragment {
    Fragment { variable: "searchData".to_string(), entries }
}
