//! Fragment discovery — maps a docs tree to the set of index files to load.
//!
//! Fragment files are named `<stem>_<slot>.js` where `<stem>` is a category
//! (`all`, `functions`, …) and `<slot>` is a hex digest of the first key
//! character (`all_3.js`, `functions_b.js`). Everything else in the search
//! directory (`search.js`, css, html) is skipped.
//!
//! Discovery order is deterministic — sorted by (category, slot, path) — so
//! the index's last-wins merge policy is reproducible across runs.

use crate::ScanError;
use doxidx_core::{fragment, Fragment, Index, SymbolCategory};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// One discovered fragment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentFile {
    pub path: PathBuf,
    pub category: SymbolCategory,
    /// The hex slot from the file name (`"3"` in `all_3.js`).
    pub slot: String,
}

fn fragment_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([a-z]+)_([0-9a-f]+)\.js$").expect("fragment name pattern is valid")
    })
}

/// Classify a path as a fragment file, or `None` for auxiliary files.
pub fn classify(path: &Path) -> Option<FragmentFile> {
    let name = path.file_name()?.to_str()?;
    let caps = fragment_name().captures(name)?;
    let category = SymbolCategory::from_stem(&caps[1])?;
    Some(FragmentFile {
        path: path.to_path_buf(),
        category,
        slot: caps[2].to_string(),
    })
}

/// Resolve `root` to the search directory itself. Accepts the search dir,
/// the `html/` dir that contains it, or the docs root above that.
pub fn resolve_search_dir(root: &Path) -> Result<PathBuf, ScanError> {
    if root.file_name().is_some_and(|n| n == "search") && root.is_dir() {
        return Ok(root.to_path_buf());
    }
    for candidate in [root.join("search"), root.join("html").join("search")] {
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }
    Err(ScanError::MissingIndex { path: root.to_path_buf() })
}

/// Enumerate the fragment files in `search_dir`, in deterministic
/// (category, slot, path) order.
pub fn discover(search_dir: &Path) -> Result<Vec<FragmentFile>, ScanError> {
    let entries = fs::read_dir(search_dir).map_err(|e| ScanError::io(search_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::io(search_dir, e))?;
        let path = entry.path();
        match classify(&path) {
            Some(file) => files.push(file),
            None => tracing::debug!(path = %path.display(), "skipping non-fragment file"),
        }
    }

    files.sort_unstable_by(|a, b| {
        (a.category, &a.slot, &a.path).cmp(&(b.category, &b.slot, &b.path))
    });
    tracing::debug!(files = files.len(), dir = %search_dir.display(), "discovered fragments");
    Ok(files)
}

/// Read and parse each file, preserving order. The first malformed file
/// aborts the load with its path attached.
pub fn load_files(files: &[FragmentFile]) -> Result<Vec<Fragment>, ScanError> {
    files
        .iter()
        .map(|file| {
            let source = fs::read_to_string(&file.path)
                .map_err(|e| ScanError::io(&file.path, e))?;
            let frag = fragment::parse(&source).map_err(|e| ScanError::Parse {
                path: file.path.clone(),
                source: e,
            })?;
            tracing::debug!(
                path = %file.path.display(),
                records = frag.entries.len(),
                "parsed fragment"
            );
            Ok(frag)
        })
        .collect()
}

/// Discover, read, and merge the fragments under `root` into an [`Index`].
///
/// With `category = Some(c)` only that family is loaded. With `None`, the
/// `all` family is loaded when present — it subsumes the per-category files
/// but numbers its keys independently, so mixing the two would double up
/// symbols — and everything otherwise.
pub fn load_dir(root: &Path, category: Option<SymbolCategory>) -> Result<Index, ScanError> {
    let search_dir = resolve_search_dir(root)?;
    let mut files = discover(&search_dir)?;

    match category {
        Some(wanted) => files.retain(|f| f.category == wanted),
        None => {
            if files.iter().any(|f| f.category == SymbolCategory::All) {
                files.retain(|f| f.category == SymbolCategory::All);
            }
        }
    }

    let fragments = load_files(&files)?;
    let index = Index::load(fragments);
    tracing::info!(
        files = files.len(),
        entries = index.len(),
        dir = %search_dir.display(),
        "search index loaded"
    );
    Ok(index)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_fragment_names() {
        let file = classify(Path::new("all_3.js")).unwrap();
        assert_eq!(file.category, SymbolCategory::All);
        assert_eq!(file.slot, "3");

        let file = classify(Path::new("search/functions_b.js")).unwrap();
        assert_eq!(file.category, SymbolCategory::Functions);
        assert_eq!(file.slot, "b");
    }

    #[test]
    fn skips_auxiliary_files() {
        for name in ["search.js", "searchdata.js", "nomatches.html", "all_3.js.bak", "mag_sel.svg"] {
            assert_eq!(classify(Path::new(name)), None, "{name} should be skipped");
        }
    }

    #[test]
    fn skips_unknown_stems() {
        assert_eq!(classify(Path::new("widgets_3.js")), None);
    }
}
