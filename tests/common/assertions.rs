//! Domain-specific assertion macros for doxidx harnesses.
//!
//! These add context-rich failure messages that make it clear *which* index
//! guarantee was violated.

/// Assert that an iterator of `&IndexEntry` yields exactly these keys, in
/// this order.
///
/// ```rust
/// assert_keys!(index.query("cal"), ["calib_0", "calibrate_2"]);
/// ```
#[macro_export]
macro_rules! assert_keys {
    ($matches:expr, $expected:expr) => {{
        let actual: Vec<String> = $matches.map(|e| e.key.clone()).collect();
        let expected: Vec<String> = $expected.iter().map(|k| k.to_string()).collect();
        pretty_assertions::assert_eq!(
            actual, expected,
            "match keys differ (left: actual, right: expected)"
        );
    }};
}

/// Assert that every yielded key starts with the given prefix,
/// case-insensitively — the core prefix-query guarantee.
#[macro_export]
macro_rules! assert_all_start_with {
    ($matches:expr, $prefix:expr) => {{
        let prefix = $prefix.to_lowercase();
        for entry in $matches {
            assert!(
                entry.key.to_lowercase().starts_with(&prefix),
                "query({:?}) returned non-matching key {:?}",
                $prefix,
                entry.key
            );
        }
    }};
}

/// Assert that an index holds exactly `n` entries and that iteration is
/// sorted by key.
#[macro_export]
macro_rules! assert_index_sorted {
    ($index:expr, $n:expr) => {{
        let keys: Vec<&str> = $index.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys.len(), $n, "index holds {} entries, expected {}", keys.len(), $n);
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted, "index iteration is not sorted by key");
    }};
}
