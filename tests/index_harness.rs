#![allow(unused)]
//! Index construction and merge harness.
//!
//! # What this covers
//!
//! - The last-loaded-wins merge policy, including the regenerated-fragment
//!   artifact observed in real corpora (two versions of the same file with
//!   diverging content).
//! - `query("")` returning every key exactly once after merging — the
//!   completeness property of the index.
//! - Case-insensitive exact lookup.
//!
//! # What this does NOT cover
//!
//! - Prefix/substring query semantics (see query_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test index_harness
//! ```

mod common;
use common::*;

use doxidx_core::{fragment, Index};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn parse(src: &str) -> doxidx_core::Fragment {
    fragment::parse(src).unwrap()
}

// ---------------------------------------------------------------------------
// Merge policy
// ---------------------------------------------------------------------------

#[test]
fn regenerated_fragment_supersedes_per_key() {
    let index = Index::load([parse(FRAGMENT_ALL_C), parse(FRAGMENT_ALL_C_REGEN)]);

    // The regenerated anchor wins for the shared key …
    assert_eq!(index.get("calibrate_2").unwrap().targets[0].url, "../classCalibration.html#ffff");
    // … while keys only present in the first load survive.
    assert!(index.get("close_21").is_some());
    assert!(index.get("capture_13").is_some());
}

#[test]
fn load_order_decides_the_winner() {
    let forward = Index::load([parse(FRAGMENT_ALL_C), parse(FRAGMENT_ALL_C_REGEN)]);
    let backward = Index::load([parse(FRAGMENT_ALL_C_REGEN), parse(FRAGMENT_ALL_C)]);

    assert_eq!(forward.get("calibrate_2").unwrap().targets[0].url, "../classCalibration.html#ffff");
    assert_eq!(backward.get("calibrate_2").unwrap().targets[0].url, "../classCalibration.html#a0575");
}

#[test]
fn disjoint_fragments_merge_without_loss() {
    let index = Index::load([parse(FRAGMENT_ALL_C), parse(FRAGMENT_ALL_U)]);
    assert_index_sorted!(index, 10);
}

#[test]
fn duplicate_keys_within_one_fragment_collapse_to_the_last() {
    let index = Index::from_entries([
        entry("capture_0", "../old.html"),
        entry("capture_0", "../new.html"),
    ]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("capture_0").unwrap().targets[0].url, "../new.html");
}

// ---------------------------------------------------------------------------
// Completeness
// ---------------------------------------------------------------------------

#[test]
fn empty_query_returns_every_key_exactly_once() {
    let index = Index::load([
        parse(FRAGMENT_ALL_C),
        parse(FRAGMENT_ALL_U),
        parse(FRAGMENT_ALL_C_REGEN),
    ]);

    let keys: Vec<String> = index.query("").map(|e| e.key.clone()).collect();
    let unique: BTreeSet<&String> = keys.iter().collect();
    assert_eq!(keys.len(), unique.len(), "a key was yielded more than once");
    assert_eq!(keys.len(), index.len());
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
fn get_ignores_case() {
    let index = Index::load([parse(FRAGMENT_ALL_C)]);
    assert_eq!(index.get("CAMERA_8").unwrap().name, "Camera");
    assert!(index.get("camera_9").is_none());
}

#[test]
fn an_empty_index_answers_queries() {
    let index = Index::load([]);
    assert!(index.is_empty());
    assert!(index.get("anything").is_none());
    assert_eq!(index.query("").count(), 0);
    assert_eq!(index.find("x").count(), 0);
}
