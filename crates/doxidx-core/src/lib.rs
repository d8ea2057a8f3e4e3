//! doxidx-core — Doxygen search-index loading and querying.
//!
//! This crate owns the whole pipeline from fragment text to query results,
//! plus the shared types used across the workspace.
//!
//! # Architecture
//!
//! ```text
//! Fragment ──► Index ──► Query
//!    ▲           │
//!    └── Writer ─┘
//! ```
//!
//! A [`fragment::Fragment`] is one parsed `search/*.js` file. Fragments are
//! merged into an immutable [`Index`]; [`Index::query`] and [`Index::find`]
//! answer prefix and substring lookups; [`writer`] serializes an index back
//! to the fragment format. Everything is synchronous and single-threaded —
//! the index is built once and only ever read afterwards.

pub mod config;
pub mod entities;
pub mod error;
pub mod fragment;
pub mod index;
pub mod query;
pub mod types;
pub mod writer;

pub use error::{ParseError, ParseResult};
pub use fragment::Fragment;
pub use index::Index;
pub use types::{IndexEntry, SymbolCategory, Target};
