//! Widgets for the doxidx TUI. Each widget is a stateless renderer over a
//! `*State` struct owned by the app shell.

pub mod help;
pub mod query_bar;
pub mod result_list;
pub mod target_pane;
