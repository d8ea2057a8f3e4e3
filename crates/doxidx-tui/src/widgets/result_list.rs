//! Result list widget — the scrollable match pane on the left.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `G` | Jump to the first / last match |
//!
//! # Scroll semantics
//!
//! `scroll_offset` = index of the first visible row (0 = top). `cursor` =
//! absolute index into `results`. The cursor is always kept within the
//! visible window; moving it past the edge drags the window along.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use doxidx_core::IndexEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct ResultListState {
    pub results: Vec<IndexEntry>,
    /// Index of the first visible row.
    pub scroll_offset: usize,
    /// Absolute index into `results` of the highlighted row.
    pub cursor: usize,
    /// Cached from the last render so `handle()` can do cursor-aware scrolling.
    last_height: Cell<usize>,
}

impl Default for ResultListState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            scroll_offset: 0,
            cursor: 0,
            last_height: Cell::new(40),
        }
    }
}

impl ResultListState {
    /// Replace the result set after a query change. Cursor and scroll reset
    /// to the top — the old position is meaningless against new matches.
    pub fn set_results(&mut self, results: Vec<IndexEntry>) {
        self.results = results;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// The entry under the cursor, if any.
    pub fn selected(&self) -> Option<&IndexEntry> {
        self.results.get(self.cursor)
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    fn clamp_window(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        let bottom = self.scroll_offset + self.height();
        if self.cursor >= bottom {
            self.scroll_offset = self.cursor + 1 - self.height();
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.results.len();
        if total == 0 {
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(total - 1);
            }
            AppEvent::JumpTop => {
                self.cursor = 0;
            }
            AppEvent::JumpEnd => {
                self.cursor = total - 1;
            }
            _ => return,
        }
        self.clamp_window();
        tracing::debug!(cursor = self.cursor, scroll_offset = self.scroll_offset, "results: nav");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultList<'a> {
    state: &'a ResultListState,
    /// Lowercased query, used to highlight the matched span of each key.
    query: &'a str,
    substring: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    pub fn new(
        state: &'a ResultListState,
        query: &'a str,
        substring: bool,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, query, substring, focused, theme }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Matches").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — draw always runs before the next handle()
        self.state.last_height.set(height);

        let total = self.state.results.len();
        let start = self.state.scroll_offset.min(total);
        let end = (start + height).min(total);

        let query = self.query.to_lowercase();
        let lines: Vec<Line<'static>> = self.state.results[start..end]
            .iter()
            .enumerate()
            .map(|(row, entry)| {
                let mut line = render_entry(entry, &query, self.substring, self.theme);
                if self.focused && start + row == self.state.cursor {
                    line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();

        // Split inner into text (fill) + 1-column scrollbar strip.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        if total > 0 {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

/// Render one result row: the key with its matched span highlighted, then
/// the display name and target count dimmed.
fn render_entry(entry: &IndexEntry, query: &str, substring: bool, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    let key_lower = entry.key.to_lowercase();
    let matched = if query.is_empty() {
        None
    } else if substring {
        key_lower.find(query).map(|at| (at, at + query.len()))
    } else if key_lower.starts_with(query) {
        Some((0, query.len()))
    } else {
        None
    };

    match matched {
        // Byte offsets in the lowercased key line up with the original for
        // the ASCII keys Doxygen generates; fall back to an unhighlighted
        // row otherwise.
        Some((m_start, m_end))
            if entry.key.is_char_boundary(m_start) && entry.key.is_char_boundary(m_end) =>
        {
            spans.push(Span::styled(entry.key[..m_start].to_string(), theme.key));
            spans.push(Span::styled(entry.key[m_start..m_end].to_string(), theme.key_match));
            spans.push(Span::styled(entry.key[m_end..].to_string(), theme.key));
        }
        _ => spans.push(Span::styled(entry.key.clone(), theme.key)),
    }

    spans.push(Span::styled(format!("  {}", entry.name), theme.name));
    if entry.targets.len() > 1 {
        spans.push(Span::styled(
            format!("  ({})", entry.targets.len()),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
