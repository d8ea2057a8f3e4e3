//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Results are re-filtered
//! on every keystroke; the index itself is only replaced wholesale, on an
//! explicit reload or a watch notification.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        result_list::{ResultList, ResultListState},
        target_pane::TargetPane,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use doxidx_core::{config::Config, Index, IndexEntry, SymbolCategory};
use doxidx_scan::IndexWatcher;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Results,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub query: QueryBarState,
    pub results: ResultListState,
    pub focus: Focus,
    pub index: Index,
    /// Total matches for the current query, before the display limit.
    pub matches: usize,
    /// Docs root the index was loaded from, for reloads.
    pub root: PathBuf,
    pub category: Option<SymbolCategory>,
    pub watcher: Option<IndexWatcher>,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    /// Transient message shown in the status line until the next reload.
    pub status: Option<String>,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(
        index: Index,
        root: PathBuf,
        category: Option<SymbolCategory>,
        watcher: Option<IndexWatcher>,
        config: Config,
        theme: Theme,
    ) -> Self {
        let query = QueryBarState {
            substring: config.query.substring,
            ..QueryBarState::default()
        };

        let mut state = AppState {
            query,
            results: ResultListState::default(),
            focus: Focus::Query,
            index,
            matches: 0,
            root,
            category,
            watcher,
            theme,
            config,
            show_help: false,
            status: None,
            quit: false,
        };
        refresh(&mut state);

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if self.state.watcher.as_ref().is_some_and(|w| w.changed()) {
                tracing::debug!("fragments changed on disk");
                reload(&mut self.state);
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when the query bar is focused
                        let app_event = if self.state.focus == Focus::Query {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the query bar)
            AppEvent::Char('?') if s.focus != Focus::Query => {
                s.show_help = true;
            }

            AppEvent::Quit => {
                s.quit = true;
            }

            // Return focus from the query bar
            AppEvent::Escape => {
                if s.focus == Focus::Query {
                    s.focus = Focus::Results;
                }
            }

            AppEvent::FocusNext => {
                s.focus = match s.focus {
                    Focus::Query => Focus::Results,
                    Focus::Results => Focus::Query,
                };
            }

            AppEvent::QueryFocus => {
                s.focus = Focus::Query;
            }

            // Mode toggle works regardless of focus
            AppEvent::ToggleMode => {
                s.query.handle(&event);
                refresh(s);
            }

            AppEvent::Reload => {
                reload(s);
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => match s.focus {
                Focus::Query => match other {
                    AppEvent::Enter => {
                        s.focus = Focus::Results;
                    }
                    ev => {
                        s.query.handle(&ev);
                        refresh(s);
                    }
                },
                Focus::Results => s.results.handle(&other),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Query refresh + reload
// ---------------------------------------------------------------------------

/// Re-run the current query against the index and swap the result set.
fn refresh(s: &mut AppState) {
    let limit = s.config.query.limit;
    let needle = s.query.query.as_str();
    let (total, results) = if s.query.substring {
        collect(s.index.find(needle), limit)
    } else {
        collect(s.index.query(needle), limit)
    };
    s.matches = total;
    s.results.set_results(results);
}

/// Walk the whole match set for an exact count, cloning only what fits the
/// display limit.
fn collect<'a>(
    matches: impl Iterator<Item = &'a IndexEntry>,
    limit: usize,
) -> (usize, Vec<IndexEntry>) {
    let mut results = Vec::new();
    let mut total = 0;
    for entry in matches {
        if results.len() < limit {
            results.push(entry.clone());
        }
        total += 1;
    }
    (total, results)
}

/// Rebuild the index from disk, keeping the old one on failure.
fn reload(s: &mut AppState) {
    match doxidx_scan::load_dir(&s.root, s.category) {
        Ok(index) => {
            s.index = index;
            refresh(s);
            s.status = Some(format!("index reloaded — {} symbols", s.index.len()));
        }
        Err(err) => {
            tracing::warn!(error = %err, "reload failed");
            s.status = Some(format!("reload failed: {err}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line query bar | body | 1-line status
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Horizontal body split: matches (fill) | targets (configured pct)
    let pct = state.config.ui.targets_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Percentage(pct)])
        .split(vert[1]);

    frame.render_widget(
        QueryBar::new(&state.query, state.matches, state.focus == Focus::Query, &state.theme),
        vert[0],
    );
    frame.render_widget(
        ResultList::new(
            &state.results,
            &state.query.query,
            state.query.substring,
            state.focus == Focus::Results,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        TargetPane::new(state.results.selected(), state.config.ui.show_urls, &state.theme),
        horiz[1],
    );

    render_status(state, vert[2], frame);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Position the terminal cursor when the query bar is focused
    if state.focus == Focus::Query && !state.show_help {
        let qb = QueryBar::new(&state.query, state.matches, true, &state.theme);
        let (cx, cy) = qb.cursor_position(vert[0]);
        frame.set_cursor_position((cx, cy));
    }
}

fn render_status(state: &AppState, area: ratatui::layout::Rect, frame: &mut Frame) {
    let text = match &state.status {
        Some(msg) => format!(" {msg}"),
        None => {
            let category = state
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "all".to_string());
            let watch = if state.watcher.is_some() { " · watching" } else { "" };
            format!(
                " {} symbols · {} · {}{watch} · ? for help",
                state.index.len(),
                category,
                state.root.display(),
            )
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Style::default()))).style(state.theme.status),
        area,
    );
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
