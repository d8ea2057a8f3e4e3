//! Help popup — a centered key-reference overlay, toggled with `?`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("/", "focus the search input"),
    ("Esc", "leave the search input / close this popup"),
    ("Tab", "cycle focus between panes"),
    ("m", "toggle prefix / substring matching"),
    ("j / k, ↑ / ↓", "move the selection"),
    ("PgUp / PgDn", "page through matches"),
    ("g / G", "jump to first / last match"),
    ("r", "reload the index from disk"),
    ("?", "toggle this help"),
    ("q, Ctrl+c", "quit"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 52.min(area.width);
        let height = (BINDINGS.len() as u16 + 2).min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(popup, buf);

        let block = Block::bordered()
            .title("Help")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{key:>14}  "), self.theme.help_key),
                    Span::styled(*action, self.theme.help_text),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
