//! Target pane widget — the anchors of the selected entry.
//!
//! Shows the display name of the selection followed by one block per
//! target: the entity-decoded scope label and, when `show_urls` is on, the
//! relative URL into the generated HTML tree.

use crate::theme::Theme;
use doxidx_core::{entities, IndexEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct TargetPane<'a> {
    selected: Option<&'a IndexEntry>,
    show_urls: bool,
    theme: &'a Theme,
}

impl<'a> TargetPane<'a> {
    pub fn new(selected: Option<&'a IndexEntry>, show_urls: bool, theme: &'a Theme) -> Self {
        Self { selected, show_urls, theme }
    }
}

impl Widget for TargetPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Targets")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(entry) = self.selected else {
            Paragraph::new(Line::from(Span::styled(
                "no match selected",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        };

        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(
                entry.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for target in &entry.targets {
            let label = if target.label.is_empty() {
                "(page)".to_string()
            } else {
                entities::decode(&target.label)
            };
            lines.push(Line::from(Span::styled(label, self.theme.label)));
            if self.show_urls {
                lines.push(Line::from(Span::styled(
                    format!("  {}", target.url),
                    self.theme.url,
                )));
            }
        }

        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}
