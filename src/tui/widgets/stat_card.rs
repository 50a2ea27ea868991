//! Titled statistic card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::StatLine;
use crate::tui::Theme;

/// Rows one card occupies, borders included.
pub const STAT_CARD_HEIGHT: u16 = 4;

pub struct StatCard<'a> {
    stat: &'a StatLine,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    #[must_use]
    pub const fn new(stat: &'a StatLine, theme: &'a Theme) -> Self {
        Self { stat, theme }
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.stat.title)
            .title_style(self.theme.muted_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let lines = vec![
            Line::from(Span::styled(
                self.stat.value.clone(),
                self.theme.header_style(),
            )),
            Line::from(Span::styled(
                self.stat.subtitle.clone(),
                self.theme.muted_style(),
            )),
        ];
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
