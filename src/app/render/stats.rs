//! Stats screen: time-frame chips, summary, habit cards, preferences and social.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::widgets::{ChipStrip, STAT_CARD_HEIGHT, StatCard};

impl App {
    pub(super) fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let snapshot = self.stats.snapshot();
        let gap = theme.spacing.section_gap;

        let [chips, summary, habits, preferences, social] = Layout::vertical([
            Constraint::Length(1 + gap),
            Constraint::Length(1 + gap),
            Constraint::Length(STAT_CARD_HEIGHT * 2 + gap),
            Constraint::Length(5 + gap),
            Constraint::Min(1),
        ])
        .areas(area);

        let frame_chips = self.stats.frame_chips();
        frame.render_widget(
            ChipStrip::new(&frame_chips, Some(self.stats.cursor), theme),
            chips,
        );

        let mut spans = Vec::new();
        for (i, (label, value)) in snapshot.summary().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", theme.muted_style()));
            }
            spans.push(Span::styled(value, theme.header_style()));
            spans.push(Span::styled(format!(" {label}"), theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), summary);

        // Habit cards in a two-by-two grid.
        let cards = snapshot.habits();
        let [top, bottom, _] = Layout::vertical([
            Constraint::Length(STAT_CARD_HEIGHT),
            Constraint::Length(STAT_CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(habits);
        for (row, stats) in [top, bottom].into_iter().zip(cards.chunks(2)) {
            let columns =
                Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(row);
            for (column, stat) in columns.iter().zip(stats) {
                frame.render_widget(StatCard::new(stat, theme), *column);
            }
        }

        let mut lines = vec![Line::from(Span::styled(
            "Food Preferences",
            theme.section_style(),
        ))];
        for (label, value) in snapshot.preferences() {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<15}"), theme.muted_style()),
                Span::styled(value, theme.normal_style()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), preferences);

        let mut spans = vec![Span::styled("Social  ", theme.section_style())];
        for (i, (label, value)) in snapshot.social().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", theme.muted_style()));
            }
            spans.push(Span::styled(value.to_string(), theme.header_style()));
            spans.push(Span::styled(format!(" {label}"), theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), social);
    }
}
