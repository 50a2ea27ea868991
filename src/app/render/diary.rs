//! Diary screen: search, summary and entry cards.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{card_slots, render_text_field};
use crate::app::App;
use crate::tui::widgets::{ENTRY_CARD_HEIGHT, EntryCard};

impl App {
    pub(super) fn render_diary(&self, frame: &mut Frame, area: Rect) {
        let diary = &self.diary;
        let theme = &self.theme;
        let [search, summary_area, list] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

        render_text_field(frame, search, &diary.search, "Search diary", diary.searching, theme);

        let summary = diary.summary();
        let mut spans = vec![
            Span::styled(format!("{} entries", summary.entries), theme.section_style()),
            Span::styled("  ·  avg ", theme.muted_style()),
            Span::styled(
                format!("{} {}", summary.average_label(), theme.rating_on),
                theme.rating_style(true),
            ),
            Span::styled(
                format!("  ·  {} spent", summary.spent_label()),
                theme.muted_style(),
            ),
        ];
        if let Some(tag) = &summary.top_tag {
            spans.push(Span::styled("  ·  top ", theme.muted_style()));
            spans.push(Span::styled(format!("#{tag}"), theme.highlight_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), summary_area);

        let visible = diary.visible();
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No entries found", theme.muted_style())),
                list,
            );
            return;
        }

        for (index, slot) in card_slots(
            list,
            ENTRY_CARD_HEIGHT,
            theme.spacing.card_gap,
            visible.len(),
            diary.selected,
        ) {
            let entry = visible[index];
            let card = EntryCard::new(entry, self.image_for(&entry.image_ref), theme)
                .selected(!diary.searching && index == diary.selected);
            frame.render_widget(card, slot);
        }
    }
}
