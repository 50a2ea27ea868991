//! Diary entry card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::rating::rating_spans;
use super::restaurant_card::image_line;
use crate::core::model::MAX_ENTRY_RATING;
use crate::core::{DiningEntry, ImageSlot, RatingSelector, RatingSize};
use crate::tui::Theme;

/// Rows one card occupies, borders included.
pub const ENTRY_CARD_HEIGHT: u16 = 6;

pub struct EntryCard<'a> {
    entry: &'a DiningEntry,
    image: ImageSlot,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> EntryCard<'a> {
    #[must_use]
    pub const fn new(entry: &'a DiningEntry, image: ImageSlot, theme: &'a Theme) -> Self {
        Self {
            entry,
            image,
            selected: false,
            theme,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let e = self.entry;
        let theme = self.theme;

        let mut title = vec![
            Span::styled(e.dish_name.clone(), theme.section_style()),
            Span::raw("  "),
        ];
        let rating = RatingSelector::read_only(e.rating, MAX_ENTRY_RATING);
        title.extend(rating_spans(&rating, RatingSize::Small, None, theme));

        let place = Line::from(vec![
            Span::styled(e.restaurant_name.clone(), theme.normal_style()),
            Span::styled(
                format!("  ·  {}  ·  {}", e.location, e.date),
                theme.muted_style(),
            ),
        ]);

        let mut meta = Vec::new();
        if let Some(price) = &e.price {
            meta.push(Span::styled(price.clone(), theme.success_style()));
            meta.push(Span::raw("  "));
        }
        for tag in &e.tags {
            meta.push(Span::styled(format!("#{tag} "), theme.highlight_style()));
        }
        meta.push(image_line(&self.image, theme));

        let notes = Line::from(Span::styled(
            e.notes.clone().unwrap_or_default(),
            theme.muted_style(),
        ));

        vec![Line::from(title), place, Line::from(meta), notes]
    }
}

impl Widget for EntryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
