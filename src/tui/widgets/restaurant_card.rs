//! Restaurant card used by the discover and saved lists.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::{ImageSlot, Restaurant};
use crate::tui::Theme;

/// Rows one card occupies, borders included.
pub const RESTAURANT_CARD_HEIGHT: u16 = 5;

/// Line drawn where a card's image would be.
#[must_use]
pub fn image_line(slot: &ImageSlot, theme: &Theme) -> Span<'static> {
    match slot {
        ImageSlot::Remote { host } => Span::styled(format!("▣ {host}"), theme.muted_style()),
        ImageSlot::Placeholder => Span::styled(
            "▢ no image",
            theme.muted_style().add_modifier(Modifier::DIM),
        ),
    }
}

pub struct RestaurantCard<'a> {
    restaurant: &'a Restaurant,
    image: ImageSlot,
    /// Trailing note such as when the place was saved.
    note: Option<String>,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> RestaurantCard<'a> {
    #[must_use]
    pub const fn new(restaurant: &'a Restaurant, image: ImageSlot, theme: &'a Theme) -> Self {
        Self {
            restaurant,
            image,
            note: None,
            selected: false,
            theme,
        }
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let r = self.restaurant;
        let theme = self.theme;

        let mut title = vec![Span::styled(r.name.clone(), theme.section_style())];
        if r.is_new {
            title.push(Span::raw("  "));
            title.push(Span::styled("New", theme.new_badge_style()));
        }
        if r.is_recommended {
            title.push(Span::raw("  "));
            title.push(Span::styled("AI Pick", theme.pick_badge_style()));
        }

        let details = Line::from(vec![
            Span::styled(format!("{} ", theme.rating_on), theme.rating_style(true)),
            Span::styled(r.rating_label(), theme.normal_style()),
            Span::styled(
                format!(
                    "  ·  {}  ·  {}  ·  {}",
                    r.cuisine,
                    r.price_level.glyphs(),
                    r.distance
                ),
                theme.muted_style(),
            ),
        ]);

        let mut footer = vec![image_line(&self.image, theme)];
        if let Some(note) = &self.note {
            footer.push(Span::styled(format!("  ·  {note}"), theme.muted_style()));
        }

        vec![Line::from(title), details, Line::from(footer)]
    }
}

impl Widget for RestaurantCard<'_> {
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
