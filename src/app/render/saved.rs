//! Saved screen: filter chips, upcoming visits and saved places.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::card_slots;
use crate::app::App;
use crate::app::state::SavedFocus;
use crate::tui::widgets::{ChipStrip, RESTAURANT_CARD_HEIGHT, RestaurantCard};

impl App {
    pub(super) fn render_saved(&self, frame: &mut Frame, area: Rect) {
        let saved = &self.saved;
        let theme = &self.theme;
        let upcoming = saved.upcoming();

        // Title line plus one line per visit; the section is gone when empty.
        let upcoming_height = if upcoming.is_empty() {
            0
        } else {
            u16::try_from(upcoming.len() + 1).unwrap_or(u16::MAX) + theme.spacing.section_gap
        };
        let [chips, upcoming_area, title, list] = Layout::vertical([
            Constraint::Length(1 + theme.spacing.section_gap),
            Constraint::Length(upcoming_height),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

        let filter_chips = saved.filter_chips();
        let focus = (saved.focus == SavedFocus::Filters).then_some(saved.filter_cursor);
        frame.render_widget(ChipStrip::new(&filter_chips, focus, theme), chips);

        if !upcoming.is_empty() {
            let mut lines = vec![Line::from(Span::styled(
                "Upcoming Visits",
                theme.section_style(),
            ))];
            for place in &upcoming {
                lines.push(Line::from(vec![
                    Span::styled(place.restaurant.name.clone(), theme.normal_style()),
                    Span::styled(
                        format!("  {}", place.planned_date.as_deref().unwrap_or_default()),
                        theme.highlight_style(),
                    ),
                ]));
            }
            frame.render_widget(Paragraph::new(lines), upcoming_area);
        }

        let heading = format!(
            "{} ({})",
            saved.current_filter().list_title(),
            saved.places.len()
        );
        frame.render_widget(
            Paragraph::new(Span::styled(heading, theme.section_style())),
            title,
        );

        if saved.places.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("Nothing saved yet", theme.muted_style())),
                list,
            );
            return;
        }

        let list_focused = saved.focus == SavedFocus::List;
        for (index, slot) in card_slots(
            list,
            RESTAURANT_CARD_HEIGHT,
            theme.spacing.card_gap,
            saved.places.len(),
            saved.selected,
        ) {
            let place = &saved.places[index];
            let restaurant = &place.restaurant;
            let card = RestaurantCard::new(restaurant, self.image_for(&restaurant.image_ref), theme)
                .note(format!("Saved {}", place.date_saved))
                .selected(list_focused && index == saved.selected);
            frame.render_widget(card, slot);
        }
    }
}
