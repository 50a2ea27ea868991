//! Discover screen: search, cuisine and mood chips, restaurant list.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{card_slots, render_text_field};
use crate::app::App;
use crate::app::state::DiscoverFocus;
use crate::core::{MoodType, Restaurant};
use crate::tui::widgets::{ChipStrip, RESTAURANT_CARD_HEIGHT, RestaurantCard};

fn names(places: &[&Restaurant]) -> String {
    places
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(" · ")
}

impl App {
    pub(super) fn render_discover(&self, frame: &mut Frame, area: Rect) {
        let discover = &self.discover;
        let theme = &self.theme;
        let [search, cuisine, mood, sections, list] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(area);

        render_text_field(
            frame,
            search,
            &discover.search,
            "Search",
            discover.focus == DiscoverFocus::Search,
            theme,
        );

        let cuisine_chips = discover.cuisine_chips();
        let cuisine_focus =
            (discover.focus == DiscoverFocus::Cuisine).then_some(discover.cuisine_cursor);
        frame.render_widget(ChipStrip::new(&cuisine_chips, cuisine_focus, theme), cuisine);

        let mood_chips = discover.mood_chips();
        let mood_focus = (discover.focus == DiscoverFocus::Mood).then_some(discover.mood_cursor);
        let mood_styles = MoodType::all()
            .iter()
            .map(|&m| theme.mood_chip_style(m, discover.filters.mood == Some(m)))
            .collect();
        frame.render_widget(
            ChipStrip::new(&mood_chips, mood_focus, theme).with_styles(mood_styles),
            mood,
        );

        let visible = discover.visible();
        let for_you = discover.for_you();
        let new_places = discover.new_places();
        let mut section_lines = vec![
            Line::from(vec![
                Span::styled("For You  ", theme.section_style()),
                Span::styled(names(&for_you), theme.muted_style()),
            ]),
            Line::from(vec![
                Span::styled("New Places  ", theme.section_style()),
                Span::styled(names(&new_places), theme.muted_style()),
            ]),
        ];
        section_lines.push(Line::from(Span::styled(
            format!("All Restaurants ({})", visible.len()),
            theme.section_style(),
        )));
        frame.render_widget(Paragraph::new(section_lines), sections);

        if visible.is_empty() {
            let message = if discover.filters.is_active() {
                "No restaurants match your filters"
            } else {
                "No restaurants yet"
            };
            frame.render_widget(
                Paragraph::new(Span::styled(message, theme.muted_style())),
                list,
            );
            return;
        }

        let list_focused = discover.focus == DiscoverFocus::List;
        for (index, slot) in card_slots(
            list,
            RESTAURANT_CARD_HEIGHT,
            theme.spacing.card_gap,
            visible.len(),
            discover.selected,
        ) {
            let restaurant = visible[index];
            let mut card = RestaurantCard::new(restaurant, self.image_for(&restaurant.image_ref), theme)
                .selected(list_focused && index == discover.selected);
            if self.saved.contains(&restaurant.id) {
                card = card.note("Saved");
            }
            frame.render_widget(card, slot);
        }
    }
}
