//! Profile screen: user card, menu and friends.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::state::{ProfileFocus, ProfileMenuItem};
use crate::core::ImageSlot;
use crate::tui::widgets::FriendRow;

impl App {
    pub(super) fn render_profile(&self, frame: &mut Frame, area: Rect) {
        let state = &self.profile;
        let theme = &self.theme;
        let menu_height = u16::try_from(ProfileMenuItem::all().len()).unwrap_or(u16::MAX);

        let [card, menu, friends] = Layout::vertical([
            Constraint::Length(4 + theme.spacing.section_gap),
            Constraint::Length(menu_height + theme.spacing.section_gap),
            Constraint::Min(1),
        ])
        .areas(area);

        let profile = &state.profile;
        let avatar = match self.image_for(&profile.avatar_ref) {
            ImageSlot::Remote { .. } => "◉",
            ImageSlot::Placeholder => "○",
        };
        let card_lines = vec![
            Line::from(vec![
                Span::styled(format!("{avatar} "), theme.muted_style()),
                Span::styled(profile.display_name.clone(), theme.header_style()),
                Span::styled(
                    format!("  Foodie Level {}", profile.foodie_level),
                    theme.highlight_style(),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} entries  ·  {} places  ·  {} friends",
                    profile.entries, profile.places, profile.friends
                ),
                theme.muted_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style());
        let card = Rect {
            height: card.height.min(4),
            ..card
        };
        frame.render_widget(Paragraph::new(card_lines).block(block), card);

        let menu_focused = state.focus == ProfileFocus::Menu;
        let menu_lines: Vec<Line> = ProfileMenuItem::all()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let focused = menu_focused && i == state.menu_cursor;
                let (prefix, title_style) = if focused {
                    ("› ", theme.highlight_style())
                } else {
                    ("  ", theme.normal_style())
                };
                Line::from(vec![
                    Span::styled(prefix, theme.highlight_style()),
                    Span::styled(format!("{:<18}", item.title()), title_style),
                    Span::styled(item.subtitle(), theme.muted_style()),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(menu_lines), menu);

        let mut friend_lines = vec![Line::from(vec![
            Span::styled("Friends", theme.section_style()),
            Span::styled(
                format!("  {} selected", state.selected_friends()),
                theme.muted_style(),
            ),
        ])];
        for (i, friend) in state.friends.iter().enumerate() {
            let focused = state.focus == ProfileFocus::Friends && i == state.friend_cursor;
            friend_lines.push(
                FriendRow::new(friend, self.image_for(&friend.avatar_ref), focused, theme).line(),
            );
        }
        frame.render_widget(Paragraph::new(friend_lines), friends);
    }
}
