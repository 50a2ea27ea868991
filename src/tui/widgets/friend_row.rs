//! One friend on the profile screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::{Friend, ImageSlot};
use crate::tui::Theme;

pub struct FriendRow<'a> {
    friend: &'a Friend,
    avatar: ImageSlot,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> FriendRow<'a> {
    #[must_use]
    pub const fn new(friend: &'a Friend, avatar: ImageSlot, focused: bool, theme: &'a Theme) -> Self {
        Self {
            friend,
            avatar,
            focused,
            theme,
        }
    }

    #[must_use]
    pub fn line(&self) -> Line<'static> {
        let f = self.friend;
        let theme = self.theme;

        let check = if f.selected { "[x] " } else { "[ ] " };
        let avatar = match self.avatar {
            ImageSlot::Remote { .. } => "◉ ",
            ImageSlot::Placeholder => "○ ",
        };
        let name_style = if self.focused {
            theme.highlight_style().add_modifier(theme.focus_modifier())
        } else {
            theme.normal_style()
        };

        let mut details = Vec::new();
        if let Some(level) = f.foodie_level {
            details.push(format!("Lv {level}"));
        }
        if let Some(cuisine) = &f.favorite_cuisine {
            details.push(format!("Loves {cuisine}"));
        }
        if let Some(visits) = f.restaurant_visits {
            details.push(format!("{visits} visits"));
        }

        let mut spans = vec![
            Span::styled(check, theme.highlight_style()),
            Span::styled(avatar, theme.muted_style()),
            Span::styled(f.name.clone(), name_style),
        ];
        if !details.is_empty() {
            spans.push(Span::styled(
                format!("  {}", details.join(" · ")),
                theme.muted_style(),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for FriendRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
