//! Log-food form rendering.
//!
//! The form is a centered modal overlay drawn over the browse screen.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::render_text_field;
use crate::app::App;
use crate::app::layout::centered_rect;
use crate::app::state::FormField;
use crate::core::RatingSize;
use crate::tui::widgets::{ChipStrip, RatingWidget};

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 24;

impl App {
    /// Renders the log-food form as a centered overlay.
    pub(super) fn render_log_food(&self, frame: &mut Frame) {
        let Some(state) = &self.log_food else {
            return;
        };
        let theme = &self.theme;
        let popup = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, frame.area());

        // Clear background
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Log Food ")
            .title_style(theme.header_style())
            .borders(Borders::ALL)
            .border_style(theme.focused_border_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [food, restaurant, rating, price, notes, tag_draft, tags, photo, save, error] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        for (field, area) in [
            (FormField::FoodName, food),
            (FormField::Restaurant, restaurant),
            (FormField::Price, price),
            (FormField::Notes, notes),
            (FormField::Tags, tag_draft),
        ] {
            if let Some(textarea) = state.field(field) {
                render_text_field(
                    frame,
                    area,
                    textarea,
                    field.label(),
                    state.focus == field,
                    theme,
                );
            }
        }

        // Rating: label line, then the icons.
        let rating_focused = state.focus == FormField::Rating;
        let label_style = if rating_focused {
            theme.highlight_style()
        } else {
            theme.muted_style()
        };
        let rating_line = RatingWidget::new(state.form.rating(), theme)
            .size(RatingSize::Large)
            .cursor(rating_focused.then_some(state.rating_cursor))
            .show_value()
            .line();
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(FormField::Rating.label(), label_style)),
                rating_line,
            ]),
            rating,
        );

        let tag_chips = state.tag_chips();
        if tag_chips.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No tags yet", theme.placeholder_style())),
                tags,
            );
        } else {
            frame.render_widget(ChipStrip::new(&tag_chips, state.tag_cursor, theme), tags);
        }

        let photo_text = if state.form.image_ref().is_some() {
            "▣ Photo added"
        } else {
            "[ Take photo ]"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                photo_text,
                button_style(state.focus == FormField::Photo, theme),
            )),
            photo,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("[ {} ]", FormField::Save.label()),
                button_style(state.focus == FormField::Save, theme),
            )),
            save,
        );

        if let Some(message) = &state.error {
            frame.render_widget(
                Paragraph::new(Span::styled(message.clone(), theme.error_style())),
                error,
            );
        }
    }
}

fn button_style(focused: bool, theme: &crate::tui::Theme) -> ratatui::style::Style {
    if focused {
        theme.highlight_style().add_modifier(theme.focus_modifier())
    } else {
        theme.normal_style()
    }
}
