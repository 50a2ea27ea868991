//! Rendering methods for the App.
//!
//! - **Chrome**: header, tab bar, status line and key hints
//! - **Screens**: one module per tab
//! - **Log food**: modal overlay drawn over the current tab

mod chrome;
mod diary;
mod discover;
mod log_food;
mod profile;
mod saved;
mod stats;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use super::layout::scroll_offset;
use super::{App, AppMode, Tab};
use crate::tui::Theme;

impl App {
    /// Renders the application UI.
    ///
    /// The browse screen is always drawn; in `LogFood` mode the form is
    /// overlaid on top of it.
    pub fn render(&self, frame: &mut Frame) {
        let layout = self.layout;

        self.render_header(frame, layout.header);
        self.render_tabs(frame, layout.tabs);
        match self.tab {
            Tab::Discover => self.render_discover(frame, layout.body),
            Tab::Diary => self.render_diary(frame, layout.body),
            Tab::Saved => self.render_saved(frame, layout.body),
            Tab::Stats => self.render_stats(frame, layout.body),
            Tab::Profile => self.render_profile(frame, layout.body),
        }
        self.render_status(frame, layout.status);
        self.render_footer(frame, layout.footer);

        if self.mode == AppMode::LogFood {
            self.render_log_food(frame);
        }
    }
}

/// Draws a text field inside a titled border.
///
/// The cursor is only shown while the field is focused.
pub(super) fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    textarea: &TextArea<'static>,
    title: &str,
    focused: bool,
    theme: &Theme,
) {
    let mut textarea = textarea.clone();
    let border_style = if focused {
        theme.focused_border_style()
    } else {
        theme.border_style()
    };
    textarea.set_block(
        Block::default()
            .title(format!(" {title} "))
            .title_style(theme.muted_style())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    textarea.set_style(theme.normal_style());
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_style(theme.placeholder_style());
    if !focused {
        textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(&textarea, area);
}

/// Slots for a scrolling list of equally tall cards.
///
/// Returns `(item index, area)` pairs for the cards that fit in `area`,
/// scrolled so that `selected` is visible.
pub(super) fn card_slots(
    area: Rect,
    card_height: u16,
    gap: u16,
    count: usize,
    selected: usize,
) -> Vec<(usize, Rect)> {
    let stride = card_height + gap;
    let first = scroll_offset(selected, stride, area.height + gap);
    let mut slots = Vec::new();
    let mut y = area.y;
    for index in first..count {
        if y + card_height > area.bottom() {
            break;
        }
        slots.push((index, Rect::new(area.x, y, area.width, card_height)));
        y += stride;
    }
    slots
}
