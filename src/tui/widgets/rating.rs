//! Rating icon row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::{RatingSelector, RatingSize};
use crate::tui::Theme;

/// Builds the icon spans for `selector`.
///
/// `cursor` marks the icon under keyboard focus; read-only selectors never
/// show one.
#[must_use]
pub fn rating_spans(
    selector: &RatingSelector,
    size: RatingSize,
    cursor: Option<usize>,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let gap = " ".repeat(usize::from(size.gap()));
    let cursor = cursor.filter(|_| !selector.is_read_only());

    let mut spans = Vec::new();
    for (index, active) in selector.icons().into_iter().enumerate() {
        if index > 0 && !gap.is_empty() {
            spans.push(Span::raw(gap.clone()));
        }
        let glyph = if active {
            theme.rating_on
        } else {
            theme.rating_off
        };
        let mut style = theme.rating_style(active);
        if cursor == Some(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(glyph.to_string(), style));
    }
    spans
}

/// A row of rating icons with an optional numeric label.
pub struct RatingWidget<'a> {
    selector: &'a RatingSelector,
    size: RatingSize,
    cursor: Option<usize>,
    show_value: bool,
    theme: &'a Theme,
}

impl<'a> RatingWidget<'a> {
    #[must_use]
    pub const fn new(selector: &'a RatingSelector, theme: &'a Theme) -> Self {
        Self {
            selector,
            size: RatingSize::Medium,
            cursor: None,
            show_value: false,
            theme,
        }
    }

    #[must_use]
    pub const fn size(mut self, size: RatingSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Appends the rating as a number, e.g. `4.0`.
    #[must_use]
    pub const fn show_value(mut self) -> Self {
        self.show_value = true;
        self
    }

    #[must_use]
    pub fn line(&self) -> Line<'static> {
        let mut spans = rating_spans(self.selector, self.size, self.cursor, self.theme);
        if self.show_value {
            spans.push(Span::styled(
                format!("  {}", self.selector.value_label()),
                self.theme.muted_style(),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for RatingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
