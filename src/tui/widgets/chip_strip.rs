//! Horizontal chip strip widget.
//!
//! Chips are laid out on a single line. When they do not fit, the strip
//! scrolls so the focused chip stays visible and shows `‹`/`›` markers on the
//! clipped sides.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::core::{Chip, ChipSet};
use crate::tui::Theme;

/// Cells reserved for each overflow marker.
const MARKER_WIDTH: u16 = 2;

/// Returns the text drawn for `chip`, padding included.
#[must_use]
pub fn chip_text(chip: &Chip) -> String {
    let mut text = String::from(" ");
    if let Some(icon) = chip.icon {
        text.push(icon);
        text.push(' ');
    }
    text.push_str(&chip.label);
    if chip.shows_close() {
        text.push_str(" ×");
    }
    text.push(' ');
    text
}

/// Display width of each chip in cells.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // chip labels are short
pub fn chip_widths(chips: &[Chip]) -> Vec<u16> {
    chips
        .iter()
        .map(|c| chip_text(c).width() as u16)
        .collect()
}

fn span_width(widths: &[u16], gap: u16) -> u16 {
    let gaps = gap.saturating_mul(u16::try_from(widths.len().saturating_sub(1)).unwrap_or(u16::MAX));
    widths
        .iter()
        .fold(gaps, |acc, w| acc.saturating_add(*w))
}

/// Computes which chips are drawn in `available` cells.
///
/// The window starts as far left as possible while still containing
/// `focus`. At least one chip is always included, even if it is clipped.
#[must_use]
pub fn visible_window(
    widths: &[u16],
    gap: u16,
    focus: Option<usize>,
    available: u16,
) -> Range<usize> {
    if widths.is_empty() {
        return 0..0;
    }
    let focus = focus.unwrap_or(0).min(widths.len() - 1);

    let mut start = 0;
    while start < focus && span_width(&widths[start..=focus], gap) > available {
        start += 1;
    }

    let mut end = focus + 1;
    while end < widths.len() && span_width(&widths[start..=end], gap) <= available {
        end += 1;
    }
    start..end
}

/// Renders a [`ChipSet`] on one line.
pub struct ChipStrip<'a> {
    chips: &'a ChipSet,
    /// Focused chip, when the strip holds keyboard focus.
    focus: Option<usize>,
    /// Per-chip style overrides (mood chips carry their own tones).
    styles: Option<Vec<Style>>,
    theme: &'a Theme,
}

impl<'a> ChipStrip<'a> {
    #[must_use]
    pub const fn new(chips: &'a ChipSet, focus: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            chips,
            focus,
            styles: None,
            theme,
        }
    }

    /// Uses `styles[i]` for chip `i` instead of the theme's chip style.
    #[must_use]
    pub fn with_styles(mut self, styles: Vec<Style>) -> Self {
        self.styles = Some(styles);
        self
    }

    fn style_for(&self, index: usize, chip: &Chip) -> Style {
        let base = self
            .styles
            .as_ref()
            .and_then(|s| s.get(index).copied())
            .unwrap_or_else(|| self.theme.chip_style(chip.selected, chip.disabled));
        if self.focus == Some(index) {
            base.add_modifier(self.theme.focus_modifier())
        } else {
            base
        }
    }

    /// Builds the line drawn into a strip `width` cells wide.
    #[must_use]
    pub fn line(&self, width: u16) -> Line<'static> {
        let chips = self.chips.chips();
        let widths = chip_widths(chips);
        let gap = self.theme.spacing.chip_gap;

        let overflows = span_width(&widths, gap) > width;
        let available = if overflows {
            width.saturating_sub(MARKER_WIDTH * 2)
        } else {
            width
        };
        let window = visible_window(&widths, gap, self.focus, available);

        let mut spans = Vec::new();
        if overflows {
            let marker = if window.start > 0 { "‹ " } else { "  " };
            spans.push(Span::styled(marker, self.theme.muted_style()));
        }
        for index in window.clone() {
            if index > window.start {
                spans.push(Span::raw(" ".repeat(usize::from(gap))));
            }
            let chip = &chips[index];
            spans.push(Span::styled(chip_text(chip), self.style_for(index, chip)));
        }
        if overflows && window.end < chips.len() {
            spans.push(Span::styled(" ›", self.theme.muted_style()));
        }
        Line::from(spans)
    }
}

impl Widget for ChipStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line(area.width)).render(area, buf);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    mod window {
        use super::*;

        #[test]
        fn everything_fits() {
            assert_eq!(visible_window(&[5, 5, 5], 1, Some(2), 40), 0..3);
        }

        #[test]
        fn scrolls_to_keep_focus_visible() {
            // 6 chips of width 5 with gap 1: 3 chips take 17 cells.
            let widths = [5; 6];
            assert_eq!(visible_window(&widths, 1, Some(0), 17), 0..3);
            assert_eq!(visible_window(&widths, 1, Some(4), 17), 2..5);
            assert_eq!(visible_window(&widths, 1, Some(5), 17), 3..6);
        }

        #[test]
        fn oversized_chip_is_still_shown() {
            assert_eq!(visible_window(&[30, 5], 1, Some(0), 10), 0..1);
        }

        #[test]
        fn empty_strip_has_empty_window() {
            assert_eq!(visible_window(&[], 1, None, 10), 0..0);
        }

        #[test]
        fn focus_past_end_is_clamped() {
            assert_eq!(visible_window(&[5, 5], 1, Some(9), 5), 1..2);
        }
    }

    mod text {
        use super::*;

        #[test]
        fn plain_chip_is_padded() {
            assert_eq!(chip_text(&Chip::new("Thai", false)), " Thai ");
        }

        #[test]
        fn icon_and_close_affordance() {
            let chip = Chip::new("Spicy", true).with_icon('#').closable();
            assert_eq!(chip_text(&chip), " # Spicy × ");

            let resting = Chip::new("Spicy", false).closable();
            assert_eq!(chip_text(&resting), " Spicy ");
        }
    }

    mod rendering {
        use super::*;
        use ratatui::style::Modifier;

        fn set(labels: &[&str]) -> ChipSet {
            ChipSet::new(
                labels
                    .iter()
                    .enumerate()
                    .map(|(i, l)| Chip::new(*l, i == 0))
                    .collect(),
            )
        }

        #[test]
        fn renders_all_chips_when_wide_enough() {
            let theme = Theme::default();
            let chips = set(&["All", "Thai"]);
            let line = ChipStrip::new(&chips, None, &theme).line(40);
            assert_eq!(line_text(&line), " All   Thai ");
        }

        #[test]
        fn focused_chip_is_underlined() {
            let theme = Theme::default();
            let chips = set(&["All", "Thai"]);
            let line = ChipStrip::new(&chips, Some(1), &theme).line(40);
            let thai = line.spans.iter().find(|s| s.content == " Thai ").unwrap();
            assert!(thai.style.add_modifier.contains(Modifier::UNDERLINED));
        }

        #[test]
        fn overflow_shows_markers() {
            let theme = Theme::default();
            let chips = set(&["American", "Italian", "Japanese", "Mexican"]);
            let text = line_text(&ChipStrip::new(&chips, Some(3), &theme).line(24));
            assert!(text.starts_with("‹ "), "{text}");
            assert!(text.contains("Mexican"), "{text}");
            assert!(!text.contains("American"), "{text}");
        }

        #[test]
        fn style_overrides_apply_per_chip() {
            let theme = Theme::default();
            let chips = set(&["A", "B"]);
            let override_style = Style::default().bg(theme.success);
            let line = ChipStrip::new(&chips, None, &theme)
                .with_styles(vec![override_style, override_style])
                .line(40);
            assert!(
                line.spans
                    .iter()
                    .filter(|s| s.content.trim().len() == 1)
                    .all(|s| s.style.bg == Some(theme.success))
            );
        }
    }
}
