//! Centralized theme and styling.
//!
//! The theme is passed explicitly to every widget and screen renderer; there
//! is no global style state.

use ratatui::style::{Color, Modifier, Style};

use crate::core::{MoodType, Tone};

/// Spacing, in terminal cells, used between laid-out elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    /// Gap between chips in a strip.
    pub chip_gap: u16,
    /// Blank lines between cards in a list.
    pub card_gap: u16,
    /// Blank lines between screen sections.
    pub section_gap: u16,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            chip_gap: 1,
            card_gap: 1,
            section_gap: 1,
        }
    }
}

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color.
    pub bg: Color,
    /// Primary foreground color.
    pub fg: Color,
    /// Brand color for titles and selected chips.
    pub primary: Color,
    /// Secondary brand color.
    pub secondary: Color,
    /// Accent color (rating icons, picks).
    pub accent: Color,
    /// Success color (green).
    pub success: Color,
    /// Warning color (yellow).
    pub warning: Color,
    /// Error color (red).
    pub error: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Layout spacing.
    pub spacing: Spacing,
    /// Glyph for an active rating icon.
    pub rating_on: char,
    /// Glyph for an inactive rating icon.
    pub rating_off: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            primary: Color::LightRed,
            secondary: Color::LightBlue,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::LightYellow,
            error: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
            spacing: Spacing::default(),
            rating_on: '★',
            rating_off: '☆',
        }
    }
}

impl Theme {
    /// Resolves an abstract tone to a color.
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Neutral => self.border,
            Tone::Primary => self.primary,
            Tone::Secondary => self.secondary,
            Tone::Accent => self.accent,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Error => self.error,
        }
    }

    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headings within a screen.
    #[must_use]
    pub fn section_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for success messages.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused border of a form field.
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for placeholder text (visible on both light and dark backgrounds).
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    /// Style for a plain filter chip.
    #[must_use]
    pub fn chip_style(&self, selected: bool, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.muted).add_modifier(Modifier::DIM)
        } else if selected {
            Style::default()
                .fg(self.bg_contrast())
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg)
        }
    }

    /// Style for a mood chip, using the mood's tone pairing.
    #[must_use]
    pub fn mood_chip_style(&self, mood: MoodType, selected: bool) -> Style {
        let config = mood.config();
        if selected {
            Style::default()
                .fg(self.bg_contrast())
                .bg(self.tone(config.selected.background))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.tone(config.resting.border))
        }
    }

    /// Modifier added to whichever element holds keyboard focus.
    #[must_use]
    pub const fn focus_modifier(&self) -> Modifier {
        Modifier::UNDERLINED
    }

    /// Style for one rating icon.
    #[must_use]
    pub fn rating_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for the "New" badge.
    #[must_use]
    pub fn new_badge_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the "AI Pick" badge.
    #[must_use]
    pub fn pick_badge_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Foreground used on filled backgrounds.
    const fn bg_contrast(&self) -> Color {
        Color::Black
    }
}
