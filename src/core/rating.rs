//! Rating selector.
//!
//! An ordinal `0..=max_rating` input displayed as `max_rating` discrete
//! icons. Pressing icon `i` sets the rating to `i + 1`. Read-only selectors
//! render the same icons but ignore presses.

/// Default number of icons.
pub const DEFAULT_MAX_RATING: u8 = 5;

/// Whether the selector accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingMode {
    #[default]
    Interactive,
    ReadOnly,
}

/// Icon sizing for rating displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl RatingSize {
    /// Cells between icons.
    #[must_use]
    pub const fn gap(self) -> u16 {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }
}

/// Rating input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSelector {
    rating: u8,
    max_rating: u8,
    mode: RatingMode,
}

impl Default for RatingSelector {
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_RATING, RatingMode::Interactive)
    }
}

impl RatingSelector {
    /// Creates a selector; `rating` is clamped to `0..=max_rating`.
    #[must_use]
    pub fn new(rating: u8, max_rating: u8, mode: RatingMode) -> Self {
        Self {
            rating: rating.min(max_rating),
            max_rating,
            mode,
        }
    }

    /// Creates a read-only display for `rating`.
    #[must_use]
    pub fn read_only(rating: u8, max_rating: u8) -> Self {
        Self::new(rating, max_rating, RatingMode::ReadOnly)
    }

    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub const fn max_rating(&self) -> u8 {
        self.max_rating
    }

    #[must_use]
    pub const fn mode(&self) -> RatingMode {
        self.mode
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.mode == RatingMode::ReadOnly
    }

    /// Presses the icon at `index` (0-based).
    ///
    /// Returns the new rating exactly once per accepted press. Presses in
    /// read-only mode or beyond the last icon return `None`.
    pub fn press(&mut self, index: usize) -> Option<u8> {
        if self.is_read_only() {
            return None;
        }
        let new_rating = u8::try_from(index).ok()?.checked_add(1)?;
        if new_rating > self.max_rating {
            return None;
        }
        self.rating = new_rating;
        Some(new_rating)
    }

    /// Returns one flag per icon; `true` for icons at or below the rating.
    #[must_use]
    pub fn icons(&self) -> Vec<bool> {
        (0..self.max_rating).map(|i| i < self.rating).collect()
    }

    /// Formats the rating to one decimal place.
    #[must_use]
    pub fn value_label(&self) -> String {
        format!("{:.1}", f32::from(self.rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_index_sets_next_rating_for_every_icon() {
        for max in [3u8, 5, 10] {
            for k in 1..=max {
                let mut selector = RatingSelector::new(0, max, RatingMode::Interactive);
                assert_eq!(selector.press(usize::from(k - 1)), Some(k));
                assert_eq!(selector.rating(), k);
            }
        }
    }

    #[test]
    fn read_only_never_fires() {
        let mut selector = RatingSelector::read_only(2, 5);
        for index in 0..5 {
            assert_eq!(selector.press(index), None);
        }
        assert_eq!(selector.rating(), 2);
    }

    #[test]
    fn press_beyond_last_icon_is_ignored() {
        let mut selector = RatingSelector::default();
        assert_eq!(selector.press(5), None);
        assert_eq!(selector.press(usize::MAX), None);
        assert_eq!(selector.rating(), 0);
    }

    #[test]
    fn pressing_same_icon_fires_again() {
        let mut selector = RatingSelector::default();
        assert_eq!(selector.press(3), Some(4));
        assert_eq!(selector.press(3), Some(4));
    }

    #[test]
    fn initial_rating_is_clamped() {
        let selector = RatingSelector::new(9, 5, RatingMode::Interactive);
        assert_eq!(selector.rating(), 5);
    }

    #[test]
    fn icons_reflect_rating() {
        let selector = RatingSelector::read_only(3, 5);
        assert_eq!(selector.icons(), vec![true, true, true, false, false]);
    }

    #[test]
    fn value_label_has_one_decimal() {
        assert_eq!(RatingSelector::read_only(4, 5).value_label(), "4.0");
        assert_eq!(RatingSelector::default().value_label(), "0.0");
    }

    #[test]
    fn size_gaps_grow() {
        assert!(RatingSize::Small.gap() < RatingSize::Medium.gap());
        assert!(RatingSize::Medium.gap() < RatingSize::Large.gap());
    }
}
