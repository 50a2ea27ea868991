//! Selectable chip sets.
//!
//! A [`ChipSet`] is stateless: it reflects the `selected` flags it is given
//! and reports press intent. Selection policy belongs to the parent, which
//! for the common "one of N, first is All" case is [`SingleSelect`].

/// One labeled chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
    /// Optional leading glyph.
    pub icon: Option<char>,
    /// Shows a close affordance while selected.
    pub closable: bool,
}

impl Chip {
    /// Creates an enabled chip.
    #[must_use]
    pub fn new(label: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            selected,
            disabled: false,
            icon: None,
            closable: false,
        }
    }

    /// Disables the chip; presses are suppressed.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Adds a leading glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Adds a close affordance shown while selected.
    #[must_use]
    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }

    /// Returns whether the close affordance is visible.
    #[must_use]
    pub fn shows_close(&self) -> bool {
        self.selected && self.closable
    }
}

/// Intent reported by a chip press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipPress {
    /// The chip body was pressed.
    Pressed(usize),
    /// The close affordance was pressed.
    Close(usize),
}

/// A horizontal strip of chips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipSet {
    chips: Vec<Chip>,
}

impl ChipSet {
    #[must_use]
    pub fn new(chips: Vec<Chip>) -> Self {
        Self { chips }
    }

    #[must_use]
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Presses the chip body at `index`.
    ///
    /// Fires for every enabled chip regardless of its selected flag. Returns
    /// `None` for disabled or missing chips.
    #[must_use]
    pub fn press(&self, index: usize) -> Option<ChipPress> {
        self.chips
            .get(index)
            .filter(|chip| !chip.disabled)
            .map(|_| ChipPress::Pressed(index))
    }

    /// Presses the close affordance at `index`, if it is visible.
    #[must_use]
    pub fn press_close(&self, index: usize) -> Option<ChipPress> {
        self.chips
            .get(index)
            .filter(|chip| !chip.disabled && chip.shows_close())
            .map(|_| ChipPress::Close(index))
    }

    /// Returns the index of the first selected chip.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.chips.iter().position(|c| c.selected)
    }
}

/// Exactly one active option, where index 0 is the All/default sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelect<T> {
    options: Vec<T>,
    selected: usize,
}

impl<T> SingleSelect<T> {
    /// Creates a selection with the sentinel (first option) active.
    ///
    /// `options` must start with the sentinel.
    #[must_use]
    pub fn new(options: Vec<T>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[T] {
        &self.options
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Makes `index` the active option. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }

    /// Returns the active option, or `None` when the sentinel is active.
    #[must_use]
    pub fn active(&self) -> Option<&T> {
        if self.selected == 0 {
            None
        } else {
            self.options.get(self.selected)
        }
    }

    /// Returns the active option including the sentinel.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.options.get(self.selected)
    }

    /// Resets to the sentinel.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Builds the chip strip for these options.
    #[must_use]
    pub fn chips(&self, label: impl Fn(&T) -> String) -> ChipSet {
        ChipSet::new(
            self.options
                .iter()
                .enumerate()
                .map(|(i, option)| Chip::new(label(option), i == self.selected))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuisines() -> SingleSelect<&'static str> {
        SingleSelect::new(vec!["All", "Italian", "Mexican"])
    }

    mod chip_set {
        use super::*;

        #[test]
        fn press_fires_for_selected_and_unselected_chips() {
            let set = ChipSet::new(vec![Chip::new("A", true), Chip::new("B", false)]);
            assert_eq!(set.press(0), Some(ChipPress::Pressed(0)));
            assert_eq!(set.press(1), Some(ChipPress::Pressed(1)));
        }

        #[test]
        fn disabled_chip_suppresses_press() {
            let set = ChipSet::new(vec![Chip::new("A", false).disabled()]);
            assert_eq!(set.press(0), None);
        }

        #[test]
        fn out_of_range_press_is_ignored() {
            let set = ChipSet::new(vec![Chip::new("A", false)]);
            assert_eq!(set.press(3), None);
        }

        #[test]
        fn close_only_fires_when_selected_and_closable() {
            let set = ChipSet::new(vec![
                Chip::new("A", true).closable(),
                Chip::new("B", false).closable(),
                Chip::new("C", true),
            ]);
            assert_eq!(set.press_close(0), Some(ChipPress::Close(0)));
            assert_eq!(set.press_close(1), None);
            assert_eq!(set.press_close(2), None);
        }
    }

    mod single_select {
        use super::*;

        #[test]
        fn starts_on_sentinel_with_no_active_filter() {
            let select = cuisines();
            assert_eq!(select.selected_index(), 0);
            assert_eq!(select.active(), None);
            assert_eq!(select.current(), Some(&"All"));
        }

        #[test]
        fn select_replaces_active_option() {
            let mut select = cuisines();
            select.select(1);
            assert_eq!(select.active(), Some(&"Italian"));
            select.select(2);
            assert_eq!(select.active(), Some(&"Mexican"));
        }

        #[test]
        fn exactly_one_chip_is_selected() {
            let mut select = cuisines();
            for index in [0, 2, 1, 0, 5] {
                select.select(index);
                let chips = select.chips(|s| (*s).to_string());
                let selected = chips.chips().iter().filter(|c| c.selected).count();
                assert_eq!(selected, 1);
            }
        }

        #[test]
        fn out_of_range_select_keeps_current() {
            let mut select = cuisines();
            select.select(1);
            select.select(9);
            assert_eq!(select.active(), Some(&"Italian"));
        }

        #[test]
        fn reset_returns_to_sentinel() {
            let mut select = cuisines();
            select.select(2);
            select.reset();
            assert_eq!(select.active(), None);
        }
    }
}
