//! Layout calculation helpers for the TUI.
//!
//! A single source of truth for the screen split, so that `App::update_layout`
//! and `App::render` always agree on dimensions.

use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the browse screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title, greeting and location (1 line).
    pub header: Rect,
    /// Tab bar (1 line).
    pub tabs: Rect,
    /// Active screen content.
    pub body: Rect,
    /// Status message (1 line).
    pub status: Rect,
    /// Key hints (1 line).
    pub footer: Rect,
}

const SCREEN_CONSTRAINTS: [Constraint; 5] = [
    Constraint::Length(1), // Header
    Constraint::Length(1), // Tabs
    Constraint::Min(3),    // Body
    Constraint::Length(1), // Status
    Constraint::Length(1), // Footer
];

/// Calculates the browse screen layout.
#[must_use]
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::vertical(SCREEN_CONSTRAINTS).split(area);
    ScreenLayout {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        status: chunks[3],
        footer: chunks[4],
    }
}

/// Number of whole items of `item_height` rows that fit in `viewport` rows.
///
/// Always at least one, so a tiny viewport still shows the selection.
#[must_use]
pub fn items_per_view(item_height: u16, viewport: u16) -> usize {
    if item_height == 0 {
        return 1;
    }
    usize::from(viewport / item_height).max(1)
}

/// Index of the first item drawn so that `selected` is visible.
///
/// The list scrolls only once the selection moves past the last item that
/// fits; it then keeps the selection on the bottom row.
#[must_use]
pub fn scroll_offset(selected: usize, item_height: u16, viewport: u16) -> usize {
    let per_view = items_per_view(item_height, viewport);
    (selected + 1).saturating_sub(per_view)
}

/// Returns a `width` × `height` rectangle centered in `area`, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_layout_calculation() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.footer.height, 1);
        // Body takes the rest (24 - 4 = 20)
        assert_eq!(layout.body.height, 20);
    }

    #[test]
    fn screen_layout_areas_are_stacked() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.tabs.y, 1);
        assert_eq!(layout.body.y, 2);
        assert_eq!(layout.status.y, 28);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.body.width, 100);
    }

    #[test]
    fn screen_layout_small_terminal() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 40, 7));
        assert_eq!(layout.body.height, 3);
    }

    mod scrolling {
        use super::*;

        #[test]
        fn no_scroll_while_selection_fits() {
            // 20 rows of 5-row cards: 4 fit.
            for selected in 0..4 {
                assert_eq!(scroll_offset(selected, 5, 20), 0);
            }
        }

        #[test]
        fn scrolls_to_keep_selection_on_last_row() {
            assert_eq!(scroll_offset(4, 5, 20), 1);
            assert_eq!(scroll_offset(9, 5, 20), 6);
        }

        #[test]
        fn tiny_viewport_still_shows_selection() {
            assert_eq!(items_per_view(5, 3), 1);
            assert_eq!(scroll_offset(3, 5, 3), 3);
            assert_eq!(items_per_view(0, 10), 1);
        }
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(60, 20, area), area);
    }
}
