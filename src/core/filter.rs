//! List filtering for the discover, diary and saved screens.
//!
//! Displayed subsets are re-derived from the static source on every state
//! change. An element is kept only if it satisfies every active predicate;
//! the All sentinel and an empty search query never exclude anything.
//!
//! Text search uses `nucleo-matcher` fuzzy atoms, ignoring case.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::chips::SingleSelect;
use super::model::{DiningEntry, Restaurant, SavedRestaurant};
use super::mood::MoodType;

/// Label of the cuisine sentinel chip.
pub const ALL_CUISINES: &str = "All";

/// Cuisine chips shown on the discover screen, sentinel first.
pub const CUISINE_OPTIONS: [&str; 9] = [
    ALL_CUISINES,
    "American",
    "Italian",
    "Japanese",
    "Mexican",
    "Chinese",
    "Thai",
    "Indian",
    "Vegetarian",
];

/// Saved-list filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavedFilter {
    #[default]
    AllSaved,
    Planned,
    Visited,
    WantToTry,
}

impl SavedFilter {
    /// Returns all filters in display order, sentinel first.
    #[must_use]
    pub const fn all() -> [SavedFilter; 4] {
        [
            SavedFilter::AllSaved,
            SavedFilter::Planned,
            SavedFilter::Visited,
            SavedFilter::WantToTry,
        ]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllSaved => "All Saved",
            Self::Planned => "Planned",
            Self::Visited => "Visited",
            Self::WantToTry => "Want to Try",
        }
    }

    /// Returns the heading shown above the saved list.
    #[must_use]
    pub const fn list_title(self) -> &'static str {
        match self {
            Self::AllSaved => "All Saved Places",
            other => other.label(),
        }
    }

    /// Returns whether the upcoming-visits section is shown.
    #[must_use]
    pub const fn shows_upcoming(self) -> bool {
        !matches!(self, Self::Visited)
    }
}

/// Stats time-frame chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFrame {
    #[default]
    ThisMonth,
    LastMonth,
    ThreeMonths,
    SixMonths,
    Year,
}

impl TimeFrame {
    #[must_use]
    pub const fn all() -> [TimeFrame; 5] {
        [
            TimeFrame::ThisMonth,
            TimeFrame::LastMonth,
            TimeFrame::ThreeMonths,
            TimeFrame::SixMonths,
            TimeFrame::Year,
        ]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::Year => "Year",
        }
    }
}

/// Active filter state of the discover screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverFilters {
    pub cuisine: SingleSelect<String>,
    pub mood: Option<MoodType>,
    pub query: String,
}

impl Default for DiscoverFilters {
    fn default() -> Self {
        Self {
            cuisine: SingleSelect::new(CUISINE_OPTIONS.iter().map(|c| (*c).to_string()).collect()),
            mood: None,
            query: String::new(),
        }
    }
}

impl DiscoverFilters {
    /// Returns whether any predicate is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cuisine.active().is_some() || self.mood.is_some() || !self.query.trim().is_empty()
    }
}

/// Fuzzy text query matched against several fields of a record.
pub struct SearchQuery {
    atom: Option<Atom>,
    matcher: Matcher,
}

impl SearchQuery {
    /// Builds a query; blank input matches everything.
    #[must_use]
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        let atom = (!trimmed.is_empty()).then(|| {
            Atom::new(
                trimmed,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
                false,
            )
        });
        Self {
            atom,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Returns whether any of `fields` matches.
    pub fn matches_any<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        let Some(atom) = &self.atom else {
            return true;
        };
        let mut buf = Vec::new();
        fields.into_iter().any(|field| {
            let haystack = Utf32Str::new(field, &mut buf);
            atom.score(haystack, &mut self.matcher).is_some()
        })
    }
}

/// Keeps restaurants that satisfy every active discover predicate.
#[must_use]
pub fn filter_restaurants<'a>(
    source: &'a [Restaurant],
    filters: &DiscoverFilters,
) -> Vec<&'a Restaurant> {
    let cuisine = filters.cuisine.active();
    let mut search = SearchQuery::new(&filters.query);

    source
        .iter()
        .filter(|r| cuisine.is_none_or(|c| r.cuisine == *c))
        .filter(|r| filters.mood.is_none_or(|m| r.suits(m)))
        .filter(|r| search.matches_any([r.name.as_str(), r.cuisine.as_str()]))
        .collect()
}

/// Keeps diary entries whose dish, restaurant, location or tags match `query`.
#[must_use]
pub fn filter_entries<'a>(source: &'a [DiningEntry], query: &str) -> Vec<&'a DiningEntry> {
    let mut search = SearchQuery::new(query);
    source
        .iter()
        .filter(|e| {
            let fields = [
                e.dish_name.as_str(),
                e.restaurant_name.as_str(),
                e.location.as_str(),
            ];
            search.matches_any(fields.into_iter().chain(e.tags.iter().map(String::as_str)))
        })
        .collect()
}

/// Returns saved places with a planned visit, or nothing when the filter hides the section.
#[must_use]
pub fn upcoming_visits(source: &[SavedRestaurant], filter: SavedFilter) -> Vec<&SavedRestaurant> {
    if !filter.shows_upcoming() {
        return Vec::new();
    }
    source.iter().filter(|s| s.is_upcoming()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::core::model::PriceLevel;

    fn place(id: &str, name: &str, cuisine: &str) -> Restaurant {
        Restaurant::new(id, name, "", cuisine, 4.0, PriceLevel::Moderate, "1 mi")
    }

    fn select_cuisine(filters: &mut DiscoverFilters, cuisine: &str) {
        let index = filters
            .cuisine
            .options()
            .iter()
            .position(|c| c == cuisine)
            .unwrap();
        filters.cuisine.select(index);
    }

    // =========================================================================
    // Restaurant Filtering
    // =========================================================================

    mod restaurants {
        use super::*;

        #[test]
        fn cuisine_filter_keeps_exact_matches() {
            let source = vec![place("1", "A", "Italian"), place("2", "B", "Mexican")];
            let mut filters = DiscoverFilters::default();
            select_cuisine(&mut filters, "Italian");

            let shown = filter_restaurants(&source, &filters);
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].cuisine, "Italian");
        }

        #[test]
        fn all_sentinel_keeps_everything() {
            let source = vec![place("1", "A", "Italian"), place("2", "B", "Mexican")];
            let filters = DiscoverFilters::default();
            assert_eq!(filter_restaurants(&source, &filters).len(), 2);
            assert!(!filters.is_active());
        }

        #[test]
        fn mood_filter_keeps_suitable_places() {
            let source = vec![
                place("1", "A", "Italian").with_moods(&[MoodType::Romantic]),
                place("2", "B", "Italian").with_moods(&[MoodType::Quick]),
            ];
            let filters = DiscoverFilters {
                mood: Some(MoodType::Quick),
                ..DiscoverFilters::default()
            };
            let shown = filter_restaurants(&source, &filters);
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].id, "2");
        }

        #[test]
        fn dimensions_combine_with_and() {
            let source = vec![
                place("1", "A", "Italian").with_moods(&[MoodType::Romantic]),
                place("2", "B", "Mexican").with_moods(&[MoodType::Romantic]),
                place("3", "C", "Italian").with_moods(&[MoodType::Family]),
            ];
            let mut filters = DiscoverFilters {
                mood: Some(MoodType::Romantic),
                ..DiscoverFilters::default()
            };
            select_cuisine(&mut filters, "Italian");

            let ids: Vec<&str> = filter_restaurants(&source, &filters)
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            assert_eq!(ids, vec!["1"]);
        }

        #[test]
        fn search_matches_name_or_cuisine_ignoring_case() {
            let source = vec![
                place("1", "Sushi Perfection", "Japanese"),
                place("2", "Taco Fiesta", "Mexican"),
            ];
            let by_name = DiscoverFilters {
                query: "sushi".into(),
                ..DiscoverFilters::default()
            };
            let by_cuisine = DiscoverFilters {
                query: "MEXICAN".into(),
                ..DiscoverFilters::default()
            };
            assert_eq!(filter_restaurants(&source, &by_name)[0].id, "1");
            assert_eq!(filter_restaurants(&source, &by_cuisine)[0].id, "2");
        }

        #[test]
        fn blank_query_is_inactive() {
            let source = vec![place("1", "A", "Thai")];
            let filters = DiscoverFilters {
                query: "   ".into(),
                ..DiscoverFilters::default()
            };
            assert_eq!(filter_restaurants(&source, &filters).len(), 1);
            assert!(!filters.is_active());
        }

        #[test]
        fn preserves_source_order() {
            let source = vec![
                place("1", "A", "Thai"),
                place("2", "B", "Thai"),
                place("3", "C", "Thai"),
            ];
            let ids: Vec<&str> = filter_restaurants(&source, &DiscoverFilters::default())
                .iter()
                .map(|r| r.id.as_str())
                .collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
    }

    // =========================================================================
    // Diary Search
    // =========================================================================

    mod entries {
        use super::*;

        fn entries() -> Vec<DiningEntry> {
            vec![
                DiningEntry::new("1", "Burger Co", "Cheeseburger", "", 4, "Downtown", "Today", &["Lunch"]),
                DiningEntry::new("2", "Sushi Bar", "Rainbow Roll", "", 5, "Midtown", "Today", &["Dinner"]),
            ]
        }

        #[test]
        fn matches_tags() {
            let source = entries();
            let shown = filter_entries(&source, "dinner");
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].id, "2");
        }

        #[test]
        fn matches_location() {
            let source = entries();
            assert_eq!(filter_entries(&source, "downtown")[0].id, "1");
        }

        #[test]
        fn empty_query_keeps_all() {
            let source = entries();
            assert_eq!(filter_entries(&source, "").len(), 2);
        }
    }

    // =========================================================================
    // Saved Screen
    // =========================================================================

    mod saved {
        use super::*;

        fn saved() -> Vec<SavedRestaurant> {
            vec![
                SavedRestaurant::new(place("1", "A", "Thai"), "2 days ago").planned_for("Saturday"),
                SavedRestaurant::new(place("2", "B", "Thai"), "1 week ago"),
                SavedRestaurant::new(place("3", "C", "Thai"), "3 days ago").planned_for("Friday"),
            ]
        }

        #[test]
        fn upcoming_contains_only_planned() {
            let source = saved();
            let ids: Vec<&str> = upcoming_visits(&source, SavedFilter::AllSaved)
                .iter()
                .map(|s| s.restaurant.id.as_str())
                .collect();
            assert_eq!(ids, vec!["1", "3"]);
        }

        #[test]
        fn upcoming_hidden_when_visited() {
            let source = saved();
            assert!(upcoming_visits(&source, SavedFilter::Visited).is_empty());
        }

        #[test]
        fn upcoming_shown_for_other_filters() {
            let source = saved();
            for filter in [SavedFilter::Planned, SavedFilter::WantToTry] {
                assert_eq!(upcoming_visits(&source, filter).len(), 2);
            }
        }

        #[test]
        fn list_title_uses_label_except_for_sentinel() {
            assert_eq!(SavedFilter::AllSaved.list_title(), "All Saved Places");
            assert_eq!(SavedFilter::WantToTry.list_title(), "Want to Try");
        }
    }

    #[test]
    fn time_frame_labels() {
        let labels: Vec<&str> = TimeFrame::all().iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["This Month", "Last Month", "3 Months", "6 Months", "Year"]
        );
    }
}
