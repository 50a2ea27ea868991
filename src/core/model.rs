//! Domain records shown by the screens.
//!
//! Every record is an immutable value with an opaque string id. Records
//! serialize with camelCase keys so they can be handed to collaborators (and
//! logged) as JSON payloads.

use serde::{Deserialize, Serialize};

use super::mood::MoodType;

/// Highest rating a diary entry can carry.
pub const MAX_ENTRY_RATING: u8 = 5;

/// Ordinal price level, rendered as repeated currency glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceLevel {
    /// `$`
    Budget,
    /// `$$`
    Moderate,
    /// `$$$`
    Pricey,
    /// `$$$$`
    Splurge,
}

impl PriceLevel {
    /// Returns the ordinal value (1–4).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Budget => 1,
            Self::Moderate => 2,
            Self::Pricey => 3,
            Self::Splurge => 4,
        }
    }

    /// Returns the display glyphs, e.g. `$$$`.
    #[must_use]
    pub fn glyphs(self) -> String {
        "$".repeat(usize::from(self.level()))
    }
}

/// One recorded meal or visit in the food diary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningEntry {
    pub id: String,
    pub restaurant_name: String,
    pub dish_name: String,
    pub image_ref: String,
    /// Ordinal rating in `0..=5`.
    pub rating: u8,
    pub location: String,
    /// Display string, not a calendar value.
    pub date: String,
    /// Ordered and duplicate-free.
    pub tags: Vec<String>,
    pub price: Option<String>,
    pub notes: Option<String>,
}

impl DiningEntry {
    /// Creates an entry, clamping the rating and dropping empty or repeated tags.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: &str,
        restaurant_name: &str,
        dish_name: &str,
        image_ref: &str,
        rating: u8,
        location: &str,
        date: &str,
        tags: &[&str],
    ) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            let tag = tag.trim();
            if !tag.is_empty() && !unique.iter().any(|t| t == tag) {
                unique.push(tag.to_string());
            }
        }

        Self {
            id: id.to_string(),
            restaurant_name: restaurant_name.to_string(),
            dish_name: dish_name.to_string(),
            image_ref: image_ref.to_string(),
            rating: rating.min(MAX_ENTRY_RATING),
            location: location.to_string(),
            date: date.to_string(),
            tags: unique,
            price: None,
            notes: None,
        }
    }

    /// Sets the display price.
    #[must_use]
    pub fn with_price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }

    /// Sets the free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// A restaurant listed on the discover and saved screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image_ref: String,
    pub cuisine: String,
    /// Continuous rating in `0.0..=5.0`.
    pub rating: f32,
    pub price_level: PriceLevel,
    pub distance: String,
    pub is_new: bool,
    pub is_recommended: bool,
    /// Dining occasions the place suits.
    pub moods: Vec<MoodType>,
}

impl Restaurant {
    /// Creates a restaurant with no flags and no moods.
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        image_ref: &str,
        cuisine: &str,
        rating: f32,
        price_level: PriceLevel,
        distance: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            image_ref: image_ref.to_string(),
            cuisine: cuisine.to_string(),
            rating: rating.clamp(0.0, 5.0),
            price_level,
            distance: distance.to_string(),
            is_new: false,
            is_recommended: false,
            moods: Vec::new(),
        }
    }

    /// Marks the restaurant as newly opened.
    #[must_use]
    pub fn new_place(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Marks the restaurant as a recommendation.
    #[must_use]
    pub fn recommended(mut self) -> Self {
        self.is_recommended = true;
        self
    }

    /// Sets the dining occasions the place suits.
    #[must_use]
    pub fn with_moods(mut self, moods: &[MoodType]) -> Self {
        self.moods = moods.to_vec();
        self
    }

    /// Returns whether the place suits the given mood.
    #[must_use]
    pub fn suits(&self, mood: MoodType) -> bool {
        self.moods.contains(&mood)
    }

    /// Formats the rating to one decimal place.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// A restaurant on the user's saved list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub date_saved: String,
    /// When set, the visit is upcoming.
    pub planned_date: Option<String>,
}

impl SavedRestaurant {
    /// Wraps a restaurant with the time it was saved.
    #[must_use]
    pub fn new(restaurant: Restaurant, date_saved: &str) -> Self {
        Self {
            restaurant,
            date_saved: date_saved.to_string(),
            planned_date: None,
        }
    }

    /// Plans a visit.
    #[must_use]
    pub fn planned_for(mut self, date: &str) -> Self {
        self.planned_date = Some(date.to_string());
        self
    }

    /// Returns whether a visit is planned.
    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        self.planned_date.is_some()
    }
}

/// A friend shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub avatar_ref: String,
    pub favorite_cuisine: Option<String>,
    pub foodie_level: Option<u8>,
    pub restaurant_visits: Option<u32>,
    /// UI-only selection flag; never part of the record's identity.
    #[serde(skip)]
    pub selected: bool,
}

impl Friend {
    /// Creates a friend with no optional details.
    #[must_use]
    pub fn new(id: &str, name: &str, avatar_ref: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar_ref: avatar_ref.to_string(),
            favorite_cuisine: None,
            foodie_level: None,
            restaurant_visits: None,
            selected: false,
        }
    }

    /// Adds the favorite cuisine, foodie level and visit count.
    #[must_use]
    pub fn with_stats(mut self, cuisine: &str, level: u8, visits: u32) -> Self {
        self.favorite_cuisine = Some(cuisine.to_string());
        self.foodie_level = Some(level);
        self.restaurant_visits = Some(visits);
        self
    }
}

/// The signed-in user's profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub avatar_ref: String,
    pub foodie_level: u8,
    pub entries: u32,
    pub places: u32,
    pub friends: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod price_level {
        use super::*;

        #[test]
        fn glyphs_repeat_per_level() {
            assert_eq!(PriceLevel::Budget.glyphs(), "$");
            assert_eq!(PriceLevel::Pricey.glyphs(), "$$$");
            assert_eq!(PriceLevel::Splurge.glyphs(), "$$$$");
        }
    }

    mod dining_entry {
        use super::*;

        #[test]
        fn rating_is_clamped_to_five() {
            let entry = DiningEntry::new("1", "Diner", "Pie", "", 9, "Here", "Today", &[]);
            assert_eq!(entry.rating, 5);
        }

        #[test]
        fn tags_are_deduplicated_in_order() {
            let entry = DiningEntry::new(
                "1",
                "Diner",
                "Pie",
                "",
                4,
                "Here",
                "Today",
                &["Lunch", "Sweet", "Lunch", " ", "lunch"],
            );
            assert_eq!(entry.tags, vec!["Lunch", "Sweet", "lunch"]);
        }

        #[test]
        fn serializes_with_camel_case_keys() {
            let entry = DiningEntry::new("1", "Diner", "Pie", "", 4, "Here", "Today", &[])
                .with_price("$4.00");
            let json = serde_json::to_string(&entry).unwrap();
            assert!(json.contains("\"restaurantName\":\"Diner\""));
            assert!(json.contains("\"dishName\":\"Pie\""));
            assert!(json.contains("\"price\":\"$4.00\""));
        }
    }

    mod restaurant {
        use super::*;

        #[test]
        fn flags_are_independent() {
            let r = Restaurant::new("1", "A", "", "Thai", 4.0, PriceLevel::Budget, "1 mi")
                .new_place()
                .recommended();
            assert!(r.is_new);
            assert!(r.is_recommended);
        }

        #[test]
        fn rating_label_has_one_decimal() {
            let r = Restaurant::new("1", "A", "", "Thai", 4.0, PriceLevel::Budget, "1 mi");
            assert_eq!(r.rating_label(), "4.0");
        }

        #[test]
        fn suits_checks_mood_membership() {
            let r = Restaurant::new("1", "A", "", "Thai", 4.0, PriceLevel::Budget, "1 mi")
                .with_moods(&[MoodType::Quick]);
            assert!(r.suits(MoodType::Quick));
            assert!(!r.suits(MoodType::Romantic));
        }
    }

    mod friend {
        use super::*;

        #[test]
        fn selected_flag_is_not_serialized() {
            let mut friend = Friend::new("1", "Emma", "");
            friend.selected = true;
            let json = serde_json::to_string(&friend).unwrap();
            assert!(!json.contains("selected"));
        }
    }
}
