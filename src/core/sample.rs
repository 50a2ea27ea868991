//! Built-in sample data the screens are constructed from.

use super::filter::TimeFrame;
use super::model::{DiningEntry, Friend, PriceLevel, Restaurant, SavedRestaurant, UserProfile};
use super::mood::MoodType;
use super::stats::StatsSnapshot;

const PEXELS: &str = "https://images.pexels.com/photos";

fn photo(id: u32) -> String {
    format!("{PEXELS}/{id}/pexels-photo-{id}.jpeg")
}

/// Restaurants listed on the discover screen.
#[must_use]
pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new(
            "1",
            "The Rustic Table",
            &photo(67_468),
            "American",
            4.7,
            PriceLevel::Pricey,
            "0.5 mi",
        )
        .recommended()
        .with_moods(&[MoodType::Impress, MoodType::Romantic, MoodType::Friends]),
        Restaurant::new(
            "2",
            "Sushi Perfection",
            &photo(884_600),
            "Japanese",
            4.5,
            PriceLevel::Splurge,
            "1.2 mi",
        )
        .new_place()
        .with_moods(&[MoodType::Impress, MoodType::Romantic]),
        Restaurant::new(
            "3",
            "Pasta Paradiso",
            &photo(1_527_603),
            "Italian",
            4.2,
            PriceLevel::Moderate,
            "0.8 mi",
        )
        .with_moods(&[MoodType::Family, MoodType::Friends, MoodType::Chill]),
        Restaurant::new(
            "4",
            "Taco Fiesta",
            &photo(2_092_507),
            "Mexican",
            4.3,
            PriceLevel::Moderate,
            "1.5 mi",
        )
        .recommended()
        .with_moods(&[MoodType::Quick, MoodType::Friends, MoodType::Chill]),
        Restaurant::new(
            "5",
            "Green Garden",
            &photo(1_640_774),
            "Vegetarian",
            4.0,
            PriceLevel::Pricey,
            "2.0 mi",
        )
        .new_place()
        .with_moods(&[MoodType::Chill, MoodType::Family, MoodType::Quick]),
    ]
}

/// The user's saved places.
#[must_use]
pub fn saved_restaurants() -> Vec<SavedRestaurant> {
    let mut places = restaurants().into_iter();
    let mut next = |saved: &str| {
        places.next().map(|mut r| {
            r.is_new = false;
            r.is_recommended = false;
            SavedRestaurant::new(r, saved)
        })
    };

    [
        next("2 days ago").map(|s| s.planned_for("Saturday, 7:30 PM")),
        next("1 week ago"),
        next("3 days ago").map(|s| s.planned_for("Next Friday, 8:00 PM")),
        next("2 weeks ago"),
        next("5 days ago"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Entries in the food diary, most recent first.
#[must_use]
pub fn diary_entries() -> Vec<DiningEntry> {
    vec![
        DiningEntry::new(
            "1",
            "Gourmet Burger Co.",
            "Classic Cheeseburger",
            &photo(1_639_557),
            4,
            "Downtown",
            "Today, 1:30 PM",
            &["Burger", "Lunch"],
        )
        .with_price("$15.99")
        .with_notes("Perfectly cooked medium rare. Great fries too!"),
        DiningEntry::new(
            "2",
            "Sushi Paradise",
            "Rainbow Roll",
            &photo(2_098_085),
            5,
            "Midtown",
            "Yesterday, 7:15 PM",
            &["Sushi", "Dinner", "Date night"],
        )
        .with_price("$22.50")
        .with_notes("Incredibly fresh fish, nice atmosphere."),
        DiningEntry::new(
            "3",
            "Italiano Authentico",
            "Pasta Carbonara",
            &photo(1_438_672),
            3,
            "Village",
            "Mar 15, 6:30 PM",
            &["Italian", "Pasta", "Dinner"],
        )
        .with_price("$18.00")
        .with_notes("Good flavor but a bit too salty."),
        DiningEntry::new(
            "4",
            "Morning Glory Café",
            "Avocado Toast",
            &photo(1_351_238),
            4,
            "Uptown",
            "Mar 12, 9:45 AM",
            &["Breakfast", "Healthy"],
        )
        .with_price("$12.00")
        .with_notes("Perfect brunch spot."),
        DiningEntry::new(
            "5",
            "Taco Fiesta",
            "Street Tacos Combo",
            &photo(2_092_507),
            5,
            "Downtown",
            "Mar 10, 12:15 PM",
            &["Mexican", "Lunch", "Spicy"],
        )
        .with_price("$14.50")
        .with_notes("Authentic flavors, great salsa verde!"),
    ]
}

/// Friends shown on the profile screen.
#[must_use]
pub fn friends() -> Vec<Friend> {
    vec![
        Friend::new("1", "Emma Johnson", &photo(774_909)).with_stats("Italian", 8, 42),
        Friend::new("2", "James Smith", &photo(220_453)).with_stats("Mexican", 6, 28),
        Friend::new("3", "Sophia Chen", &photo(415_829)).with_stats("Japanese", 9, 53),
    ]
}

/// The signed-in user's profile card.
#[must_use]
pub fn profile(display_name: &str) -> UserProfile {
    UserProfile {
        display_name: display_name.to_string(),
        avatar_ref: photo(1_222_271),
        foodie_level: 7,
        entries: 156,
        places: 84,
        friends: 12,
    }
}

/// Stats screen figures for `frame`.
#[must_use]
pub const fn stats_for(frame: TimeFrame) -> StatsSnapshot {
    match frame {
        TimeFrame::ThisMonth => StatsSnapshot {
            restaurants: 21,
            dishes: 36,
            average_rating: 4.2,
            spent_dollars: 426,
            restaurants_delta: 5,
            spent_delta: 86,
            time_dining: "32h 15m",
            hours_per_visit: 1.5,
            most_active_day: "Friday",
            most_active_visits: 8,
            top_cuisine: "Italian",
            most_ordered: "Pizza",
            highest_rated: "Sushi",
            best_value: "Mexican",
            friends: 12,
            group_meals: 8,
            recommendations: 5,
        },
        TimeFrame::LastMonth => StatsSnapshot {
            restaurants: 16,
            dishes: 29,
            average_rating: 4.0,
            spent_dollars: 340,
            restaurants_delta: -2,
            spent_delta: -25,
            time_dining: "24h 40m",
            hours_per_visit: 1.5,
            most_active_day: "Saturday",
            most_active_visits: 6,
            top_cuisine: "Mexican",
            most_ordered: "Tacos",
            highest_rated: "Ramen",
            best_value: "Mexican",
            friends: 11,
            group_meals: 6,
            recommendations: 3,
        },
        TimeFrame::ThreeMonths => StatsSnapshot {
            restaurants: 52,
            dishes: 97,
            average_rating: 4.1,
            spent_dollars: 1_180,
            restaurants_delta: 9,
            spent_delta: 140,
            time_dining: "81h 05m",
            hours_per_visit: 1.6,
            most_active_day: "Friday",
            most_active_visits: 19,
            top_cuisine: "Italian",
            most_ordered: "Pizza",
            highest_rated: "Sushi",
            best_value: "Thai",
            friends: 12,
            group_meals: 21,
            recommendations: 14,
        },
        TimeFrame::SixMonths => StatsSnapshot {
            restaurants: 98,
            dishes: 181,
            average_rating: 4.1,
            spent_dollars: 2_245,
            restaurants_delta: 12,
            spent_delta: 310,
            time_dining: "152h 30m",
            hours_per_visit: 1.6,
            most_active_day: "Friday",
            most_active_visits: 35,
            top_cuisine: "Italian",
            most_ordered: "Burgers",
            highest_rated: "Sushi",
            best_value: "Thai",
            friends: 12,
            group_meals: 40,
            recommendations: 27,
        },
        TimeFrame::Year => StatsSnapshot {
            restaurants: 184,
            dishes: 356,
            average_rating: 4.2,
            spent_dollars: 4_310,
            restaurants_delta: 31,
            spent_delta: 520,
            time_dining: "290h 10m",
            hours_per_visit: 1.6,
            most_active_day: "Friday",
            most_active_visits: 66,
            top_cuisine: "Italian",
            most_ordered: "Pizza",
            highest_rated: "Omakase",
            best_value: "Mexican",
            friends: 12,
            group_meals: 77,
            recommendations: 52,
        },
    }
}
