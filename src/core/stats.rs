//! Aggregate statistics for the diary header and the stats screen.

use super::model::DiningEntry;

/// Figures computed from the diary entries on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DiarySummary {
    pub entries: usize,
    /// `None` when there are no entries.
    pub average_rating: Option<f32>,
    /// Sum of every parseable price.
    pub spent_cents: u64,
    /// Most frequent tag; ties go to the tag seen first.
    pub top_tag: Option<String>,
}

impl DiarySummary {
    /// Formats the average rating to one decimal place, or `-`.
    #[must_use]
    pub fn average_label(&self) -> String {
        self.average_rating
            .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"))
    }

    #[must_use]
    pub fn spent_label(&self) -> String {
        format_cents(self.spent_cents)
    }
}

/// Summarizes `entries`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // entry counts are tiny
pub fn summarize<'a>(entries: impl IntoIterator<Item = &'a DiningEntry>) -> DiarySummary {
    let mut count = 0usize;
    let mut rating_sum = 0u32;
    let mut spent_cents = 0u64;
    let mut tag_counts: Vec<(&str, usize)> = Vec::new();

    for entry in entries {
        count += 1;
        rating_sum += u32::from(entry.rating);
        if let Some(cents) = entry.price.as_deref().and_then(parse_price_cents) {
            spent_cents = spent_cents.saturating_add(cents);
        }
        for tag in &entry.tags {
            match tag_counts.iter_mut().find(|(t, _)| *t == tag.as_str()) {
                Some((_, n)) => *n += 1,
                None => tag_counts.push((tag.as_str(), 1)),
            }
        }
    }

    let mut top_tag: Option<(&str, usize)> = None;
    for (tag, n) in tag_counts {
        if top_tag.is_none_or(|(_, best)| n > best) {
            top_tag = Some((tag, n));
        }
    }

    DiarySummary {
        entries: count,
        average_rating: (count > 0).then(|| rating_sum as f32 / count as f32),
        spent_cents,
        top_tag: top_tag.map(|(t, _)| t.to_string()),
    }
}

/// Parses a display price such as `$15.99` or `1,200` into cents.
#[must_use]
pub fn parse_price_cents(price: &str) -> Option<u64> {
    let cleaned: String = price
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (whole, frac) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

/// Formats cents as `$12.34`.
#[must_use]
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// One titled figure on the stats screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
}

/// Stats screen figures for one time frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub restaurants: u32,
    pub dishes: u32,
    pub average_rating: f32,
    pub spent_dollars: u32,
    /// Change in restaurants visited against the previous period.
    pub restaurants_delta: i32,
    pub spent_delta: i32,
    pub time_dining: &'static str,
    pub hours_per_visit: f32,
    pub most_active_day: &'static str,
    pub most_active_visits: u32,
    pub top_cuisine: &'static str,
    pub most_ordered: &'static str,
    pub highest_rated: &'static str,
    pub best_value: &'static str,
    pub friends: u32,
    pub group_meals: u32,
    pub recommendations: u32,
}

fn delta_phrase(delta: i32, unit_prefix: &str, noun: &str) -> String {
    match delta {
        0 => format!("Same {noun} as last period"),
        d if d > 0 => format!("{unit_prefix}{d} more than last period"),
        d => format!("{unit_prefix}{} fewer than last period", d.unsigned_abs()),
    }
}

impl StatsSnapshot {
    /// Returns the four summary tiles: label and value.
    #[must_use]
    pub fn summary(&self) -> [(&'static str, String); 4] {
        [
            ("Restaurants", self.restaurants.to_string()),
            ("Dishes", self.dishes.to_string()),
            ("Avg Rating", format!("{:.1}", self.average_rating)),
            ("Spent", format!("${}", self.spent_dollars)),
        ]
    }

    /// Returns the dining-habit cards.
    #[must_use]
    pub fn habits(&self) -> Vec<StatLine> {
        vec![
            StatLine {
                title: "Total Restaurants",
                value: self.restaurants.to_string(),
                subtitle: delta_phrase(self.restaurants_delta, "", "count"),
            },
            StatLine {
                title: "Money Spent",
                value: format!("${}", self.spent_dollars),
                subtitle: delta_phrase(self.spent_delta, "$", "spend"),
            },
            StatLine {
                title: "Time Spent Dining",
                value: self.time_dining.to_string(),
                subtitle: format!("Average {:.1}h per visit", self.hours_per_visit),
            },
            StatLine {
                title: "Most Active Day",
                value: self.most_active_day.to_string(),
                subtitle: format!("{} restaurant visits", self.most_active_visits),
            },
        ]
    }

    /// Returns the food-preference rows: label and value.
    #[must_use]
    pub fn preferences(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Top Cuisine", self.top_cuisine),
            ("Most Ordered", self.most_ordered),
            ("Highest Rated", self.highest_rated),
            ("Best Value", self.best_value),
        ]
    }

    /// Returns the social columns: label and value.
    #[must_use]
    pub fn social(&self) -> [(&'static str, u32); 3] {
        [
            ("Friends", self.friends),
            ("Group Meals", self.group_meals),
            ("Recommendations", self.recommendations),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rating: u8, price: Option<&str>, tags: &[&str]) -> DiningEntry {
        let entry = DiningEntry::new("1", "R", "D", "", rating, "L", "Today", tags);
        match price {
            Some(p) => entry.with_price(p),
            None => entry,
        }
    }

    mod summarize {
        use super::*;

        #[test]
        fn empty_diary_has_no_average() {
            let summary = summarize(&[]);
            assert_eq!(summary.entries, 0);
            assert_eq!(summary.average_rating, None);
            assert_eq!(summary.average_label(), "-");
            assert_eq!(summary.spent_label(), "$0.00");
        }

        #[test]
        fn averages_ratings_and_sums_prices() {
            let entries = vec![
                entry(4, Some("$15.99"), &[]),
                entry(5, Some("$22.50"), &[]),
                entry(3, None, &[]),
            ];
            let summary = summarize(&entries);
            assert_eq!(summary.entries, 3);
            assert_eq!(summary.average_label(), "4.0");
            assert_eq!(summary.spent_cents, 3849);
            assert_eq!(summary.spent_label(), "$38.49");
        }

        #[test]
        fn huge_prices_saturate_total() {
            let huge = "$184467440737095516";
            let entries = vec![entry(5, Some(huge), &[]), entry(5, Some(huge), &[])];
            let summary = summarize(&entries);
            assert_eq!(summary.spent_cents, u64::MAX);
            assert_eq!(summary.entries, 2);
        }

        #[test]
        fn top_tag_prefers_first_seen_on_ties() {
            let entries = vec![
                entry(4, None, &["Lunch", "Burger"]),
                entry(4, None, &["Dinner", "Burger"]),
                entry(4, None, &["Lunch"]),
                entry(4, None, &["Dinner"]),
            ];
            assert_eq!(summarize(&entries).top_tag.as_deref(), Some("Lunch"));
        }
    }

    mod prices {
        use super::*;

        #[test]
        fn parses_common_formats() {
            assert_eq!(parse_price_cents("$15.99"), Some(1599));
            assert_eq!(parse_price_cents("12"), Some(1200));
            assert_eq!(parse_price_cents("$1,200.5"), Some(120_050));
            assert_eq!(parse_price_cents(" $.75 "), Some(75));
        }

        #[test]
        fn rejects_garbage() {
            for price in ["", "$", "abc", "1.234", "1.x", "$-3"] {
                assert_eq!(parse_price_cents(price), None, "{price}");
            }
        }

        #[test]
        fn formats_cents() {
            assert_eq!(format_cents(5), "$0.05");
            assert_eq!(format_cents(42_600), "$426.00");
        }
    }

    mod snapshot {
        use super::*;
        use crate::core::filter::TimeFrame;
        use crate::core::sample;

        #[test]
        fn this_month_matches_dashboard_figures() {
            let snapshot = sample::stats_for(TimeFrame::ThisMonth);
            let summary = snapshot.summary();
            assert_eq!(summary[0], ("Restaurants", "21".to_string()));
            assert_eq!(summary[3], ("Spent", "$426".to_string()));
            assert_eq!(snapshot.habits()[0].subtitle, "5 more than last period");
            assert_eq!(snapshot.habits()[1].subtitle, "$86 more than last period");
        }

        #[test]
        fn negative_delta_reads_fewer() {
            assert_eq!(delta_phrase(-3, "", "count"), "3 fewer than last period");
            assert_eq!(delta_phrase(0, "$", "spend"), "Same spend as last period");
        }

        #[test]
        fn every_time_frame_has_a_snapshot() {
            for frame in TimeFrame::all() {
                assert!(sample::stats_for(frame).restaurants > 0);
            }
        }
    }
}
