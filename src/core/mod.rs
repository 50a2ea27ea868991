//! Interaction model shared by the screens.
//!
//! Everything here is plain state with synchronous transitions, so it can be
//! exercised without a terminal.

pub mod chips;
pub mod collab;
pub mod filter;
pub mod form;
pub mod model;
pub mod mood;
pub mod rating;
pub mod sample;
pub mod stats;
pub mod tags;

pub use chips::{Chip, ChipPress, ChipSet, SingleSelect};
pub use collab::{
    EntryStore, HostImageResolver, ImageResolver, ImageSlot, LoggingStore, Navigator, Route,
    StoreError,
};
pub use filter::{
    ALL_CUISINES, CUISINE_OPTIONS, DiscoverFilters, SavedFilter, TimeFrame, filter_entries,
    filter_restaurants, upcoming_visits,
};
pub use form::{FoodLogForm, FoodLogPayload, FormError, FormPhase, logged_at_label};
pub use model::{DiningEntry, Friend, PriceLevel, Restaurant, SavedRestaurant, UserProfile};
pub use mood::{MoodConfig, MoodType, Tone, ToneSet, toggle_mood};
pub use rating::{DEFAULT_MAX_RATING, RatingMode, RatingSelector, RatingSize};
pub use stats::{DiarySummary, StatLine, StatsSnapshot, summarize};
pub use tags::{TagEditor, TagOutcome};
