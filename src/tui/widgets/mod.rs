//! Custom TUI widgets.

pub mod chip_strip;
pub mod entry_card;
pub mod friend_row;
pub mod rating;
pub mod restaurant_card;
pub mod stat_card;

pub use chip_strip::{ChipStrip, chip_text, visible_window};
pub use entry_card::{ENTRY_CARD_HEIGHT, EntryCard};
pub use friend_row::FriendRow;
pub use rating::{RatingWidget, rating_spans};
pub use restaurant_card::{RESTAURANT_CARD_HEIGHT, RestaurantCard};
pub use stat_card::{STAT_CARD_HEIGHT, StatCard};
