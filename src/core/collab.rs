//! Collaborator interfaces the screens call out to.
//!
//! The screens never persist, fetch, or navigate on their own. They call
//! these traits, and the host supplies implementations. The shipped
//! implementations only log intent.

use thiserror::Error;
use tracing::info;

use super::form::FoodLogPayload;
use super::model::Restaurant;

/// Destinations the navigation host understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Discover,
    Diary,
    Saved,
    Stats,
    Profile,
    LogFood,
    Restaurant { id: String },
    Entry { id: String },
    Friend { id: String },
}

impl Route {
    /// Returns the path-like name used in logs.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Discover => "/".to_string(),
            Self::Diary => "/diary".to_string(),
            Self::Saved => "/saved".to_string(),
            Self::Stats => "/stats".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::LogFood => "/log-food".to_string(),
            Self::Restaurant { id } => format!("/restaurant/{id}"),
            Self::Entry { id } => format!("/entry/{id}"),
            Self::Friend { id } => format!("/friend/{id}"),
        }
    }
}

/// Navigation host. Screens ask it to move; they never own the stack.
pub trait Navigator {
    fn navigate_to(&mut self, route: Route);
    fn dismiss(&mut self);
}

/// Errors reported by a persistence collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store rejected the payload: {0}")]
    Rejected(String),
    #[error("store is unavailable")]
    Unavailable,
}

/// Persistence collaborator for diary entries and saved places.
pub trait EntryStore {
    /// Accepts a new diary entry.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the payload was not accepted.
    fn save_entry(&mut self, payload: &FoodLogPayload) -> Result<(), StoreError>;

    /// Bookmarks a restaurant.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the bookmark was not accepted.
    fn save_restaurant(&mut self, restaurant: &Restaurant) -> Result<(), StoreError>;

    /// Removes a restaurant from the saved list.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the removal was not accepted.
    fn remove_saved(&mut self, restaurant: &Restaurant) -> Result<(), StoreError>;
}

/// Store that records nothing and logs every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingStore;

impl EntryStore for LoggingStore {
    fn save_entry(&mut self, payload: &FoodLogPayload) -> Result<(), StoreError> {
        let json = serde_json::to_string(payload).map_err(|e| StoreError::Rejected(e.to_string()))?;
        info!(payload = %json, "food entry saved");
        Ok(())
    }

    fn save_restaurant(&mut self, restaurant: &Restaurant) -> Result<(), StoreError> {
        info!(id = %restaurant.id, name = %restaurant.name, "save restaurant");
        Ok(())
    }

    fn remove_saved(&mut self, restaurant: &Restaurant) -> Result<(), StoreError> {
        info!(id = %restaurant.id, name = %restaurant.name, "remove restaurant");
        Ok(())
    }
}

/// What a card shows in place of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// A remote image; the terminal shows its host.
    Remote { host: String },
    /// Missing or broken reference.
    Placeholder,
}

/// Resolves opaque image references. Never fails; broken refs become placeholders.
pub trait ImageResolver {
    fn resolve(&self, image_ref: &str) -> ImageSlot;
}

/// Resolves `http(s)://host/...` references to their host name.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostImageResolver;

impl ImageResolver for HostImageResolver {
    fn resolve(&self, image_ref: &str) -> ImageSlot {
        let rest = image_ref
            .strip_prefix("https://")
            .or_else(|| image_ref.strip_prefix("http://"));
        let Some(rest) = rest else {
            return ImageSlot::Placeholder;
        };
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        let host = host.strip_prefix("images.").unwrap_or(host);
        if host.is_empty() || host.contains(char::is_whitespace) {
            ImageSlot::Placeholder
        } else {
            ImageSlot::Remote {
                host: host.to_string(),
            }
        }
    }
}
