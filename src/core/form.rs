//! Food-logging form.
//!
//! The form aggregates independently owned field state into one payload
//! handed to the persistence collaborator on save. Field editors enforce
//! their own rules (tag dedup, rating bounds); the form adds no validation
//! of its own.
//!
//! ```text
//! Empty ──edit──▶ Editing ──save──▶ Submitted
//!   │                │
//!   └─────close──────┴──────────────▶ Dismissed
//! ```

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::collab::{EntryStore, Navigator, StoreError};
use super::model::MAX_ENTRY_RATING;
use super::rating::{RatingMode, RatingSelector};
use super::tags::{TagEditor, TagOutcome};

/// Photo used when the user "takes" a photo or saves without one.
pub const SAMPLE_PHOTO_REF: &str = "https://images.pexels.com/photos/1640774/pexels-photo-1640774.jpeg";

/// Lifecycle of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Empty,
    Editing,
    Submitted,
    Dismissed,
}

impl FormPhase {
    /// Returns whether field edits are still accepted.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Empty | Self::Editing)
    }
}

/// Payload handed to the persistence collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogPayload {
    pub food_name: String,
    pub restaurant_name: String,
    pub rating: u8,
    pub price: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub image_ref: String,
    pub logged_at: String,
}

/// Errors from submitting the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("form was already submitted or dismissed")]
    Closed,
    #[error("could not save entry: {0}")]
    Store(#[from] StoreError),
}

/// Field state of the food-logging form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodLogForm {
    food_name: String,
    restaurant_name: String,
    rating: RatingSelector,
    price: String,
    notes: String,
    tags: TagEditor,
    image_ref: Option<String>,
    phase: FormPhase,
}

impl Default for FoodLogForm {
    fn default() -> Self {
        Self::new(super::rating::DEFAULT_MAX_RATING)
    }
}

impl FoodLogForm {
    /// Creates an empty form whose rating runs up to `max_rating`, kept
    /// within `1..=MAX_ENTRY_RATING` so every payload fits a diary entry.
    #[must_use]
    pub fn new(max_rating: u8) -> Self {
        let max_rating = max_rating.clamp(1, MAX_ENTRY_RATING);
        Self {
            food_name: String::new(),
            restaurant_name: String::new(),
            rating: RatingSelector::new(0, max_rating, RatingMode::Interactive),
            price: String::new(),
            notes: String::new(),
            tags: TagEditor::new(),
            image_ref: None,
            phase: FormPhase::Empty,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn food_name(&self) -> &str {
        &self.food_name
    }

    #[must_use]
    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    #[must_use]
    pub const fn rating(&self) -> &RatingSelector {
        &self.rating
    }

    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub const fn tags(&self) -> &TagEditor {
        &self.tags
    }

    #[must_use]
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    /// Runs `edit` if the form is still open and marks it as being edited.
    fn edit<R>(&mut self, edit: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.phase.is_open() {
            debug!(phase = ?self.phase, "ignoring edit on closed form");
            return None;
        }
        let result = edit(self);
        self.phase = FormPhase::Editing;
        Some(result)
    }

    pub fn set_food_name(&mut self, value: &str) {
        self.edit(|f| f.food_name = value.to_string());
    }

    pub fn set_restaurant_name(&mut self, value: &str) {
        self.edit(|f| f.restaurant_name = value.to_string());
    }

    pub fn set_price(&mut self, value: &str) {
        self.edit(|f| f.price = value.to_string());
    }

    pub fn set_notes(&mut self, value: &str) {
        self.edit(|f| f.notes = value.to_string());
    }

    pub fn set_tag_draft(&mut self, value: &str) {
        self.edit(|f| f.tags.set_draft(value));
    }

    /// Confirms the tag draft. Returns `None` once the form is closed.
    pub fn submit_tag(&mut self) -> Option<TagOutcome> {
        self.edit(|f| f.tags.submit())
    }

    /// Removes a tag. Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.edit(|f| f.tags.remove_tag(tag)).unwrap_or(false)
    }

    /// Presses the rating icon at `index`; returns the new rating if accepted.
    pub fn press_rating(&mut self, index: usize) -> Option<u8> {
        if !self.phase.is_open() {
            return None;
        }
        let rating = self.rating.press(index)?;
        self.phase = FormPhase::Editing;
        Some(rating)
    }

    /// Attaches the sample photo.
    pub fn take_photo(&mut self) {
        self.edit(|f| f.image_ref = Some(SAMPLE_PHOTO_REF.to_string()));
    }

    /// Assembles the current field values into a payload.
    #[must_use]
    pub fn payload(&self, logged_at: &str) -> FoodLogPayload {
        FoodLogPayload {
            food_name: self.food_name.clone(),
            restaurant_name: self.restaurant_name.clone(),
            rating: self.rating.rating(),
            price: self.price.clone(),
            notes: self.notes.clone(),
            tags: self.tags.tags().to_vec(),
            image_ref: self
                .image_ref
                .clone()
                .unwrap_or_else(|| SAMPLE_PHOTO_REF.to_string()),
            logged_at: logged_at.to_string(),
        }
    }

    /// Hands the payload to `store` and dismisses the form.
    ///
    /// On success the form is `Submitted` and `navigator.dismiss()` has been
    /// called exactly once. A store failure keeps every field intact.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Closed`] if the form was already submitted or
    /// dismissed, or [`FormError::Store`] if the store rejected the payload.
    pub fn save(
        &mut self,
        store: &mut dyn EntryStore,
        navigator: &mut dyn Navigator,
        logged_at: &str,
    ) -> Result<FoodLogPayload, FormError> {
        if !self.phase.is_open() {
            return Err(FormError::Closed);
        }

        let payload = self.payload(logged_at);
        if let Err(e) = store.save_entry(&payload) {
            warn!(error = %e, "food entry was not saved");
            self.phase = FormPhase::Editing;
            return Err(e.into());
        }

        self.phase = FormPhase::Submitted;
        navigator.dismiss();
        Ok(payload)
    }

    /// Discards all field state and dismisses the form.
    ///
    /// Does nothing once the form has been submitted or dismissed.
    pub fn close(&mut self, navigator: &mut dyn Navigator) {
        if !self.phase.is_open() {
            return;
        }
        let max_rating = self.rating.max_rating();
        *self = Self::new(max_rating);
        self.phase = FormPhase::Dismissed;
        navigator.dismiss();
    }
}

/// Formats the time an entry was logged the way diary dates read.
#[must_use]
pub fn logged_at_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("Today, %-I:%M %p").to_string()
}
