//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `helpers` - Shared test utilities
//! - `navigation` - Tab switching, overlay open/close, routes and quitting
//! - `discover` - Discover chips, search and saving places
//! - `screens` - Diary, saved, stats and profile key handling
//! - `log_food` - Food-logging form flow
//! - `render` - Rendering each screen to a `TestBackend`
//! - `settings` - Settings loading and saving through the app

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod settings;
