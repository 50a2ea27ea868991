//! Main application state and logic.
//!
//! This module contains the core App struct and its implementation,
//! organized into submodules:
//! - `input` - Text field helpers
//! - `layout` - Screen split and list scrolling
//! - `render` - UI rendering
//! - `state` - Per-screen state holders
//! - `events` - Key and paste handling
//!
//! ## Application Modes
//!
//! - **`Browse`**: Tabbed screens (Discover, Diary, Saved, Stats, Profile).
//! - **`LogFood`**: Modal overlay with the food-logging form, opened with `n`.
//!
//! ## Navigation
//!
//! Screens never switch themselves. They ask the [`NavigationHost`], which
//! records the request; the app applies recorded requests after every event.

pub mod events;
mod input;
mod layout;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{ScreenLayout, calculate_screen_layout, centered_rect, scroll_offset};

use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::core::{
    EntryStore, HostImageResolver, ImageResolver, ImageSlot, LoggingStore, Navigator, Route,
    sample,
};
use crate::fs::{PersistedSettings, TastebudPaths};
use crate::tui::Theme;

pub use self::state::{
    AppMode, DiaryState, DiscoverFocus, DiscoverState, FormField, LogFoodState, MenuAction,
    Preferences, ProfileFocus, ProfileMenuItem, ProfileState, SavedFocus, SavedState, StatsState,
    StatusKind, StatusMessage, Tab,
};

/// A request recorded by the [`NavigationHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Navigate(Route),
    Dismiss,
}

/// Navigator handed to screens and forms.
///
/// Requests are queued and applied by [`App`] once the handler that made
/// them returns.
#[derive(Debug, Default)]
pub struct NavigationHost {
    pending: Vec<NavCommand>,
}

impl NavigationHost {
    /// Takes all queued requests, oldest first.
    pub fn drain(&mut self) -> Vec<NavCommand> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending(&self) -> &[NavCommand] {
        &self.pending
    }
}

impl Navigator for NavigationHost {
    fn navigate_to(&mut self, route: Route) {
        debug!(path = %route.path(), "navigation requested");
        self.pending.push(NavCommand::Navigate(route));
    }

    fn dismiss(&mut self) {
        debug!("dismiss requested");
        self.pending.push(NavCommand::Dismiss);
    }
}

/// Main application state.
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    /// All tastebud-related filesystem paths.
    pub(crate) paths: TastebudPaths,
    /// Theme for styling.
    pub(crate) theme: Theme,
    pub(crate) prefs: Preferences,
    /// Current application mode.
    pub(crate) mode: AppMode,
    /// Active tab.
    pub(crate) tab: Tab,
    /// Should quit flag.
    should_quit: bool,

    // =========================================================================
    // Screen States
    // =========================================================================
    pub(crate) discover: DiscoverState,
    pub(crate) diary: DiaryState,
    pub(crate) saved: SavedState,
    pub(crate) stats: StatsState,
    pub(crate) profile: ProfileState,
    /// Food-logging form, present while the overlay is open.
    pub(crate) log_food: Option<LogFoodState>,

    // =========================================================================
    // Collaborators
    // =========================================================================
    pub(crate) navigation: NavigationHost,
    pub(crate) store: Box<dyn EntryStore>,
    pub(crate) images: Box<dyn ImageResolver>,

    /// Message shown on the status line until the next key press.
    pub(crate) status: Option<StatusMessage>,
    /// Dynamic layout dimensions.
    pub(crate) layout: ScreenLayout,
}

impl App {
    /// Creates the application with settings loaded from `paths`.
    ///
    /// A settings file that cannot be read is logged and replaced with
    /// defaults. `start_tab` overrides the persisted start tab.
    #[must_use]
    pub fn new(paths: TastebudPaths, start_tab: Option<Tab>) -> Self {
        let mut prefs = Preferences::default();
        match paths.load_settings() {
            Ok(persisted) => persisted.apply_to(&mut prefs),
            Err(e) => warn!(error = %e, "failed to load settings, using defaults"),
        }
        if let Some(tab) = start_tab {
            prefs.start_tab = tab;
        }
        Self::with_preferences(paths, prefs)
    }

    /// Creates the application from resolved preferences with the logging
    /// collaborators.
    #[must_use]
    pub fn with_preferences(paths: TastebudPaths, prefs: Preferences) -> Self {
        Self {
            paths,
            theme: Theme::default(),
            mode: AppMode::Browse,
            tab: prefs.start_tab,
            should_quit: false,
            discover: DiscoverState::new(sample::restaurants()),
            diary: DiaryState::new(sample::diary_entries()),
            saved: SavedState::new(sample::saved_restaurants()),
            stats: StatsState::default(),
            profile: ProfileState::new(sample::profile(&prefs.display_name), sample::friends()),
            log_food: None,
            navigation: NavigationHost::default(),
            store: Box::new(LoggingStore),
            images: Box::new(HostImageResolver),
            status: None,
            layout: ScreenLayout::default(),
            prefs,
        }
    }

    /// Replaces the persistence collaborator.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn EntryStore>) -> Self {
        self.store = store;
        self
    }

    /// Replaces the image collaborator.
    #[must_use]
    pub fn with_images(mut self, images: Box<dyn ImageResolver>) -> Self {
        self.images = images;
        self
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub const fn mode(&self) -> AppMode {
        self.mode
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Calculates and caches the layout for the terminal area.
    ///
    /// Should be called once per frame before rendering.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        self.layout = calculate_screen_layout(terminal_area);
    }

    /// Remembers the current tab as the start tab and writes the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn save_settings_on_exit(&mut self) -> anyhow::Result<()> {
        self.prefs.start_tab = self.tab;
        self.paths.save_settings(&PersistedSettings::from(&self.prefs))
    }

    pub(crate) fn image_for(&self, image_ref: &str) -> ImageSlot {
        self.images.resolve(image_ref)
    }

    pub(crate) fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    pub(crate) fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            debug!(tab = tab.name(), "switch tab");
        }
        self.tab = tab;
    }

    /// Applies the requests queued on the navigation host.
    pub(crate) fn apply_navigation(&mut self) {
        for command in self.navigation.drain() {
            match command {
                NavCommand::Navigate(route) => self.open_route(route),
                NavCommand::Dismiss => self.close_log_food(),
            }
        }
    }

    fn open_route(&mut self, route: Route) {
        match route {
            Route::LogFood => self.open_log_food(),
            Route::Restaurant { .. } | Route::Entry { .. } | Route::Friend { .. } => {
                info!(path = %route.path(), "no screen for route");
                self.set_status(
                    StatusKind::Info,
                    format!("{} has no detail screen yet", route.path()),
                );
            }
            tab_route => {
                if let Some(tab) = Tab::from_route(&tab_route) {
                    self.close_log_food();
                    self.switch_tab(tab);
                }
            }
        }
    }

    fn open_log_food(&mut self) {
        if self.log_food.is_none() {
            self.log_food = Some(LogFoodState::new(self.prefs.max_rating));
        }
        self.mode = AppMode::LogFood;
    }

    fn close_log_food(&mut self) {
        self.log_food = None;
        self.mode = AppMode::Browse;
    }
}
