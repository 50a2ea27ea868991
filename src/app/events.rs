//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use super::App;
use super::input::{edit_field, paste_into};
use super::state::{
    AppMode, DiscoverFocus, FormField, MenuAction, ProfileFocus, SavedFocus, StatusKind, Tab,
};
use crate::core::{Navigator, Route, TagOutcome, logged_at_label};

/// Moves a chip cursor within `0..len`.
fn move_cursor(cursor: &mut usize, delta: isize, len: usize) {
    *cursor = super::state::step(*cursor, delta, len);
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Returns `1..=9` for a digit key without modifiers.
fn digit(key: &KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.is_empty() => c
            .to_digit(10)
            .filter(|d| *d > 0)
            .and_then(|d| usize::try_from(d).ok()),
        _ => None,
    }
}

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// The text goes into the focused text field, if any: a discover or
    /// diary search box, or a text field of the log-food form.
    pub fn handle_paste(&mut self, text: &str) {
        match self.mode {
            AppMode::LogFood => {
                let Some(state) = self.log_food.as_mut() else {
                    return;
                };
                let field = state.focus;
                let multiline = field.is_multiline();
                let changed = state
                    .field_mut(field)
                    .is_some_and(|textarea| paste_into(textarea, text, multiline));
                if changed {
                    state.sync_field(field);
                }
            }
            AppMode::Browse => match self.tab {
                Tab::Discover if self.discover.focus == DiscoverFocus::Search => {
                    if paste_into(&mut self.discover.search, text, false) {
                        self.discover.sync_query();
                    }
                }
                Tab::Diary if self.diary.searching => {
                    if paste_into(&mut self.diary.search, text, false) {
                        self.diary.sync_query();
                    }
                }
                _ => {}
            },
        }
    }

    /// Handles a key event.
    ///
    /// Ctrl+C quits from anywhere. Otherwise the key goes to the log-food
    /// overlay when it is open, or to the active tab.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;

        if is_ctrl(&key, 'c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::LogFood => self.handle_log_food_key(key),
        }

        self.apply_navigation();
    }

    /// Returns whether a search box currently owns typed characters.
    fn is_typing(&self) -> bool {
        match self.tab {
            Tab::Discover => self.discover.focus == DiscoverFocus::Search,
            Tab::Diary => self.diary.searching,
            Tab::Saved | Tab::Stats | Tab::Profile => false,
        }
    }

    /// Key event priorities:
    /// 1. Tab switching (Tab/Shift+Tab always, digits when not typing)
    /// 2. Search box editing
    /// 3. Global shortcuts (`q`, `n`)
    /// 4. Screen keys
    fn handle_browse_key(&mut self, key: KeyEvent) {
        // Priority 1: Tab switching
        match key.code {
            KeyCode::Tab => {
                self.switch_tab(self.tab.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_tab(self.tab.prev());
                return;
            }
            _ => {}
        }

        // Priority 2: Search box editing
        if self.is_typing() {
            match self.tab {
                Tab::Discover => self.handle_discover_search_key(key),
                Tab::Diary => self.handle_diary_search_key(key),
                Tab::Saved | Tab::Stats | Tab::Profile => {}
            }
            return;
        }

        // Priority 3: Global shortcuts
        if let Some(index) = digit(&key).and_then(|d| Tab::from_index(d - 1)) {
            self.switch_tab(index);
            return;
        }
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if key.modifiers.is_empty() => {
                self.navigation.navigate_to(Route::LogFood);
                return;
            }
            _ => {}
        }

        // Priority 4: Screen keys
        match self.tab {
            Tab::Discover => self.handle_discover_key(key),
            Tab::Diary => self.handle_diary_key(key),
            Tab::Saved => self.handle_saved_key(key),
            Tab::Stats => self.handle_stats_key(key),
            Tab::Profile => self.handle_profile_key(key),
        }
    }

    // =========================================================================
    // Discover
    // =========================================================================

    fn handle_discover_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.discover.focus = DiscoverFocus::List,
            KeyCode::Down => self.discover.focus = DiscoverFocus::Cuisine,
            KeyCode::Up => {}
            _ => {
                if edit_field(&mut self.discover.search, key, false) {
                    self.discover.sync_query();
                }
            }
        }
    }

    fn handle_discover_key(&mut self, key: KeyEvent) {
        let discover = &mut self.discover;
        match (key.code, discover.focus) {
            (KeyCode::Char('/'), _) => discover.focus = DiscoverFocus::Search,
            (KeyCode::Up, DiscoverFocus::List) if discover.selected > 0 => {
                discover.move_selection(-1);
            }
            (KeyCode::Up, focus) => discover.focus = focus.up(),
            (KeyCode::Down, DiscoverFocus::List) => discover.move_selection(1),
            (KeyCode::Down, focus) => discover.focus = focus.down(),
            (KeyCode::Left, DiscoverFocus::Cuisine) => {
                let len = discover.cuisine_chips().len();
                move_cursor(&mut discover.cuisine_cursor, -1, len);
            }
            (KeyCode::Right, DiscoverFocus::Cuisine) => {
                let len = discover.cuisine_chips().len();
                move_cursor(&mut discover.cuisine_cursor, 1, len);
            }
            (KeyCode::Left, DiscoverFocus::Mood) => {
                let len = discover.mood_chips().len();
                move_cursor(&mut discover.mood_cursor, -1, len);
            }
            (KeyCode::Right, DiscoverFocus::Mood) => {
                let len = discover.mood_chips().len();
                move_cursor(&mut discover.mood_cursor, 1, len);
            }
            (KeyCode::Enter | KeyCode::Char(' '), DiscoverFocus::Cuisine) => {
                discover.press_cuisine();
            }
            (KeyCode::Enter | KeyCode::Char(' '), DiscoverFocus::Mood) => discover.press_mood(),
            (KeyCode::Enter, DiscoverFocus::List) => {
                if let Some(restaurant) = discover.selected_restaurant() {
                    let id = restaurant.id.clone();
                    self.navigation.navigate_to(Route::Restaurant { id });
                }
            }
            (KeyCode::Char('s'), DiscoverFocus::List) => self.save_selected_restaurant(),
            _ => {}
        }
    }

    /// Hands the selected discover restaurant to the store.
    ///
    /// The saved list is static sample data and does not change.
    fn save_selected_restaurant(&mut self) {
        let Some(restaurant) = self.discover.selected_restaurant().cloned() else {
            return;
        };
        match self.store.save_restaurant(&restaurant) {
            Ok(()) => {
                self.set_status(StatusKind::Success, format!("Saved {}", restaurant.name));
            }
            Err(e) => {
                warn!(error = %e, id = %restaurant.id, "restaurant was not saved");
                self.set_status(StatusKind::Error, format!("Could not save: {e}"));
            }
        }
    }

    // =========================================================================
    // Diary
    // =========================================================================

    fn handle_diary_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.diary.searching = false,
            KeyCode::Up => {}
            _ => {
                if edit_field(&mut self.diary.search, key, false) {
                    self.diary.sync_query();
                }
            }
        }
    }

    fn handle_diary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') => self.diary.searching = true,
            KeyCode::Up if self.diary.selected == 0 => self.diary.searching = true,
            KeyCode::Up => self.diary.move_selection(-1),
            KeyCode::Down => self.diary.move_selection(1),
            KeyCode::Enter => {
                if let Some(entry) = self.diary.selected_entry() {
                    let id = entry.id.clone();
                    self.navigation.navigate_to(Route::Entry { id });
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // Saved
    // =========================================================================

    fn handle_saved_key(&mut self, key: KeyEvent) {
        let saved = &mut self.saved;
        match (key.code, saved.focus) {
            (KeyCode::Up, SavedFocus::List) if saved.selected > 0 => saved.move_selection(-1),
            (KeyCode::Up, _) => saved.focus = SavedFocus::Filters,
            (KeyCode::Down, SavedFocus::Filters) => saved.focus = SavedFocus::List,
            (KeyCode::Down, SavedFocus::List) => saved.move_selection(1),
            (KeyCode::Left, SavedFocus::Filters) => {
                let len = saved.filter_chips().len();
                move_cursor(&mut saved.filter_cursor, -1, len);
            }
            (KeyCode::Right, SavedFocus::Filters) => {
                let len = saved.filter_chips().len();
                move_cursor(&mut saved.filter_cursor, 1, len);
            }
            (KeyCode::Enter | KeyCode::Char(' '), SavedFocus::Filters) => saved.press_filter(),
            (KeyCode::Enter, SavedFocus::List) => {
                if let Some(place) = saved.selected_place() {
                    let id = place.restaurant.id.clone();
                    self.navigation.navigate_to(Route::Restaurant { id });
                }
            }
            (KeyCode::Char('s') | KeyCode::Delete, SavedFocus::List) => {
                self.remove_selected_saved();
            }
            _ => {}
        }
    }

    /// Asks the store to forget the selected place; the list itself is static.
    fn remove_selected_saved(&mut self) {
        let Some(place) = self.saved.selected_place().cloned() else {
            return;
        };
        match self.store.remove_saved(&place.restaurant) {
            Ok(()) => {
                self.set_status(
                    StatusKind::Success,
                    format!("Removed {}", place.restaurant.name),
                );
            }
            Err(e) => {
                warn!(error = %e, id = %place.restaurant.id, "saved place was not removed");
                self.set_status(StatusKind::Error, format!("Could not remove: {e}"));
            }
        }
    }

    // =========================================================================
    // Stats
    // =========================================================================

    fn handle_stats_key(&mut self, key: KeyEvent) {
        let stats = &mut self.stats;
        let len = stats.frame_chips().len();
        match key.code {
            KeyCode::Left => move_cursor(&mut stats.cursor, -1, len),
            KeyCode::Right => move_cursor(&mut stats.cursor, 1, len),
            KeyCode::Enter | KeyCode::Char(' ') => stats.press_frame(),
            _ => {}
        }
    }

    // =========================================================================
    // Profile
    // =========================================================================

    fn handle_profile_key(&mut self, key: KeyEvent) {
        match (key.code, self.profile.focus) {
            (KeyCode::Up, _) => self.profile.move_up(),
            (KeyCode::Down, _) => self.profile.move_down(),
            (KeyCode::Enter | KeyCode::Char(' '), ProfileFocus::Menu) => self.activate_menu_item(),
            (KeyCode::Char(' '), ProfileFocus::Friends) => {
                if let Some(selected) = self.profile.toggle_friend() {
                    debug!(selected, "toggle friend");
                }
            }
            (KeyCode::Enter, ProfileFocus::Friends) => {
                if let Some(friend) = self.profile.focused_friend() {
                    let id = friend.id.clone();
                    self.navigation.navigate_to(Route::Friend { id });
                }
            }
            _ => {}
        }
    }

    fn activate_menu_item(&mut self) {
        let item = self.profile.current_menu_item();
        match item.action() {
            MenuAction::Open(route) => self.navigation.navigate_to(route),
            MenuAction::FocusFriends => {
                if !self.profile.friends.is_empty() {
                    self.profile.focus = ProfileFocus::Friends;
                    self.profile.friend_cursor = 0;
                }
            }
            MenuAction::Unavailable => {
                debug!(item = item.title(), "menu item unavailable");
                self.set_status(
                    StatusKind::Info,
                    format!("{} is not available yet", item.title()),
                );
            }
        }
    }

    // =========================================================================
    // Log Food
    // =========================================================================

    /// Key event priorities:
    /// 1. Close (Esc) and save (Ctrl+S)
    /// 2. Field focus movement
    /// 3. Keys of the focused field
    fn handle_log_food_key(&mut self, key: KeyEvent) {
        // Priority 1: Close and save
        if key.code == KeyCode::Esc {
            if let Some(state) = self.log_food.as_mut() {
                state.form.close(&mut self.navigation);
            }
            return;
        }
        if is_ctrl(&key, 's') {
            self.save_food_entry();
            return;
        }

        let Some(state) = self.log_food.as_mut() else {
            return;
        };

        // Priority 2: Field focus movement
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                state.focus = state.focus.next();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.focus = state.focus.prev();
                return;
            }
            _ => {}
        }

        // Priority 3: Focused field
        match state.focus {
            FormField::Rating => {
                if let Some(n) = digit(&key) {
                    state.press_rating(n - 1);
                    return;
                }
                match key.code {
                    KeyCode::Left => state.move_rating_cursor(-1),
                    KeyCode::Right => state.move_rating_cursor(1),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        state.press_rating(state.rating_cursor);
                    }
                    _ => {}
                }
            }
            FormField::Photo => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    state.form.take_photo();
                    self.set_status(StatusKind::Info, "Photo added");
                }
            }
            FormField::Save => {
                if key.code == KeyCode::Enter {
                    self.save_food_entry();
                }
            }
            FormField::Tags => self.handle_tag_key(key),
            field => {
                let multiline = field.is_multiline();
                let changed = state
                    .field_mut(field)
                    .is_some_and(|textarea| edit_field(textarea, key, multiline));
                if changed {
                    state.sync_field(field);
                }
            }
        }
    }

    fn handle_tag_key(&mut self, key: KeyEvent) {
        let Some(state) = self.log_food.as_mut() else {
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left if ctrl => state.move_tag_cursor(-1),
            KeyCode::Right if ctrl => state.move_tag_cursor(1),
            KeyCode::Char('x') if ctrl => {
                state.remove_selected_tag();
            }
            KeyCode::Enter => {
                if let Some(outcome) = state.submit_tag() {
                    debug!(?outcome, "tag submitted");
                    if outcome == TagOutcome::Duplicate {
                        self.set_status(StatusKind::Info, "Tag already added");
                    }
                }
            }
            _ => {
                if edit_field(&mut state.tag_draft, key, false) {
                    state.sync_field(FormField::Tags);
                }
            }
        }
    }

    /// Submits the log-food form to the store.
    ///
    /// The diary shows static sample entries; a saved entry only reaches the
    /// store.
    fn save_food_entry(&mut self) {
        let Some(state) = self.log_food.as_mut() else {
            return;
        };
        for field in FormField::all() {
            state.sync_field(field);
        }

        let logged_at = logged_at_label(&chrono::Local::now());
        match state
            .form
            .save(self.store.as_mut(), &mut self.navigation, &logged_at)
        {
            Ok(payload) => {
                let name = if payload.food_name.is_empty() {
                    "entry".to_string()
                } else {
                    payload.food_name
                };
                self.set_status(StatusKind::Success, format!("Logged {name} to your diary"));
            }
            Err(e) => {
                state.error = Some(e.to_string());
                self.set_status(StatusKind::Error, e.to_string());
            }
        }
    }
}
