//! Application state structures.
//!
//! One state holder per screen, each owned by the [`App`](super::App):
//!
//! - **`DiscoverState`**: cuisine/mood chips, search box, restaurant list
//! - **`DiaryState`**: diary search and entry list
//! - **`SavedState`**: saved-filter chips, upcoming visits, saved list
//! - **`StatsState`**: time-frame chips
//! - **`ProfileState`**: menu and friend selection
//! - **`LogFoodState`**: the food-logging form overlay
//!
//! Displayed subsets are always re-derived from the static source through
//! the pure filters in [`crate::core::filter`]; the holders only keep the
//! filter inputs and keyboard focus.

use tui_textarea::TextArea;

use super::input::{set_text, text_field, text_of};
use crate::core::rating::DEFAULT_MAX_RATING;
use crate::core::{
    Chip, ChipPress, ChipSet, DiarySummary, DiningEntry, DiscoverFilters, FoodLogForm, Friend,
    MoodType, Restaurant, Route, SavedFilter, SavedRestaurant, SingleSelect, StatsSnapshot,
    TagOutcome, TimeFrame, UserProfile, filter_entries, filter_restaurants, sample, summarize,
    toggle_mood, upcoming_visits,
};

/// Top-level screens, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Discover,
    Diary,
    Saved,
    Stats,
    Profile,
}

impl Tab {
    /// Returns all tabs in display order.
    #[must_use]
    pub const fn all() -> [Tab; 5] {
        [
            Tab::Discover,
            Tab::Diary,
            Tab::Saved,
            Tab::Stats,
            Tab::Profile,
        ]
    }

    /// Returns the tab-bar label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Discover => "Discover",
            Self::Diary => "Diary",
            Self::Saved => "Saved",
            Self::Stats => "Stats",
            Self::Profile => "Profile",
        }
    }

    /// Returns the lowercase name used in settings and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Discover => "discover",
            Self::Diary => "diary",
            Self::Saved => "saved",
            Self::Stats => "stats",
            Self::Profile => "profile",
        }
    }

    /// Parses a tab name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Discover => 0,
            Self::Diary => 1,
            Self::Saved => 2,
            Self::Stats => 3,
            Self::Profile => 4,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Cycles to the next tab.
    #[must_use]
    pub fn next(self) -> Self {
        Self::all()[(self.index() + 1) % 5]
    }

    /// Cycles to the previous tab.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::all()[(self.index() + 4) % 5]
    }

    /// Returns the navigation route that opens this tab.
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Discover => Route::Discover,
            Self::Diary => Route::Diary,
            Self::Saved => Route::Saved,
            Self::Stats => Route::Stats,
            Self::Profile => Route::Profile,
        }
    }

    /// Returns the tab a route opens, if it is a tab route.
    #[must_use]
    pub const fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Discover => Some(Self::Discover),
            Route::Diary => Some(Self::Diary),
            Route::Saved => Some(Self::Saved),
            Route::Stats => Some(Self::Stats),
            Route::Profile => Some(Self::Profile),
            Route::LogFood
            | Route::Restaurant { .. }
            | Route::Entry { .. }
            | Route::Friend { .. } => None,
        }
    }
}

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Tabbed screens.
    #[default]
    Browse,
    /// Food-logging form shown over the current tab.
    LogFood,
}

/// User preferences resolved from settings and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub start_tab: Tab,
    /// Shown in the discover header.
    pub location: String,
    pub display_name: String,
    /// Number of rating icons on the log-food form.
    pub max_rating: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            start_tab: Tab::Discover,
            location: "New York, NY".to_string(),
            display_name: "Foodie".to_string(),
            max_rating: DEFAULT_MAX_RATING,
        }
    }
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line message shown above the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Moves `index` by `delta` within `0..len`, saturating at both ends.
#[must_use]
pub fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

// =============================================================================
// Discover
// =============================================================================

/// Keyboard focus rows on the discover screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoverFocus {
    Search,
    Cuisine,
    Mood,
    #[default]
    List,
}

impl DiscoverFocus {
    #[must_use]
    pub const fn up(self) -> Self {
        match self {
            Self::Search | Self::Cuisine => Self::Search,
            Self::Mood => Self::Cuisine,
            Self::List => Self::Mood,
        }
    }

    #[must_use]
    pub const fn down(self) -> Self {
        match self {
            Self::Search => Self::Cuisine,
            Self::Cuisine => Self::Mood,
            Self::Mood | Self::List => Self::List,
        }
    }
}

pub struct DiscoverState {
    /// Static source; never mutated by filtering.
    pub restaurants: Vec<Restaurant>,
    pub filters: DiscoverFilters,
    pub search: TextArea<'static>,
    pub focus: DiscoverFocus,
    pub cuisine_cursor: usize,
    pub mood_cursor: usize,
    /// Index into [`DiscoverState::visible`].
    pub selected: usize,
}

impl DiscoverState {
    #[must_use]
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            filters: DiscoverFilters::default(),
            search: text_field("Search restaurants or cuisines..."),
            focus: DiscoverFocus::default(),
            cuisine_cursor: 0,
            mood_cursor: 0,
            selected: 0,
        }
    }

    /// Restaurants passing every active filter, in source order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Restaurant> {
        filter_restaurants(&self.restaurants, &self.filters)
    }

    /// Recommended places among the visible ones.
    #[must_use]
    pub fn for_you(&self) -> Vec<&Restaurant> {
        self.visible()
            .into_iter()
            .filter(|r| r.is_recommended)
            .collect()
    }

    /// Newly opened places among the visible ones.
    #[must_use]
    pub fn new_places(&self) -> Vec<&Restaurant> {
        self.visible().into_iter().filter(|r| r.is_new).collect()
    }

    #[must_use]
    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        self.visible().get(self.selected).copied()
    }

    #[must_use]
    pub fn cuisine_chips(&self) -> ChipSet {
        self.filters.cuisine.chips(Clone::clone)
    }

    #[must_use]
    pub fn mood_chips(&self) -> ChipSet {
        ChipSet::new(
            MoodType::all()
                .iter()
                .map(|&m| Chip::new(m.label(), self.filters.mood == Some(m)))
                .collect(),
        )
    }

    /// Presses the cuisine chip under the cursor.
    pub fn press_cuisine(&mut self) {
        if let Some(ChipPress::Pressed(index)) = self.cuisine_chips().press(self.cuisine_cursor) {
            self.filters.cuisine.select(index);
            self.selected = 0;
        }
    }

    /// Presses the mood chip under the cursor, toggling it.
    pub fn press_mood(&mut self) {
        if let Some(ChipPress::Pressed(index)) = self.mood_chips().press(self.mood_cursor) {
            let pressed = MoodType::all()[index];
            self.filters.mood = toggle_mood(self.filters.mood, pressed);
            self.selected = 0;
        }
    }

    /// Copies the search box into the query filter.
    pub fn sync_query(&mut self) {
        self.filters.query = text_of(&self.search);
        self.selected = 0;
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.selected = step(self.selected, delta, self.visible().len());
    }
}

// =============================================================================
// Diary
// =============================================================================

pub struct DiaryState {
    /// Most recent first.
    pub entries: Vec<DiningEntry>,
    pub search: TextArea<'static>,
    pub query: String,
    /// Whether the search box holds focus.
    pub searching: bool,
    pub selected: usize,
}

impl DiaryState {
    #[must_use]
    pub fn new(entries: Vec<DiningEntry>) -> Self {
        Self {
            entries,
            search: text_field("Search dishes, places or tags..."),
            query: String::new(),
            searching: false,
            selected: 0,
        }
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&DiningEntry> {
        filter_entries(&self.entries, &self.query)
    }

    /// Figures for the entries currently shown.
    #[must_use]
    pub fn summary(&self) -> DiarySummary {
        summarize(self.visible())
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&DiningEntry> {
        self.visible().get(self.selected).copied()
    }

    pub fn sync_query(&mut self) {
        self.query = text_of(&self.search);
        self.selected = 0;
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.selected = step(self.selected, delta, self.visible().len());
    }
}

// =============================================================================
// Saved
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavedFocus {
    Filters,
    #[default]
    List,
}

pub struct SavedState {
    pub places: Vec<SavedRestaurant>,
    pub filter: SingleSelect<SavedFilter>,
    pub filter_cursor: usize,
    pub focus: SavedFocus,
    /// Index into `places`.
    pub selected: usize,
}

impl SavedState {
    #[must_use]
    pub fn new(places: Vec<SavedRestaurant>) -> Self {
        Self {
            places,
            filter: SingleSelect::new(SavedFilter::all().to_vec()),
            filter_cursor: 0,
            focus: SavedFocus::default(),
            selected: 0,
        }
    }

    #[must_use]
    pub fn current_filter(&self) -> SavedFilter {
        self.filter.current().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn filter_chips(&self) -> ChipSet {
        self.filter.chips(|f| f.label().to_string())
    }

    pub fn press_filter(&mut self) {
        if let Some(ChipPress::Pressed(index)) = self.filter_chips().press(self.filter_cursor) {
            self.filter.select(index);
        }
    }

    /// Places with a planned visit, unless the filter hides the section.
    #[must_use]
    pub fn upcoming(&self) -> Vec<&SavedRestaurant> {
        upcoming_visits(&self.places, self.current_filter())
    }

    #[must_use]
    pub fn selected_place(&self) -> Option<&SavedRestaurant> {
        self.places.get(self.selected)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.places.iter().any(|p| p.restaurant.id == id)
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.selected = step(self.selected, delta, self.places.len());
    }
}

// =============================================================================
// Stats
// =============================================================================

pub struct StatsState {
    pub frame: SingleSelect<TimeFrame>,
    pub cursor: usize,
}

impl Default for StatsState {
    fn default() -> Self {
        Self {
            frame: SingleSelect::new(TimeFrame::all().to_vec()),
            cursor: 0,
        }
    }
}

impl StatsState {
    #[must_use]
    pub fn current_frame(&self) -> TimeFrame {
        self.frame.current().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn frame_chips(&self) -> ChipSet {
        self.frame.chips(|t| t.label().to_string())
    }

    pub fn press_frame(&mut self) {
        if let Some(ChipPress::Pressed(index)) = self.frame_chips().press(self.cursor) {
            self.frame.select(index);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        sample::stats_for(self.current_frame())
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Rows of the profile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuItem {
    FoodJourney,
    SavedPlaces,
    Friends,
    GiftCards,
    Calendar,
    Offers,
}

/// What activating a profile menu row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Open(Route),
    FocusFriends,
    /// No screen exists for this row yet.
    Unavailable,
}

impl ProfileMenuItem {
    #[must_use]
    pub const fn all() -> [ProfileMenuItem; 6] {
        [
            Self::FoodJourney,
            Self::SavedPlaces,
            Self::Friends,
            Self::GiftCards,
            Self::Calendar,
            Self::Offers,
        ]
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::FoodJourney => "My Food Journey",
            Self::SavedPlaces => "Saved Places",
            Self::Friends => "My Friends",
            Self::GiftCards => "Gift Cards",
            Self::Calendar => "Calendar",
            Self::Offers => "Offers & Rewards",
        }
    }

    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::FoodJourney => "View all your food memories",
            Self::SavedPlaces => "Restaurants you want to visit",
            Self::Friends => "Manage your foodie connections",
            Self::GiftCards => "Send a treat to your friends",
            Self::Calendar => "Your upcoming restaurant plans",
            Self::Offers => "See your available perks",
        }
    }

    #[must_use]
    pub const fn action(self) -> MenuAction {
        match self {
            Self::FoodJourney => MenuAction::Open(Route::Diary),
            Self::SavedPlaces | Self::Calendar => MenuAction::Open(Route::Saved),
            Self::Friends => MenuAction::FocusFriends,
            Self::GiftCards | Self::Offers => MenuAction::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileFocus {
    #[default]
    Menu,
    Friends,
}

pub struct ProfileState {
    pub profile: UserProfile,
    pub friends: Vec<Friend>,
    pub focus: ProfileFocus,
    pub menu_cursor: usize,
    pub friend_cursor: usize,
}

impl ProfileState {
    #[must_use]
    pub fn new(profile: UserProfile, friends: Vec<Friend>) -> Self {
        Self {
            profile,
            friends,
            focus: ProfileFocus::default(),
            menu_cursor: 0,
            friend_cursor: 0,
        }
    }

    #[must_use]
    pub fn current_menu_item(&self) -> ProfileMenuItem {
        ProfileMenuItem::all()[self.menu_cursor.min(ProfileMenuItem::all().len() - 1)]
    }

    #[must_use]
    pub fn focused_friend(&self) -> Option<&Friend> {
        self.friends.get(self.friend_cursor)
    }

    /// Flips the selection flag of the focused friend; returns the new flag.
    pub fn toggle_friend(&mut self) -> Option<bool> {
        let friend = self.friends.get_mut(self.friend_cursor)?;
        friend.selected = !friend.selected;
        Some(friend.selected)
    }

    #[must_use]
    pub fn selected_friends(&self) -> usize {
        self.friends.iter().filter(|f| f.selected).count()
    }

    /// Moves down through the menu and on into the friend list.
    pub fn move_down(&mut self) {
        match self.focus {
            ProfileFocus::Menu if self.menu_cursor + 1 < ProfileMenuItem::all().len() => {
                self.menu_cursor += 1;
            }
            ProfileFocus::Menu if !self.friends.is_empty() => {
                self.focus = ProfileFocus::Friends;
                self.friend_cursor = 0;
            }
            ProfileFocus::Menu => {}
            ProfileFocus::Friends => {
                self.friend_cursor = step(self.friend_cursor, 1, self.friends.len());
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.focus {
            ProfileFocus::Menu => self.menu_cursor = self.menu_cursor.saturating_sub(1),
            ProfileFocus::Friends if self.friend_cursor == 0 => {
                self.focus = ProfileFocus::Menu;
                self.menu_cursor = ProfileMenuItem::all().len() - 1;
            }
            ProfileFocus::Friends => self.friend_cursor -= 1,
        }
    }
}

// =============================================================================
// Log Food
// =============================================================================

/// Fields of the log-food form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    FoodName,
    Restaurant,
    Rating,
    Price,
    Notes,
    Tags,
    Photo,
    Save,
}

impl FormField {
    #[must_use]
    pub const fn all() -> [FormField; 8] {
        [
            Self::FoodName,
            Self::Restaurant,
            Self::Rating,
            Self::Price,
            Self::Notes,
            Self::Tags,
            Self::Photo,
            Self::Save,
        ]
    }

    const fn index(self) -> usize {
        match self {
            Self::FoodName => 0,
            Self::Restaurant => 1,
            Self::Rating => 2,
            Self::Price => 3,
            Self::Notes => 4,
            Self::Tags => 5,
            Self::Photo => 6,
            Self::Save => 7,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::all()[(self.index() + 1) % 8]
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::all()[(self.index() + 7) % 8]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FoodName => "What did you eat?",
            Self::Restaurant => "Where did you eat it?",
            Self::Rating => "How would you rate it?",
            Self::Price => "Price (optional)",
            Self::Notes => "Notes (optional)",
            Self::Tags => "Tags",
            Self::Photo => "Photo",
            Self::Save => "Save Entry",
        }
    }

    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Notes)
    }
}

/// The log-food overlay: text widgets plus the form they feed.
pub struct LogFoodState {
    pub form: FoodLogForm,
    pub food_name: TextArea<'static>,
    pub restaurant: TextArea<'static>,
    pub price: TextArea<'static>,
    pub notes: TextArea<'static>,
    pub tag_draft: TextArea<'static>,
    pub focus: FormField,
    pub rating_cursor: usize,
    /// Tag picked for removal.
    pub tag_cursor: Option<usize>,
    /// Last save failure.
    pub error: Option<String>,
}

impl LogFoodState {
    #[must_use]
    pub fn new(max_rating: u8) -> Self {
        Self {
            form: FoodLogForm::new(max_rating),
            food_name: text_field("Dish name"),
            restaurant: text_field("Restaurant name"),
            price: text_field("$0.00"),
            notes: text_field("What did you think?"),
            tag_draft: text_field("Add a tag and press Enter"),
            focus: FormField::default(),
            rating_cursor: 0,
            tag_cursor: None,
            error: None,
        }
    }

    #[must_use]
    pub const fn field(&self, field: FormField) -> Option<&TextArea<'static>> {
        match field {
            FormField::FoodName => Some(&self.food_name),
            FormField::Restaurant => Some(&self.restaurant),
            FormField::Price => Some(&self.price),
            FormField::Notes => Some(&self.notes),
            FormField::Tags => Some(&self.tag_draft),
            FormField::Rating | FormField::Photo | FormField::Save => None,
        }
    }

    pub const fn field_mut(&mut self, field: FormField) -> Option<&mut TextArea<'static>> {
        match field {
            FormField::FoodName => Some(&mut self.food_name),
            FormField::Restaurant => Some(&mut self.restaurant),
            FormField::Price => Some(&mut self.price),
            FormField::Notes => Some(&mut self.notes),
            FormField::Tags => Some(&mut self.tag_draft),
            FormField::Rating | FormField::Photo | FormField::Save => None,
        }
    }

    /// Copies a text widget's content into the form.
    pub fn sync_field(&mut self, field: FormField) {
        let Some(text) = self.field(field).map(text_of) else {
            return;
        };
        match field {
            FormField::FoodName => self.form.set_food_name(&text),
            FormField::Restaurant => self.form.set_restaurant_name(&text),
            FormField::Price => self.form.set_price(&text),
            FormField::Notes => self.form.set_notes(&text),
            FormField::Tags => self.form.set_tag_draft(&text),
            FormField::Rating | FormField::Photo | FormField::Save => {}
        }
    }

    /// Confirms the tag draft; the draft widget is cleared when a tag is added.
    pub fn submit_tag(&mut self) -> Option<TagOutcome> {
        self.sync_field(FormField::Tags);
        let outcome = self.form.submit_tag()?;
        if matches!(outcome, TagOutcome::Added(_)) {
            set_text(&mut self.tag_draft, "");
        }
        Some(outcome)
    }

    /// Moves the removal cursor through the tags.
    pub fn move_tag_cursor(&mut self, delta: isize) {
        let len = self.form.tags().tags().len();
        if len == 0 {
            self.tag_cursor = None;
            return;
        }
        self.tag_cursor = Some(match self.tag_cursor {
            None if delta < 0 => len - 1,
            None => 0,
            Some(i) => step(i, delta, len),
        });
    }

    /// Added tags as closable chips; the picked one shows its close mark.
    #[must_use]
    pub fn tag_chips(&self) -> ChipSet {
        ChipSet::new(
            self.form
                .tags()
                .tags()
                .iter()
                .enumerate()
                .map(|(i, tag)| Chip::new(tag.clone(), self.tag_cursor == Some(i)).closable())
                .collect(),
        )
    }

    /// Presses the close mark of the picked tag chip.
    pub fn remove_selected_tag(&mut self) -> bool {
        let pressed = self
            .tag_cursor
            .and_then(|i| self.tag_chips().press_close(i));
        let Some(ChipPress::Close(index)) = pressed else {
            return false;
        };
        let Some(tag) = self.form.tags().tags().get(index).cloned() else {
            return false;
        };
        let removed = self.form.remove_tag(&tag);
        let len = self.form.tags().tags().len();
        self.tag_cursor = self.tag_cursor.filter(|_| len > 0).map(|i| i.min(len - 1));
        removed
    }

    /// Presses rating icon `index` and moves the rating cursor there.
    pub fn press_rating(&mut self, index: usize) -> Option<u8> {
        let rating = self.form.press_rating(index)?;
        self.rating_cursor = index;
        Some(rating)
    }

    pub fn move_rating_cursor(&mut self, delta: isize) {
        let len = usize::from(self.form.rating().max_rating());
        self.rating_cursor = step(self.rating_cursor, delta, len);
    }
}
