//! Shared test utilities for the app module.
//!
//! - `test_app` / `test_app_with_store` - `App` instances rooted in a temp dir
//! - `RecordingStore` / `FailingStore` - persistence collaborators for assertions
//! - Key event helpers (`char_key`, `key`, `ctrl_key`, `enter_key`)
//! - `render_app_to_terminal` / `screen_text` - `TestBackend` rendering

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::app::{App, Preferences};
use crate::core::{EntryStore, FoodLogPayload, Restaurant, StoreError};
use crate::fs::TastebudPaths;

/// Creates a [`KeyEvent`] for `code` with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for `code` with Ctrl held.
pub fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(code)
    }
}

/// Creates a [`KeyEvent`] for Ctrl plus a character.
pub fn ctrl_key(c: char) -> KeyEvent {
    ctrl(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for the Enter key with specified modifiers.
pub fn enter_key(modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        modifiers,
        ..key(KeyCode::Enter)
    }
}

/// Feeds each character of `text` as a key press.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// What a [`RecordingStore`] was asked to do.
#[derive(Debug, Default)]
pub struct StoreLog {
    pub entries: Vec<FoodLogPayload>,
    pub saved: Vec<String>,
    pub removed: Vec<String>,
}

/// Store that records every request and accepts it.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub log: Rc<RefCell<StoreLog>>,
}

impl EntryStore for RecordingStore {
    fn save_entry(&mut self, payload: &FoodLogPayload) -> Result<(), StoreError> {
        self.log.borrow_mut().entries.push(payload.clone());
        Ok(())
    }

    fn save_restaurant(&mut self, restaurant: &Restaurant) -> Result<(), StoreError> {
        self.log.borrow_mut().saved.push(restaurant.id.clone());
        Ok(())
    }

    fn remove_saved(&mut self, restaurant: &Restaurant) -> Result<(), StoreError> {
        self.log.borrow_mut().removed.push(restaurant.id.clone());
        Ok(())
    }
}

/// Store that rejects everything.
pub struct FailingStore;

impl EntryStore for FailingStore {
    fn save_entry(&mut self, _payload: &FoodLogPayload) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save_restaurant(&mut self, _restaurant: &Restaurant) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove_saved(&mut self, _restaurant: &Restaurant) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// Creates an `App` with default preferences.
///
/// Uses the system temp dir as base path; tests that write settings use
/// their own `TempDir`.
pub fn test_app() -> App {
    App::with_preferences(
        TastebudPaths::new(std::env::temp_dir().as_path()),
        Preferences::default(),
    )
}

/// Creates an `App` whose store records into the returned handle.
pub fn test_app_with_store() -> (App, Rc<RefCell<StoreLog>>) {
    let store = RecordingStore::default();
    let log = Rc::clone(&store.log);
    (test_app().with_store(Box::new(store)), log)
}

/// Renders the app to a `TestBackend` terminal.
///
/// Calls `update_layout()` before rendering, as the main loop does.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    use ratatui::layout::Rect;

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    app.update_layout(Rect::new(0, 0, width, height));

    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Returns the rendered rows as plain strings.
#[must_use]
pub fn screen_text(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

/// Renders `app` at 100x40 and returns the whole screen as one string.
pub fn render_to_string(app: &mut App) -> String {
    let terminal = render_app_to_terminal(app, 100, 40).unwrap();
    screen_text(&terminal).join("\n")
}
