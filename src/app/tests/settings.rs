//! Settings loading and saving through the app.

use std::fs;

use anyhow::Result;
use tempfile::TempDir;

use super::helpers::*;
use crate::app::*;
use crate::fs::TastebudPaths;

fn write_settings(dir: &TempDir, json: &str) -> Result<TastebudPaths> {
    let paths = TastebudPaths::new(dir.path());
    paths.ensure_tastebud_dir()?;
    fs::write(paths.settings_file(), json)?;
    Ok(paths)
}

#[test]
fn persisted_settings_are_applied() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = write_settings(
        &dir,
        r#"{"startTab":"stats","displayName":"Sam","maxRating":"3"}"#,
    )?;

    let mut app = App::new(paths, None);
    assert_eq!(app.tab(), Tab::Stats);
    assert_eq!(app.preferences().display_name, "Sam");
    assert_eq!(app.preferences().location, "New York, NY");
    assert_eq!(app.profile.profile.display_name, "Sam");

    app.handle_key(char_key('n'));
    assert_eq!(app.log_food.as_ref().unwrap().form.rating().max_rating(), 3);
    Ok(())
}

#[test]
fn command_line_tab_overrides_persisted_tab() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = write_settings(&dir, r#"{"startTab":"stats"}"#)?;

    let app = App::new(paths, Some(Tab::Saved));
    assert_eq!(app.tab(), Tab::Saved);
    Ok(())
}

#[test]
fn unreadable_settings_fall_back_to_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = write_settings(&dir, "{ not json")?;

    let app = App::new(paths, None);
    assert_eq!(app.preferences(), &Preferences::default());
    Ok(())
}

#[test]
fn invalid_values_fall_back_per_field() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = write_settings(
        &dir,
        r#"{"startTab":"kitchen","displayName":"  ","maxRating":"42","location":"Austin, TX"}"#,
    )?;

    let app = App::new(paths, None);
    let defaults = Preferences::default();
    assert_eq!(app.tab(), defaults.start_tab);
    assert_eq!(app.preferences().display_name, defaults.display_name);
    assert_eq!(app.preferences().max_rating, defaults.max_rating);
    assert_eq!(app.preferences().location, "Austin, TX");
    Ok(())
}

#[test]
fn rating_scale_above_five_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = write_settings(&dir, r#"{"maxRating":"10"}"#)?;

    let mut app = App::new(paths, None);
    assert_eq!(app.preferences().max_rating, 5);
    app.handle_key(char_key('n'));
    assert_eq!(app.log_food.as_ref().unwrap().form.rating().max_rating(), 5);
    Ok(())
}

#[test]
fn exit_persists_current_tab() -> Result<()> {
    let dir = TempDir::new()?;
    let paths = TastebudPaths::new(dir.path());

    let mut app = App::new(paths.clone(), None);
    app.handle_key(char_key('4'));
    app.save_settings_on_exit()?;

    let reopened = App::new(paths, None);
    assert_eq!(reopened.tab(), Tab::Stats);
    Ok(())
}
