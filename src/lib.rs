//! `Tastebud` - food discovery and dining journal for the terminal
//!
//! Browse restaurants by cuisine and mood, keep a searchable food diary,
//! plan visits to saved places and log new dishes from a modal form.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod tui;
