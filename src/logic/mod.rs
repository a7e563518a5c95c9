//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Fetch failure classification for the debug log
//! - gallery: Responsive grid and scroll calculations
//! - keys: Key bindings to user actions
//! - ui: Selector cycling, captions, toast timing

pub mod errors;
pub mod gallery;
pub mod keys;
pub mod ui;
