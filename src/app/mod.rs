//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in dogtui::model)
//! - Services (API request queue)
//! - Handlers (in src/handlers/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod gallery;
pub(crate) mod links;
pub(crate) mod preview;
