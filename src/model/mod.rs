//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **GalleryModel**: Current breed and image list (the controller state)
//! - **UiModel**: Selector, scroll position, toast, preferences
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the runtime, driven by returned `Command`s

pub mod gallery;
pub mod selector;
pub mod ui;

pub use gallery::{Command, GalleryModel, ImageList};
pub use selector::SelectorState;
pub use ui::UiModel;

use crate::Breed;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Controller state (breed + images)
    pub gallery: GalleryModel,

    /// UI preferences and transient state
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            gallery: GalleryModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// One-shot initial fetch (see `GalleryModel::mount`)
    pub fn mount(&mut self) -> Option<Command> {
        self.gallery.mount()
    }

    /// Choose a selector option; fetches only if the selection changed
    pub fn choose_breed(&mut self, breed: Breed) -> Option<Command> {
        self.ui
            .selector
            .choose(breed)
            .map(|breed| self.gallery.change_breed(breed))
    }

    /// Step the selector; fetches only if the selection changed
    pub fn step_breed(&mut self, delta: isize) -> Option<Command> {
        self.ui
            .selector
            .step(delta)
            .map(|breed| self.gallery.change_breed(breed))
    }

    /// Replace the displayed images and scroll back to the top
    pub fn apply_images(&mut self, urls: Vec<String>) {
        self.gallery.apply_images(urls);
        self.ui.gallery_scroll = 0;
    }

    /// Apply a breed image fetch result, whichever breed it was for
    ///
    /// Returns the number of images now displayed. A failed fetch changes
    /// nothing and hands the error back for logging.
    pub fn handle_breed_images(
        &mut self,
        urls: anyhow::Result<Vec<String>>,
    ) -> anyhow::Result<usize> {
        let urls = urls?;
        let count = urls.len();
        self.apply_images(urls);
        Ok(count)
    }
}
