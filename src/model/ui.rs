//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, selector, scroll position, and visual state.

use std::time::Instant;

use super::selector::SelectorState;

/// UI preferences and transient visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Whether an open command is configured (controls the legend)
    pub can_open_links: bool,

    /// Breed selector
    pub selector: SelectorState,

    /// First visible gallery row
    pub gallery_scroll: usize,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether image previews are drawn (false falls back to alt text)
    pub image_preview_enabled: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            can_open_links: false,
            selector: SelectorState::new(),
            gallery_scroll: 0,
            toast_message: None,
            image_preview_enabled: false,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, shown_at)| {
                crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
            })
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn scroll_up(&mut self) {
        self.gallery_scroll = self.gallery_scroll.saturating_sub(1);
    }

    /// Scroll down one row; the renderer clamps past-the-end offsets
    pub fn scroll_down(&mut self) {
        self.gallery_scroll = self.gallery_scroll.saturating_add(1);
    }
}
