//! Keyboard Input Handler
//!
//! Dispatches bound keys to selector, scroll and link actions.

use crossterm::event::KeyEvent;
use dogtui::logic::keys::{action_for_key, UserAction};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = action_for_key(key, app.model.ui.vim_mode) else {
        return;
    };

    match action {
        UserAction::StepBreed(delta) => app.step_breed(delta),
        UserAction::ChooseBreed(breed) => app.choose_breed(breed),
        UserAction::ScrollUp => app.model.ui.scroll_up(),
        UserAction::ScrollDown => app.model.ui.scroll_down(),
        UserAction::OpenDonateLink => app.open_donate_link(),
        UserAction::Quit => app.model.ui.should_quit = true,
    }
}
