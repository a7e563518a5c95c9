//! Key binding logic
//!
//! Maps raw key events to user actions so the keyboard handler stays thin.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::Breed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Move the selector by one option (wraps)
    StepBreed(isize),
    /// Choose a selector option directly
    ChooseBreed(Breed),
    ScrollUp,
    ScrollDown,
    OpenDonateLink,
    Quit,
}

/// Translate a key event into a user action (if bound)
pub fn action_for_key(key: KeyEvent, vim_mode: bool) -> Option<UserAction> {
    // Windows terminals report both press and release
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UserAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UserAction::Quit),
        KeyCode::Left | KeyCode::BackTab => Some(UserAction::StepBreed(-1)),
        KeyCode::Right | KeyCode::Tab => Some(UserAction::StepBreed(1)),
        KeyCode::Up => Some(UserAction::ScrollUp),
        KeyCode::Down => Some(UserAction::ScrollDown),
        KeyCode::Char('1') => Some(UserAction::ChooseBreed(Breed::Shiba)),
        KeyCode::Char('2') => Some(UserAction::ChooseBreed(Breed::Akita)),
        KeyCode::Char('o') => Some(UserAction::OpenDonateLink),
        KeyCode::Char('h') if vim_mode => Some(UserAction::StepBreed(-1)),
        KeyCode::Char('l') if vim_mode => Some(UserAction::StepBreed(1)),
        KeyCode::Char('k') if vim_mode => Some(UserAction::ScrollUp),
        KeyCode::Char('j') if vim_mode => Some(UserAction::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_step_selector() {
        assert_eq!(action_for_key(press(KeyCode::Left), false), Some(UserAction::StepBreed(-1)));
        assert_eq!(action_for_key(press(KeyCode::Right), false), Some(UserAction::StepBreed(1)));
    }

    #[test]
    fn test_digits_choose_breed() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('2')), false),
            Some(UserAction::ChooseBreed(Breed::Akita))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('1')), false),
            Some(UserAction::ChooseBreed(Breed::Shiba))
        );
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        assert_eq!(action_for_key(press(KeyCode::Char('j')), false), None);
        assert_eq!(action_for_key(press(KeyCode::Char('j')), true), Some(UserAction::ScrollDown));
        assert_eq!(action_for_key(press(KeyCode::Char('h')), true), Some(UserAction::StepBreed(-1)));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(key, false), Some(UserAction::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(key, false), None);
    }
}
