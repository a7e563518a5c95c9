//! UI state transition logic
//!
//! Pure functions for selector cycling, captions and toast timing.

use crate::Breed;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Step through the selector options with wrap-around
///
/// # Examples
/// ```
/// use dogtui::Breed;
/// use dogtui::logic::ui::cycle_breed;
///
/// assert_eq!(cycle_breed(Breed::Shiba, 1), Breed::Akita);
/// assert_eq!(cycle_breed(Breed::Akita, 1), Breed::Shiba);
/// assert_eq!(cycle_breed(Breed::Shiba, -1), Breed::Akita);
/// ```
pub fn cycle_breed(current: Breed, delta: isize) -> Breed {
    let len = Breed::ALL.len() as isize;
    let idx = (current.index() as isize + delta).rem_euclid(len);
    Breed::ALL[idx as usize]
}

/// Caption shown above the gallery, English for `☆これは {breed} の画像です♪`
pub fn breed_caption(breed: Breed) -> String {
    format!("☆ These are {} pictures ♪", breed.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismiss_threshold() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
    }

    #[test]
    fn test_cycle_breed_by_two_is_identity() {
        assert_eq!(cycle_breed(Breed::Akita, 2), Breed::Akita);
        assert_eq!(cycle_breed(Breed::Shiba, -2), Breed::Shiba);
    }

    #[test]
    fn test_breed_caption_uses_identifier() {
        assert_eq!(breed_caption(Breed::Shiba), "☆ These are shiba pictures ♪");
        assert_eq!(breed_caption(Breed::Akita), "☆ These are akita pictures ♪");
    }
}
