//! Selector state
//!
//! The breed selector keeps its own selected value, like an uncontrolled
//! form control. It only reports a breed when the value actually changes.

use crate::logic;
use crate::Breed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorState {
    pub selected: Breed,
}

impl SelectorState {
    pub fn new() -> Self {
        Self {
            selected: Breed::default(),
        }
    }

    /// Choose an option; returns the breed to emit if the value changed
    pub fn choose(&mut self, breed: Breed) -> Option<Breed> {
        if self.selected == breed {
            return None;
        }
        self.selected = breed;
        Some(breed)
    }

    /// Move to a neighbouring option; returns the breed to emit if it changed
    pub fn step(&mut self, delta: isize) -> Option<Breed> {
        let next = logic::ui::cycle_breed(self.selected, delta);
        self.choose(next)
    }
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new()
    }
}
