//! Dog Gallery TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for debug mode (set from `--debug`)
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Append a line to the debug log when debug mode is enabled
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Dog breeds offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breed {
    #[default]
    Shiba,
    Akita,
}

impl Breed {
    /// Selector options, in display order
    pub const ALL: [Breed; 2] = [Breed::Shiba, Breed::Akita];

    /// Identifier used in API paths and the caption
    pub fn as_str(&self) -> &'static str {
        match self {
            Breed::Shiba => "shiba",
            Breed::Akita => "akita",
        }
    }

    /// Option text shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            Breed::Shiba => "Shiba",
            Breed::Akita => "Akita",
        }
    }

    /// Position of this breed in `Breed::ALL`
    pub fn index(&self) -> usize {
        match self {
            Breed::Shiba => 0,
            Breed::Akita => 1,
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

/// Per-card image state, kept outside the Model because the protocol isn't Clone
pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        metadata: ImageMetadata,
    },
}

impl fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { metadata } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("metadata", metadata)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breed_is_shiba() {
        assert_eq!(Breed::default(), Breed::Shiba);
    }

    #[test]
    fn test_breed_identifiers() {
        assert_eq!(Breed::Shiba.as_str(), "shiba");
        assert_eq!(Breed::Akita.as_str(), "akita");
        assert_eq!(Breed::Akita.to_string(), "akita");
    }

    #[test]
    fn test_breed_index_matches_all() {
        for (idx, breed) in Breed::ALL.iter().enumerate() {
            assert_eq!(breed.index(), idx);
        }
    }
}
