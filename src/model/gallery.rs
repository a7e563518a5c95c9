//! Gallery Model
//!
//! The controller state: which breed is shown and which image URLs are
//! loaded. All mutations go through the methods below so the fetch rules
//! stay in one place.

use crate::Breed;

/// Image URL list, or the sentinel for "never fetched"
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ImageList {
    #[default]
    Unloaded,
    Loaded(Vec<String>),
}

impl ImageList {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageList::Loaded(_))
    }

    /// Loaded URLs, or `None` while unloaded
    pub fn urls(&self) -> Option<&[String]> {
        match self {
            ImageList::Unloaded => None,
            ImageList::Loaded(urls) => Some(urls.as_slice()),
        }
    }

    /// Whether a URL is part of the displayed list
    pub fn contains(&self, url: &str) -> bool {
        self.urls()
            .map(|urls| urls.iter().any(|u| u == url))
            .unwrap_or(false)
    }
}

/// Side effect the runtime must perform for the model
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    FetchImages(Breed),
}

#[derive(Clone, Debug)]
pub struct GalleryModel {
    /// Breed shown in the caption
    pub breed: Breed,

    /// Images currently displayed
    pub images: ImageList,

    /// Whether the one-shot mount fetch has been issued
    mounted: bool,
}

impl GalleryModel {
    pub fn new() -> Self {
        Self {
            breed: Breed::default(),
            images: ImageList::Unloaded,
            mounted: false,
        }
    }

    /// Issue the initial fetch for the default breed
    ///
    /// Only the first call returns a command. Breed changes never re-run it.
    pub fn mount(&mut self) -> Option<Command> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(Command::FetchImages(self.breed))
    }

    /// Switch to a new breed
    ///
    /// The label changes right away; the images stay until a fetch lands.
    pub fn change_breed(&mut self, breed: Breed) -> Command {
        self.breed = breed;
        Command::FetchImages(breed)
    }

    /// Replace the image list with a fetch result
    ///
    /// Results are applied in arrival order with no check against the
    /// current breed, so the last fetch to complete wins.
    pub fn apply_images(&mut self, urls: Vec<String>) {
        self.images = ImageList::Loaded(urls);
    }
}

impl Default for GalleryModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let gallery = GalleryModel::new();
        assert_eq!(gallery.breed, Breed::Shiba);
        assert_eq!(gallery.images, ImageList::Unloaded);
        assert!(gallery.images.urls().is_none());
    }

    #[test]
    fn test_mount_fetches_once() {
        let mut gallery = GalleryModel::new();
        assert_eq!(gallery.mount(), Some(Command::FetchImages(Breed::Shiba)));
        assert_eq!(gallery.mount(), None);
    }

    #[test]
    fn test_mount_after_breed_change_does_not_refetch() {
        let mut gallery = GalleryModel::new();
        gallery.mount();
        gallery.change_breed(Breed::Akita);
        assert_eq!(gallery.mount(), None);
    }

    #[test]
    fn test_empty_result_is_distinct_from_unloaded() {
        let mut gallery = GalleryModel::new();
        gallery.apply_images(vec![]);
        assert!(gallery.images.is_loaded());
        assert_eq!(gallery.images.urls(), Some(&[][..]));
    }

    #[test]
    fn test_contains_follows_replacements() {
        let mut gallery = GalleryModel::new();
        assert!(!gallery.images.contains("url1"));

        gallery.apply_images(vec!["url1".to_string()]);
        assert!(gallery.images.contains("url1"));

        gallery.apply_images(vec!["urlA".to_string()]);
        assert!(!gallery.images.contains("url1"));
        assert!(gallery.images.contains("urlA"));
    }

    #[test]
    fn test_change_breed_keeps_old_images() {
        let mut gallery = GalleryModel::new();
        gallery.apply_images(vec!["url1".to_string()]);
        let command = gallery.change_breed(Breed::Akita);
        assert_eq!(command, Command::FetchImages(Breed::Akita));
        assert_eq!(gallery.breed, Breed::Akita);
        assert_eq!(gallery.images, ImageList::Loaded(vec!["url1".to_string()]));
    }
}
