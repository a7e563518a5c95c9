//! Gallery orchestration methods
//!
//! Turns model commands into API requests and keeps per-card preview
//! state in step with the displayed URL list.

use crate::App;
use dogtui::logic::gallery::preview_plan;
use dogtui::model::Command;
use dogtui::services::ApiRequest;
use dogtui::{log_debug, Breed, ImagePreviewState};

impl App {
    /// Perform a side effect requested by the model
    pub(crate) fn run_command(&mut self, command: Command) {
        match command {
            Command::FetchImages(breed) => {
                log_debug(&format!("DEBUG [Gallery]: Requesting images for breed={}", breed));
                let _ = self.api_tx.send(ApiRequest::FetchBreedImages { breed });
            }
        }
    }

    /// Issue the one-shot initial fetch
    pub(crate) fn mount(&mut self) {
        if let Some(command) = self.model.mount() {
            self.run_command(command);
        }
    }

    pub(crate) fn choose_breed(&mut self, breed: Breed) {
        if let Some(command) = self.model.choose_breed(breed) {
            self.run_command(command);
        }
    }

    pub(crate) fn step_breed(&mut self, delta: isize) {
        if let Some(command) = self.model.step_breed(delta) {
            self.run_command(command);
        }
    }

    /// Whether a URL is part of the currently displayed list
    pub(crate) fn is_url_displayed(&self, url: &str) -> bool {
        self.model.gallery.images.contains(url)
    }

    /// Drop preview state for URLs that left the list and queue downloads for new ones
    pub(crate) fn sync_image_previews(&mut self) {
        let Some(urls) = self.model.gallery.images.urls() else {
            return;
        };

        let plan = preview_plan(urls, self.image_state_map.keys());
        for url in &plan.drop {
            self.image_state_map.remove(url);
        }

        if self.image_picker.is_none() {
            return;
        }

        for url in plan.fetch {
            self.image_state_map
                .insert(url.clone(), ImagePreviewState::Loading);
            let _ = self.api_tx.send(ApiRequest::FetchImageData { url });
        }
    }
}
