//! API Response Handler
//!
//! Handles responses from the Dog API background service.

use dogtui::log_debug;
use dogtui::logic::errors::{classify_error, format_error_message};
use dogtui::services::ApiResponse;

use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - BreedImagesResult: URL list for a breed. Applied in arrival order,
///   whatever breed it was for. Failures only reach the debug log and leave
///   the displayed images untouched.
/// - ImageDataResult: Bytes for one gallery card
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::BreedImagesResult { breed, urls } => {
            match app.model.handle_breed_images(urls) {
                Ok(count) => {
                    log_debug(&format!(
                        "DEBUG [BreedImagesResult]: breed={} count={} (showing breed={})",
                        breed, count, app.model.gallery.breed
                    ));
                    app.sync_image_previews();
                }
                Err(e) => {
                    log_debug(&format!(
                        "DEBUG [BreedImagesResult]: breed={} failed ({:?}): {}",
                        breed,
                        classify_error(&e),
                        format_error_message(&e)
                    ));
                }
            }
        }

        ApiResponse::ImageDataResult { url, bytes } => {
            app.handle_image_data(url, bytes);
        }
    }
}
