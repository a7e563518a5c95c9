//! Image preview methods
//!
//! Decodes downloaded image bytes into terminal graphics protocols for the
//! gallery cards.

use crate::App;
use dogtui::logic::errors::format_error_message;
use dogtui::{log_debug, ImageMetadata, ImagePreviewState};

/// Largest image body we attempt to decode
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

impl App {
    /// Handle downloaded bytes for one gallery card
    pub(crate) fn handle_image_data(&mut self, url: String, bytes: anyhow::Result<Vec<u8>>) {
        // The list may have been replaced while the download was in flight
        if !self.is_url_displayed(&url) {
            log_debug(&format!("DEBUG [Preview]: Dropping bytes for stale url {}", url));
            return;
        }

        let bytes = match bytes {
            Ok(bytes) => bytes,
            Err(e) => {
                log_debug(&format!(
                    "DEBUG [Preview]: Download failed {}: {}",
                    url,
                    format_error_message(&e)
                ));
                self.image_state_map.insert(
                    url,
                    ImagePreviewState::Failed {
                        metadata: ImageMetadata {
                            dimensions: None,
                            format: Some(format!("Download error: {}", e)),
                            file_size: 0,
                        },
                    },
                );
                return;
            }
        };

        let Some(picker) = self.image_picker.clone() else {
            return;
        };
        let image_tx = self.image_update_tx.clone();

        tokio::spawn(async move {
            log_debug(&format!("Background: Decoding image {}", url));
            let state = match Self::decode_image_preview(bytes, picker).await {
                Ok((protocol, metadata)) => ImagePreviewState::Ready { protocol, metadata },
                Err(metadata) => {
                    log_debug(&format!(
                        "Background: Image decode failed {}: {:?}",
                        url, metadata.format
                    ));
                    ImagePreviewState::Failed { metadata }
                }
            };
            let _ = image_tx.send((url, state));
        });
    }

    /// Store a decoded preview if its card is still displayed
    pub(crate) fn apply_image_update(&mut self, url: String, state: ImagePreviewState) {
        if self.is_url_displayed(&url) {
            self.image_state_map.insert(url, state);
        }
    }

    async fn decode_image_preview(
        bytes: Vec<u8>,
        picker: ratatui_image::picker::Picker,
    ) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata), ImageMetadata> {
        let file_size = bytes.len() as u64;
        if file_size > MAX_IMAGE_BYTES {
            return Err(ImageMetadata {
                dimensions: None,
                format: Some("Too large".to_string()),
                file_size,
            });
        }

        let format = image::guess_format(&bytes)
            .ok()
            .map(|f| format!("{:?}", f));

        // Estimate maximum reasonable size: a card is at most ~50 × 20 cells
        let font_size = picker.font_size();
        let max_width = 50 * font_size.0 as u32;
        let max_height = 20 * font_size.1 as u32;

        let decode_result = tokio::task::spawn_blocking(move || {
            let img = image::load_from_memory(&bytes)?;
            let dimensions = (img.width(), img.height());
            Ok::<_, image::ImageError>((downscale(img, max_width, max_height), dimensions))
        })
        .await;

        let (img, dimensions) = match decode_result {
            Ok(Ok(decoded)) => decoded,
            Ok(Err(e)) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Load error: {}", e)),
                    file_size,
                });
            }
            Err(e) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Task error: {}", e)),
                    file_size,
                });
            }
        };

        let protocol = picker.new_resize_protocol(img);

        Ok((
            protocol,
            ImageMetadata {
                dimensions: Some(dimensions),
                format,
                file_size,
            },
        ))
    }
}

/// Pre-downscale large images, picking a filter by how far we shrink
fn downscale(img: image::DynamicImage, max_width: u32, max_height: u32) -> image::DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        return img;
    }

    let scale_factor = (img.width() as f32 / max_width as f32)
        .max(img.height() as f32 / max_height as f32);

    let filter = if scale_factor > 4.0 {
        image::imageops::FilterType::Triangle
    } else if scale_factor > 2.0 {
        image::imageops::FilterType::CatmullRom
    } else {
        image::imageops::FilterType::Lanczos3
    };

    log_debug(&format!(
        "Pre-downscaling {}x{} by {:.2}x with {:?}",
        img.width(),
        img.height(),
        scale_factor,
        filter
    ));
    img.resize(max_width, max_height, filter)
}
