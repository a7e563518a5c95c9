use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;

use crate::Breed;

/// Response body of `/breed/{breed}/images/random/{count}`
#[derive(Debug, Clone, Deserialize)]
pub struct BreedImagesResponse {
    pub message: Vec<String>,
    pub status: String,
}

/// Anything that can list breed images and download image bytes
///
/// The request service is generic over this so it can run against the
/// real Dog API or a scripted source.
pub trait ImageSource: Clone + Send + Sync + 'static {
    fn fetch_breed_images(&self, breed: Breed)
        -> impl Future<Output = Result<Vec<String>>> + Send;

    fn fetch_image_data(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

#[derive(Clone)]
pub struct DogApiClient {
    base_url: String,
    image_count: u32,
    client: Client,
}

impl DogApiClient {
    pub fn new(base_url: String, image_count: u32) -> Self {
        Self {
            base_url,
            image_count,
            client: Client::new(),
        }
    }

    pub fn breed_images_url(&self, breed: Breed) -> String {
        format!(
            "{}/breed/{}/images/random/{}",
            self.base_url,
            breed.as_str(),
            self.image_count
        )
    }

    pub async fn get_breed_images(&self, breed: Breed) -> Result<Vec<String>> {
        let url = self.breed_images_url(breed);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch breed images")?
            .error_for_status()?;

        let body: BreedImagesResponse = response
            .json()
            .await
            .context("Failed to parse breed images")?;

        parse_breed_images(body)
    }

    pub async fn get_image_data(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to download image")?
            .error_for_status()?;

        let bytes = response
            .bytes()
            .await
            .context("Failed to read image body")?;

        Ok(bytes.to_vec())
    }
}

impl ImageSource for DogApiClient {
    async fn fetch_breed_images(&self, breed: Breed) -> Result<Vec<String>> {
        self.get_breed_images(breed).await
    }

    async fn fetch_image_data(&self, url: &str) -> Result<Vec<u8>> {
        self.get_image_data(url).await
    }
}

/// Validate the API envelope and extract the URL list
pub fn parse_breed_images(body: BreedImagesResponse) -> Result<Vec<String>> {
    if body.status != "success" {
        anyhow::bail!("API error: status {}", body.status);
    }
    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_images_url() {
        let client = DogApiClient::new("https://dog.ceo/api".to_string(), 12);
        assert_eq!(
            client.breed_images_url(Breed::Akita),
            "https://dog.ceo/api/breed/akita/images/random/12"
        );
    }

    #[test]
    fn test_parse_success_preserves_order() {
        let body: BreedImagesResponse = serde_json::from_str(
            r#"{"message": ["url1", "url2", "url3"], "status": "success"}"#,
        )
        .unwrap();
        assert_eq!(parse_breed_images(body).unwrap(), vec!["url1", "url2", "url3"]);
    }

    #[test]
    fn test_parse_error_status() {
        let body = BreedImagesResponse {
            message: vec![],
            status: "error".to_string(),
        };
        assert!(parse_breed_images(body).is_err());
    }

    #[test]
    fn test_error_body_does_not_decode_as_list() {
        // Dog API reports unknown breeds with a string message
        let result: Result<BreedImagesResponse, _> = serde_json::from_str(
            r#"{"message": "Breed not found (master breed does not exist)", "status": "error", "code": 404}"#,
        );
        assert!(result.is_err());
    }
}
