use std::collections::VecDeque;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::ImageSource;
use crate::{log_debug, Breed};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High, // Breed image lists (user-visible state)
    Low,  // Image bytes for gallery cards
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// List image URLs for a breed
    FetchBreedImages { breed: Breed },

    /// Download the bytes behind one image URL
    FetchImageData { url: String },
}

impl ApiRequest {
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchBreedImages { .. } => Priority::High,
            ApiRequest::FetchImageData { .. } => Priority::Low,
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    BreedImagesResult {
        breed: Breed,
        urls: Result<Vec<String>, anyhow::Error>,
    },

    ImageDataResult {
        url: String,
        bytes: Result<Vec<u8>, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed,
}

/// API service worker that processes requests in the background
///
/// Requests are never deduplicated or cancelled. Each one runs in its own
/// task and its response is forwarded as soon as it completes, so responses
/// arrive in completion order rather than request order.
pub struct ApiService<S: ImageSource> {
    source: S,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: usize,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl<S: ImageSource> ApiService<S> {
    pub(crate) fn new(
        source: S,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            source,
            request_queue: VecDeque::new(),
            in_flight: 0,
            response_tx,
            completion_tx,
            max_concurrent: 10, // Limit concurrent API calls
        }
    }

    /// Add a request to the queue
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();

        // Insert based on priority (high priority at front, FIFO within a level)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return;
        };

        self.in_flight += 1;

        let source = self.source.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No per-request retries or timeouts
        tokio::spawn(async move {
            let response = Self::execute_request(&source, request).await;
            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed);
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(source: &S, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchBreedImages { breed } => {
                log_debug(&format!("DEBUG [API Service]: FetchBreedImages START breed={}", breed));
                let urls = source.fetch_breed_images(breed).await;
                log_debug(&format!(
                    "DEBUG [API Service]: FetchBreedImages END breed={} success={}",
                    breed,
                    urls.is_ok()
                ));

                ApiResponse::BreedImagesResult { breed, urls }
            }

            ApiRequest::FetchImageData { url } => {
                let bytes = source.fetch_image_data(&url).await;

                ApiResponse::ImageDataResult { url, bytes }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service<S: ImageSource>(
    source: S,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(source, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // All senders dropped: the app is shutting down
                        None => break,
                    }
                }

                Some(InternalMessage::Completed) = completion_rx.recv() => {
                    service.in_flight = service.in_flight.saturating_sub(1);
                }

                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct NullSource;

    impl ImageSource for NullSource {
        async fn fetch_breed_images(&self, _breed: Breed) -> anyhow::Result<Vec<String>> {
            Ok(vec![])
        }

        async fn fetch_image_data(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
            Ok(vec![])
        }
    }

    fn service() -> ApiService<NullSource> {
        let (response_tx, _response_rx) = mpsc::unbounded_channel();
        let (completion_tx, _completion_rx) = mpsc::unbounded_channel();
        ApiService::new(NullSource, response_tx, completion_tx)
    }

    #[test]
    fn test_breed_requests_jump_ahead_of_image_downloads() {
        let mut service = service();
        service.enqueue(ApiRequest::FetchImageData { url: "a".to_string() });
        service.enqueue(ApiRequest::FetchImageData { url: "b".to_string() });
        service.enqueue(ApiRequest::FetchBreedImages { breed: Breed::Akita });

        let order: Vec<Priority> = service.request_queue.iter().map(|(_, p)| *p).collect();
        assert_eq!(order, vec![Priority::High, Priority::Low, Priority::Low]);
    }

    #[test]
    fn test_same_priority_keeps_request_order() {
        let mut service = service();
        service.enqueue(ApiRequest::FetchBreedImages { breed: Breed::Shiba });
        service.enqueue(ApiRequest::FetchBreedImages { breed: Breed::Akita });
        service.enqueue(ApiRequest::FetchBreedImages { breed: Breed::Shiba });

        let breeds: Vec<Breed> = service
            .request_queue
            .iter()
            .filter_map(|(req, _)| match req {
                ApiRequest::FetchBreedImages { breed } => Some(*breed),
                _ => None,
            })
            .collect();
        // Duplicate breeds are not collapsed
        assert_eq!(breeds, vec![Breed::Shiba, Breed::Akita, Breed::Shiba]);
    }
}
