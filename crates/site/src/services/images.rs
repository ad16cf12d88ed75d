//! Image host client.
//!
//! Product photos are never stored locally; they are posted to an external
//! image host which returns a hosted URL. The host speaks a small JSON
//! envelope: a success flag, sized URLs on success, and a message on failure.
//! The credential travels as a query-string parameter on every upload.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::ImageHostConfig;

/// Error type for image host operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    /// Transport-level failure talking to the host.
    #[error("image host request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The host answered but rejected the upload.
    #[error("image host rejected upload: {0}")]
    Rejected(String),
}

/// Response envelope returned by the image host.
#[derive(Debug, Deserialize)]
struct UploadEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<UploadData>,
    error: Option<UploadFailure>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: Option<String>,
    medium: Option<SizedImage>,
}

#[derive(Debug, Deserialize)]
struct SizedImage {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadFailure {
    message: Option<String>,
}

/// Client for the external image host.
#[derive(Clone)]
pub struct ImageHostClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl ImageHostClient {
    /// Create a new image host client.
    #[must_use]
    pub fn new(config: &ImageHostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Upload a single file and return its hosted URL.
    ///
    /// Prefers the medium-resolution URL when the host offers one, falling
    /// back to the primary URL.
    ///
    /// # Errors
    ///
    /// Returns `ImageHostError::Http` on transport failure and
    /// `ImageHostError::Rejected` (carrying the host's message when it sent
    /// one) when the host refuses the upload.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ImageHostError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_owned());
        let form = reqwest::multipart::Form::new().part("image", part);

        let envelope: UploadEnvelope = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.expose_secret())])
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;

        hosted_url(envelope)
    }

    /// Upload a batch of files concurrently.
    ///
    /// Failed uploads are logged as warnings and skipped; the returned URLs
    /// preserve the input order regardless of completion order.
    pub async fn upload_all(&self, files: Vec<(String, Vec<u8>)>) -> Vec<String> {
        let uploads = files.into_iter().map(|(filename, bytes)| async move {
            let result = self.upload(&filename, bytes).await;
            (filename, result)
        });

        collect_hosted(futures::future::join_all(uploads).await)
    }
}

/// Pick the hosted URL out of a response envelope.
fn hosted_url(envelope: UploadEnvelope) -> Result<String, ImageHostError> {
    if envelope.success {
        if let Some(data) = envelope.data
            && let Some(url) = data.medium.and_then(|medium| medium.url).or(data.url)
        {
            return Ok(url);
        }
        return Err(ImageHostError::Rejected(
            "response carried no image URL".to_owned(),
        ));
    }

    let message = envelope
        .error
        .and_then(|failure| failure.message)
        .unwrap_or_else(|| "upload failed".to_owned());
    Err(ImageHostError::Rejected(message))
}

/// Keep the successful URLs in input order, logging a warning per failure.
fn collect_hosted(results: Vec<(String, Result<String, ImageHostError>)>) -> Vec<String> {
    results
        .into_iter()
        .filter_map(|(filename, result)| match result {
            Ok(url) => Some(url),
            Err(error) => {
                tracing::warn!(%filename, %error, "image upload failed, skipping file");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn envelope(json: serde_json::Value) -> UploadEnvelope {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_hosted_url_prefers_medium() {
        let url = hosted_url(envelope(serde_json::json!({
            "success": true,
            "data": {
                "url": "https://img.example/full.jpg",
                "medium": { "url": "https://img.example/medium.jpg" }
            }
        })))
        .unwrap();
        assert_eq!(url, "https://img.example/medium.jpg");
    }

    #[test]
    fn test_hosted_url_falls_back_to_primary() {
        let url = hosted_url(envelope(serde_json::json!({
            "success": true,
            "data": { "url": "https://img.example/full.jpg" }
        })))
        .unwrap();
        assert_eq!(url, "https://img.example/full.jpg");
    }

    #[test]
    fn test_hosted_url_carries_host_message() {
        let result = hosted_url(envelope(serde_json::json!({
            "success": false,
            "error": { "message": "Invalid API key" }
        })));
        match result {
            Err(ImageHostError::Rejected(message)) => assert_eq!(message, "Invalid API key"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_hosted_url_generic_fallback_message() {
        let result = hosted_url(envelope(serde_json::json!({ "success": false })));
        match result {
            Err(ImageHostError::Rejected(message)) => assert_eq!(message, "upload failed"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_hosted_url_success_without_url_is_rejected() {
        let result = hosted_url(envelope(serde_json::json!({
            "success": true,
            "data": {}
        })));
        assert!(matches!(result, Err(ImageHostError::Rejected(_))));
    }

    #[test]
    fn test_collect_hosted_skips_failures_preserving_order() {
        // Batch of 3 where the middle file fails: 2 URLs, input order kept
        let results = vec![
            (
                "one.jpg".to_owned(),
                Ok("https://img.example/1.jpg".to_owned()),
            ),
            (
                "two.jpg".to_owned(),
                Err(ImageHostError::Rejected("too large".to_owned())),
            ),
            (
                "three.jpg".to_owned(),
                Ok("https://img.example/3.jpg".to_owned()),
            ),
        ];

        let urls = collect_hosted(results);
        assert_eq!(
            urls,
            vec![
                "https://img.example/1.jpg".to_owned(),
                "https://img.example/3.jpg".to_owned(),
            ]
        );
    }

    #[test]
    fn test_collect_hosted_all_failed_is_empty() {
        let results = vec![(
            "one.jpg".to_owned(),
            Err(ImageHostError::Rejected("nope".to_owned())),
        )];
        assert!(collect_hosted(results).is_empty());
    }
}
