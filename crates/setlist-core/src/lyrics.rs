//! Lyrics lookup through an HTTP lyrics endpoint
//!
//! The endpoint takes `artist` and `title` query parameters and answers
//! with `{ "lyrics": "..." }`, or `{ "error": "..." }` on failure.

use crate::{error::Error, types::Track, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Text returned when the endpoint answers without lyrics
pub const LYRICS_UNAVAILABLE: &str = "Lyrics not available for this song.";

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    lyrics: Option<String>,
    error: Option<String>,
}

/// Client for the lyrics endpoint
pub struct LyricsClient {
    client: Client,
    endpoint: Url,
}

impl LyricsClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request URL for a lookup
    pub fn request_url(&self, artist: &str, title: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("artist", artist)
            .append_pair("title", title);
        url
    }

    /// Lyrics for the given track
    pub async fn fetch_for(&self, track: &Track) -> Result<String> {
        self.fetch(&track.artist, &track.title).await
    }

    /// Look up lyrics by artist and title
    #[instrument(skip(self))]
    pub async fn fetch(&self, artist: &str, title: &str) -> Result<String> {
        if artist.trim().is_empty() || title.trim().is_empty() {
            return Err(Error::LyricsFetch("Title and artist are required.".to_string()));
        }

        let url = self.request_url(artist, title);
        debug!(%url, "Requesting lyrics");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::LyricsFetch(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::LyricsNotFound {
                artist: artist.to_string(),
                title: title.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::LyricsFetch(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<LyricsResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| status.to_string());
            warn!(%status, %detail, "Lyrics endpoint error");
            return Err(Error::LyricsFetch(detail));
        }

        let parsed: LyricsResponse = serde_json::from_str(&body)?;
        Ok(parsed
            .lyrics
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| LYRICS_UNAVAILABLE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LyricsClient {
        let endpoint = Url::parse(&format!("{}/api/lyrics", server.uri())).unwrap();
        LyricsClient::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_request_url_encodes_params() {
        let endpoint = Url::parse("http://localhost:3000/api/lyrics").unwrap();
        let client = LyricsClient::new(endpoint, Duration::from_secs(1)).unwrap();
        let url = client.request_url("Juice WRLD", "Come & Go");
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/lyrics?artist=Juice+WRLD&title=Come+%26+Go"
        );
    }

    #[tokio::test]
    async fn test_fetch_lyrics() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/lyrics"))
            .and(query_param("artist", "Juice WRLD"))
            .and(query_param("title", "Righteous"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "lyrics": "All white..." })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let lyrics = client.fetch("Juice WRLD", "Righteous").await.unwrap();
        assert_eq!(lyrics, "All white...");
    }

    #[tokio::test]
    async fn test_missing_lyrics_field_uses_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "lyrics": null })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.fetch("A", "B").await.unwrap(), LYRICS_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({ "lyrics": LYRICS_UNAVAILABLE })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch("A", "B").await.unwrap_err();
        assert_eq!(err.error_code(), "LYRICS_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_server_error_carries_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(
                serde_json::json!({ "error": "Genius API token is not configured on the server." }),
            ))
            .mount(&server)
            .await;

        let client = client_for(&server);
        match client.fetch("A", "B").await.unwrap_err() {
            Error::LyricsFetch(msg) => {
                assert_eq!(msg, "Genius API token is not configured on the server.")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_params_rejected_without_request() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        assert!(client.fetch("", "Title").await.is_err());
        assert!(client.fetch("Artist", "  ").await.is_err());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }
}
