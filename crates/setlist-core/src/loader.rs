//! Playlist loading
//!
//! Fetches manifest text from a source, runs the parser over it and turns
//! the two failure modes callers care about into errors:
//! - the text could not be retrieved (`ManifestFetch`)
//! - the text produced no tracks (`EmptyPlaylist`)
//!
//! Requests are made once; there is no retry policy here.

use crate::{
    error::Error,
    manifest::{looks_like_manifest, ManifestParser},
    types::Playlist,
    Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Where manifest text comes from
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Retrieve the raw manifest text
    async fn fetch_text(&self) -> Result<String>;

    /// Human readable location, used in logs and errors
    fn describe(&self) -> String;
}

/// Manifest served over HTTP(S)
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ManifestSource for HttpSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_text(&self) -> Result<String> {
        debug!("Fetching playlist manifest");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::ManifestFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ManifestFetch(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::ManifestFetch(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Manifest on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ManifestSource for FileSource {
    async fn fetch_text(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::ManifestFetch(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Manifest text already in memory
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl ManifestSource for StaticSource {
    async fn fetch_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Pick a source for `location`
///
/// `http(s)://` and `file://` URLs are used as given. Anything else is a
/// relative reference: it is joined onto `base` when one is set, and read
/// from disk otherwise.
pub fn source_for(
    location: &str,
    base: Option<&Url>,
    timeout: Duration,
) -> Result<Box<dyn ManifestSource>> {
    if location.trim().is_empty() {
        return Err(Error::InvalidSource("empty playlist location".to_string()));
    }

    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(Box::new(HttpSource::new(url, timeout)?))
        }
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| Error::InvalidSource(format!("not a local file URL: {}", url)))?;
            Ok(Box::new(FileSource::new(path)))
        }
        // Single-letter schemes are Windows drive letters
        Ok(url) if url.scheme().len() > 1 => Err(Error::InvalidSource(format!(
            "unsupported scheme '{}'",
            url.scheme()
        ))),
        _ => match base {
            Some(base) => {
                let url = base.join(location).map_err(|e| {
                    Error::InvalidSource(format!("Invalid URI '{}': {}", location, e))
                })?;
                Ok(Box::new(HttpSource::new(url, timeout)?))
            }
            None => Ok(Box::new(FileSource::new(location))),
        },
    }
}

/// Result of a successful load
#[derive(Debug, Clone, Serialize)]
pub struct LoadedPlaylist {
    pub playlist: Playlist,
    /// Where the manifest came from
    pub source: String,
    /// Info lines dropped because no locator followed them
    pub dropped_entries: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Fetch-and-parse front end for the manifest parser
#[derive(Debug, Clone, Default)]
pub struct PlaylistLoader {
    parser: ManifestParser,
}

impl PlaylistLoader {
    pub fn new(parser: ManifestParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &ManifestParser {
        &self.parser
    }

    /// Fetch and parse; an empty result is reported as an error
    pub async fn load(&self, source: &dyn ManifestSource) -> Result<LoadedPlaylist> {
        let name = source.describe();
        let text = source.fetch_text().await.map_err(|e| {
            warn!(source = %name, error = %e, "Could not load playlist");
            e
        })?;

        if !text.trim().is_empty() && !looks_like_manifest(&text) {
            warn!(source = %name, "Content has no #EXTINF entries");
        }

        let report = self.parser.parse_with_report(&text);
        if report.playlist.is_empty() {
            return Err(Error::EmptyPlaylist { source_name: name });
        }

        info!(
            source = %name,
            songs = report.playlist.len(),
            dropped = report.dropped_entries,
            "Playlist loaded"
        );

        Ok(LoadedPlaylist {
            playlist: report.playlist,
            source: name,
            dropped_entries: report.dropped_entries,
            loaded_at: Utc::now(),
        })
    }
}
