//! A client for querying the Cambridge Dictionary (dictionary.cambridge.org).
//!
//! This module provides a high-level async interface for fetching dictionary pages, parsing
//! them into structured entries, and downloading pronunciation audio.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{ClientBuilder, StatusCode, header};
use tracing::debug;
use url::Url;

use crate::audio::{AudioResource, OrPlaceholder};
use crate::document::Document;
use crate::extract::extract_entry;
use crate::pronunciation::extract_pronunciation;
use crate::{DictionaryEntry, Error};

/// The base URL of the dictionary.
pub const BASE_URL: &str = "https://dictionary.cambridge.org";
/// The path of the English dictionary, relative to the base URL.
const DICTIONARY_PATH: &str = "/dictionary/english/";
/// The `User-Agent` header sent with every request. The dictionary rejects requests without a
/// browser agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// An asynchronous client for the Cambridge Dictionary.
///
/// This client handles the construction of HTTP requests, sending them to the dictionary,
/// and parsing the HTML response.
#[derive(Debug, Clone)]
pub struct Client {
    /// The base URL of the dictionary.
    base_url: Url,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
}

impl Client {
    /// Constructs a new `Client` with default settings.
    ///
    /// This method provides a convenient way to create a client. It configures default gzip
    /// support, a browser `User-Agent` and a 30-second timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built. This can happen in environments with
    /// misconfigured network or TLS dependencies. For a non-panicking version, see
    /// [`Client::try_new`].
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// This is the fallible version of [`Client::new`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build. See
    /// [`ClientBuilder::build`] for more details on potential failures.
    pub fn try_new() -> Result<Client, Error> {
        let client = ClientBuilder::new()
            .gzip(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// Every request still carries [`USER_AGENT`], regardless of how `client` is configured.
    ///
    /// # Arguments
    ///
    /// * `client` - An existing `reqwest::Client` instance.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Client {
        let base_url = Url::parse(BASE_URL).expect("valid base url");

        Client { base_url, client }
    }

    /// Constructs a `Client` that queries a different host, such as a mirror or a mock server.
    #[must_use]
    pub const fn with_base_url(client: reqwest::Client, base_url: Url) -> Client {
        Client { base_url, client }
    }

    /// Returns the base URL of the dictionary.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the URL of the dictionary page for `word`.
    ///
    /// The word is lower-cased, spaces are replaced with hyphens and the result is
    /// percent-encoded as a single path segment.
    #[must_use]
    pub fn page_url(&self, word: &str) -> Url {
        let mut url = self
            .base_url
            .join(DICTIONARY_PATH)
            .unwrap_or_else(|_| self.base_url.clone());

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&slug(word));
        }

        url
    }

    /// Fetches the raw dictionary page for `word`.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`]: if the request fails due to network issues or a timeout.
    /// - [`Error::Status`]: if the dictionary responds with anything but `200 OK`.
    pub async fn fetch(&self, word: &str) -> Result<Bytes, Error> {
        let url = self.page_url(word);

        debug!(%word, %url, "fetching dictionary page");

        let response = self
            .client
            .get(url.clone())
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(Error::Request)?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        response.bytes().await.map_err(Error::Request)
    }

    /// Looks up `word` and returns its dictionary entry.
    ///
    /// # Errors
    ///
    /// This function can fail in several ways, returning an [`Error`]:
    /// - [`Error::Request`] or [`Error::Status`]: if the page could not be fetched.
    /// - [`Error::Parse`]: if the page body is not parseable markup.
    /// - [`Error::NoDefinitionsFound`]: if the page contains no definitions in any known
    ///   layout, which is also the case when the word does not exist.
    pub async fn lookup(&self, word: &str) -> Result<DictionaryEntry, Error> {
        let raw = self.fetch(word).await?;

        self.entry_from_page(&raw, word)
    }

    /// Resolves the UK pronunciation audio of `word`.
    ///
    /// This never fails: if the page cannot be fetched, has no pronunciation, or the audio
    /// download fails, the bundled placeholder is returned instead.
    pub async fn resolve_audio(&self, word: &str) -> AudioResource {
        self.try_resolve_audio(word).await.or_placeholder(word)
    }

    /// Resolves the UK pronunciation audio of `word`, returning the reason on failure.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`] or [`Error::Status`]: if the page or the audio could not be fetched.
    /// - [`Error::Parse`]: if the page body is not parseable markup.
    /// - [`Error::MissingAudio`]: if the page has no UK pronunciation audio.
    pub async fn try_resolve_audio(&self, word: &str) -> Result<AudioResource, Error> {
        let raw = self.fetch(word).await?;
        let audio_url = self.audio_url_from_page(&raw)?;

        self.download_audio(&audio_url).await
    }

    /// Downloads the audio at `audio_url`, sending the dictionary as the referrer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the download fails or the server responds with an error
    /// status.
    pub async fn download_audio(&self, audio_url: &str) -> Result<AudioResource, Error> {
        let referer = format!("{}/", self.base_url.origin().ascii_serialization());

        debug!(%audio_url, "downloading audio");

        let response = self
            .client
            .get(audio_url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::REFERER, referer)
            .send()
            .await
            .map_err(Error::Request)?;

        match response.error_for_status() {
            Ok(response) => {
                let bytes = response.bytes().await.map_err(Error::Request)?;

                Ok(AudioResource::new(bytes))
            }
            Err(err) => Err(Error::Request(err)),
        }
    }

    fn entry_from_page(&self, raw: &[u8], word: &str) -> Result<DictionaryEntry, Error> {
        let document = Document::parse(raw)?;

        extract_entry(&document, word, &self.base_url)
    }

    fn audio_url_from_page(&self, raw: &[u8]) -> Result<String, Error> {
        let document = Document::parse(raw)?;
        let pronunciation = extract_pronunciation(&document, &self.base_url);

        if pronunciation.audio_url.is_empty() {
            Err(Error::MissingAudio)
        } else {
            Ok(pronunciation.audio_url)
        }
    }
}

impl Default for Client {
    /// Creates a default `Client` instance.
    ///
    /// This is equivalent to calling [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes `word` into the form the dictionary uses in its page paths.
#[must_use]
pub fn slug(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "-")
}
