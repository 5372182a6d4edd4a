use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("Failed to retrieve data: HTTP {status}")]
    Status {
        /// The url that was requested.
        url: String,
        /// The status code returned by the server.
        status: reqwest::StatusCode,
    },
    #[error("could not parse markup: {0}")]
    Parse(String),
    #[error("No definitions found for this word")]
    NoDefinitionsFound,
    #[error("no pronunciation audio for this word")]
    MissingAudio,
}

impl Error {
    /// Returns true if the error happened while talking to the dictionary site.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        match self {
            #[cfg(feature = "client")]
            Self::BuildClient(_) | Self::Request(_) | Self::Status { .. } => true,
            _ => false,
        }
    }
}
