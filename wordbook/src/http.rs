//! HTTP features

mod client {
    use std::time::Duration;

    use crate::consts;

    pub use reqwest::Client;

    /// Returns a default HTTP client builder with the given request `timeout`.
    pub fn builder(timeout: Duration) -> reqwest::ClientBuilder {
        reqwest::ClientBuilder::new()
            .gzip(true)
            .timeout(timeout)
            .user_agent(consts::HTTP_USER_AGENT)
    }
}

use crate::Error;
use crate::config::DictionaryConfig;

pub use client::builder;

/// Builds the HTTP client used for talking to the dictionary.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] if the TLS backend cannot be initialized.
pub fn build_client(config: &DictionaryConfig) -> Result<client::Client, Error> {
    client::builder(config.timeout)
        .build()
        .map_err(Error::HttpClient)
}

/// Builds a dictionary client from `config`.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] if the underlying HTTP client cannot be built.
pub fn build_dictionary(config: &DictionaryConfig) -> Result<cambridge::Client, Error> {
    let client = build_client(config)?;

    Ok(cambridge::Client::with_base_url(
        client,
        config.base_url.clone(),
    ))
}
