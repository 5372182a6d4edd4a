use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, consts};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Dictionary client configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    /// The address to listen on
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DictionaryConfig {
    /// The base URL of the dictionary
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Maximum duration of a single outbound request
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Enable exporting spans over OTLP
    #[serde(default)]
    pub enabled: bool,
    /// The format of log lines written to stdout
    #[serde(default)]
    pub format: Format,
}

/// Output format of the stdout log layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One JSON object per line
    #[default]
    Json,
    /// Multi-line, human-readable output
    Pretty,
    /// Single-line, human-readable output
    Compact,
}

impl Config {
    /// Returns the layered configuration sources: built-in defaults, then the TOML file at
    /// `path` if it exists, then `WORDBOOK_`-prefixed environment variables.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a source contains invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
        Config::figment(path)
            .extract()
            .map_err(|err| Error::Config(Box::new(err)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen: default_listen_addr(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            base_url: default_base_url(),
            timeout: default_http_timeout(),
        }
    }
}

#[must_use]
pub const fn default_listen_addr() -> SocketAddr {
    consts::DEFAULT_LISTEN_ADDR
}

#[must_use]
pub fn default_base_url() -> Url {
    Url::parse(cambridge::client::BASE_URL).expect("valid dictionary url")
}

#[must_use]
pub const fn default_http_timeout() -> Duration {
    consts::HTTP_TIMEOUT
}
