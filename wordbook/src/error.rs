//! Error types

use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for configuration, startup and serving.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration file or environment contains invalid values.
    #[error("Could not load configuration")]
    #[diagnostic(
        code(wordbook::config),
        help("check the config file and any WORDBOOK_ environment variables")
    )]
    Config(#[source] Box<figment::Error>),
    /// Failed to build the outbound HTTP client.
    #[error("Could not build HTTP client")]
    #[diagnostic(code(wordbook::http_client))]
    HttpClient(#[source] reqwest::Error),
    /// Failed to bind the listening socket.
    #[error("Could not listen on {addr}")]
    #[diagnostic(code(wordbook::bind))]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server stopped with an error.
    #[error("HTTP server failed")]
    Serve(#[source] std::io::Error),
}
