use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
///
/// The dictionary turns away clients that don't look like a browser.
pub const HTTP_USER_AGENT: &str = cambridge::client::USER_AGENT;

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The address the HTTP server listens on unless configured otherwise.
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 5000));

/// The prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "WORDBOOK_";
