//! A small HTTP service for looking up English words in the Cambridge Dictionary and proxying
//! their pronunciation audio.

pub mod config;
pub mod consts;
mod error;
pub mod http;
pub mod routes;
pub mod server;
pub mod tracing;

pub use config::Config;
pub use error::Error;
pub use routes::{AppState, router};
