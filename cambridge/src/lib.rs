//! A client and parser for the Cambridge Dictionary.
//!
//! Dictionary pages are fetched with a [`Client`], parsed into a [`Document`] and read by
//! the extractors in [`extract`] and [`pronunciation`].

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

pub mod audio;
#[cfg(feature = "client")]
pub mod client;
pub mod document;
mod error;
pub mod extract;
pub mod pronunciation;
pub mod types;

pub use audio::AudioResource;
#[cfg(feature = "client")]
pub use client::Client;
pub use document::Document;
pub use error::Error;
pub use extract::{Layout, extract_entry};
pub use pronunciation::extract_pronunciation;
pub use types::{Definition, DictionaryEntry, PartOfSpeech, Pronunciation};
