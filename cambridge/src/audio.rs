//! Pronunciation audio and the placeholder used when it cannot be resolved.

use bytes::Bytes;
use tracing::warn;

use crate::Error;

/// The media type of every audio resource.
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// A short clip of silence, served whenever the real pronunciation is unavailable.
static PLACEHOLDER: &[u8] = include_bytes!("../assets/placeholder.mp3");

/// An MP3 pronunciation clip.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AudioResource {
    /// The raw audio data.
    pub bytes: Bytes,
    /// True if this is the bundled placeholder rather than the real pronunciation.
    pub placeholder: bool,
}

impl AudioResource {
    /// Wraps downloaded audio data.
    #[must_use]
    pub const fn new(bytes: Bytes) -> AudioResource {
        AudioResource {
            bytes,
            placeholder: false,
        }
    }

    /// Returns the bundled placeholder clip.
    #[must_use]
    pub fn placeholder() -> AudioResource {
        AudioResource {
            bytes: Bytes::from_static(PLACEHOLDER),
            placeholder: true,
        }
    }

    /// The media type of the clip, which is always [`AUDIO_MPEG`].
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        AUDIO_MPEG
    }
}

/// Replaces a failed audio resolution with the placeholder.
pub trait OrPlaceholder {
    /// Returns the resolved audio, or the placeholder if resolution failed.
    fn or_placeholder(self, word: &str) -> AudioResource;
}

impl OrPlaceholder for Result<AudioResource, Error> {
    fn or_placeholder(self, word: &str) -> AudioResource {
        self.unwrap_or_else(|err| {
            warn!(%word, error = %err, "could not resolve audio, serving placeholder");

            AudioResource::placeholder()
        })
    }
}
