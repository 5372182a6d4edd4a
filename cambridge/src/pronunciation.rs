//! Extraction of the UK pronunciation block.

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::document::{Document, element_text, first_in};
use crate::types::Pronunciation;

/// The container holding the UK transcription and its audio player.
static UK_PRONUNCIATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.uk.dpron-i").expect("uk pronunciation selector"));
/// The IPA transcription within the pronunciation block.
static IPA: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.ipa").expect("ipa selector"));
/// The MP3 source of the embedded audio player.
static AUDIO_SOURCE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"source[type="audio/mpeg"]"#).expect("audio source selector")
});

/// Extracts the UK pronunciation from `document`.
///
/// Relative audio references are resolved against `origin`. A missing block, transcription
/// or audio source results in empty fields rather than an error.
#[must_use]
pub fn extract_pronunciation(document: &Document, origin: &Url) -> Pronunciation {
    let Some(block) = document.select_first(&UK_PRONUNCIATION) else {
        return Pronunciation::default();
    };

    let ipa = first_in(block, &IPA).map(element_text).unwrap_or_default();
    let audio_url = first_in(block, &AUDIO_SOURCE)
        .and_then(|source| source.attr("src"))
        .map(|src| normalize_audio_url(src, origin))
        .unwrap_or_default();

    Pronunciation { ipa, audio_url }
}

/// Turns an audio `src` attribute into an absolute URL.
///
/// * `//host/a.mp3` becomes `https://host/a.mp3`
/// * `/path/a.mp3` is prefixed with the origin of `origin`
/// * anything else is returned unchanged
#[must_use]
pub fn normalize_audio_url(src: &str, origin: &Url) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with('/') {
        format!("{}{src}", origin.origin().ascii_serialization())
    } else {
        src.to_string()
    }
}
