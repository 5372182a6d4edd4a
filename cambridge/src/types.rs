//! Structured types
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a complete dictionary entry from the Cambridge Dictionary
///
/// This is the main struct that contains all information about a single word, including its
/// UK pronunciation and every part of speech with its definitions.
///
/// An entry is only ever constructed when at least one part of speech carries at least one
/// definition.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DictionaryEntry {
    /// The word as it was requested by the caller
    pub word: String,

    /// Phonetic transcription in IPA notation
    /// Examples: "rʌn"
    /// Parsed from `<span class="ipa">` inside the UK pronunciation block, empty if absent
    pub pronunciation: String,

    /// Absolute URL to the UK pronunciation MP3, empty if absent
    pub audio_url: String,

    /// Every part of speech in the order it appears on the page
    pub parts_of_speech: Vec<PartOfSpeech>,
}

/// A part of speech with its definitions
///
/// # HTML Source
/// Parsed from `<span class="pos">` headers, or synthesized as `idiom` for idiom blocks
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartOfSpeech {
    /// The label of the part of speech
    ///
    /// Examples: `noun`, `verb`, `idiom`
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,

    /// Definitions in document order, never empty
    pub definitions: Vec<Definition>,
}

/// A single sense of a word
///
/// # HTML Source
/// Parsed from `<div class="def-block">` or `<div class="sense-block">` elements
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Definition {
    /// The actual definition text explaining the word's meaning
    /// Parsed from `<div class="def">` element
    pub text: String,

    /// Example sentences demonstrating usage
    /// Parsed from `<div class="examp">` elements
    pub examples: Vec<String>,
}

/// The UK pronunciation of a word
///
/// Both fields are empty when the page has no pronunciation block.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pronunciation {
    /// Phonetic transcription in IPA notation, taken verbatim from the page
    pub ipa: String,
    /// Absolute URL to the MP3 pronunciation file
    pub audio_url: String,
}

impl DictionaryEntry {
    /// Returns the total number of definitions across all parts of speech.
    #[must_use]
    pub fn num_definitions(&self) -> usize {
        self.parts_of_speech
            .iter()
            .map(|pos| pos.definitions.len())
            .sum()
    }
}
