//! Extraction of definitions from dictionary pages.
//!
//! The dictionary has served at least three different page layouts over time, and no single
//! set of selectors matches all of them. Each layout is read by its own strategy and the
//! strategies are tried in a fixed order until one of them finds something. Results are never
//! merged across layouts.

use std::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::debug;
use url::Url;

use crate::Error;
use crate::document::{Document, first_in, next_sibling, trimmed_text};
use crate::pronunciation::extract_pronunciation;
use crate::types::{Definition, DictionaryEntry, PartOfSpeech};

/// The part of speech assigned to idiom blocks, which carry no label of their own.
pub const IDIOM: &str = "idiom";

macro_rules! selector {
    ($name:ident, $css:literal) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect(concat!("selector ", $css)));
    };
}

selector!(DICTIONARY_SECTION, "div.pr.dictionary");
selector!(IDIOM_BLOCK, "div.idiom-block");
selector!(IDIOM_TITLE, "div.idiom-title");
selector!(ENTRY_BODY, "div.entry-body");
selector!(POS_HEADER, "div.pos-header");
selector!(POS, "span.pos");
selector!(POS_BODY, "div.pos-body");
selector!(DEF_BLOCK, "div.def-block");
selector!(SENSE_BLOCK, "div.sense-block");
selector!(DEF, "div.def");
selector!(EXAMPLE, "div.examp");

/// A known page layout.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Layout {
    /// Standard `pr dictionary` sections, each with a part of speech header.
    Dictionary,
    /// Idiom and phrasal verb pages made of `idiom-block` containers.
    Idiom,
    /// Older pages where part of speech headers are followed by a `pos-body`.
    EntryBody,
}

/// A strategy that reads the parts of speech of one layout from a document.
pub type Strategy<'a> = &'a dyn Fn(&Document) -> Vec<PartOfSpeech>;

/// The outcome of a successful extraction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Extraction {
    /// The layout whose strategy produced the result.
    pub layout: Layout,
    /// The parts of speech found, never empty.
    pub parts_of_speech: Vec<PartOfSpeech>,
}

impl Layout {
    /// Reads the parts of speech of this layout from `document`.
    #[must_use]
    pub fn parts_of_speech(self, document: &Document) -> Vec<PartOfSpeech> {
        match self {
            Layout::Dictionary => dictionary_sections(document),
            Layout::Idiom => idiom_blocks(document),
            Layout::EntryBody => entry_bodies(document),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::Dictionary => "dictionary",
            Layout::Idiom => "idiom",
            Layout::EntryBody => "entry-body",
        };

        f.write_str(name)
    }
}

/// Runs `strategies` in order and returns the result of the first one that finds at least one
/// part of speech. Strategies after the first match are never called.
pub fn first_match(
    document: &Document,
    strategies: &[(Layout, Strategy<'_>)],
) -> Option<Extraction> {
    strategies.iter().find_map(|(layout, strategy)| {
        let parts_of_speech = strategy(document);

        if parts_of_speech.is_empty() {
            debug!(%layout, "layout did not match");
            None
        } else {
            Some(Extraction {
                layout: *layout,
                parts_of_speech,
            })
        }
    })
}

/// Extracts the parts of speech from `document` using every known layout.
#[must_use]
pub fn extract_parts_of_speech(document: &Document) -> Option<Extraction> {
    let strategies: [(Layout, Strategy<'_>); 3] = [
        (Layout::Dictionary, &dictionary_sections),
        (Layout::Idiom, &idiom_blocks),
        (Layout::EntryBody, &entry_bodies),
    ];

    first_match(document, &strategies)
}

/// Extracts a complete dictionary entry for `word` from `document`.
///
/// Relative audio references are resolved against `origin`.
///
/// # Errors
///
/// Returns [`Error::NoDefinitionsFound`] if none of the known layouts yield a single
/// definition. A word missing from the dictionary and a page in an unknown layout are
/// indistinguishable.
pub fn extract_entry(
    document: &Document,
    word: &str,
    origin: &Url,
) -> Result<DictionaryEntry, Error> {
    let Extraction {
        layout,
        parts_of_speech,
    } = extract_parts_of_speech(document).ok_or(Error::NoDefinitionsFound)?;
    let pronunciation = extract_pronunciation(document, origin);

    debug!(%word, %layout, num_parts_of_speech = parts_of_speech.len(), "extracted entry");

    Ok(DictionaryEntry {
        word: word.to_string(),
        pronunciation: pronunciation.ipa,
        audio_url: pronunciation.audio_url,
        parts_of_speech,
    })
}

/// Reads `div.pr.dictionary` sections.
fn dictionary_sections(document: &Document) -> Vec<PartOfSpeech> {
    document
        .select(&DICTIONARY_SECTION)
        .filter_map(|section| {
            let header = first_in(section, &POS_HEADER)?;
            let kind = first_in(header, &POS).and_then(label)?;

            part_of_speech(kind, definitions(section.select(&DEF_BLOCK)))
        })
        .collect()
}

/// Reads `div.idiom-block` containers that have a title.
fn idiom_blocks(document: &Document) -> Vec<PartOfSpeech> {
    document
        .select(&IDIOM_BLOCK)
        .filter_map(|block| {
            first_in(block, &IDIOM_TITLE)?;

            part_of_speech(IDIOM.to_string(), definitions(block.select(&DEF_BLOCK)))
        })
        .collect()
}

/// Reads the part of speech headers of `div.entry-body` containers, pairing each one with its
/// nearest following `div.pos-body` sibling.
fn entry_bodies(document: &Document) -> Vec<PartOfSpeech> {
    document
        .select(&ENTRY_BODY)
        .flat_map(|body| body.select(&POS_HEADER))
        .filter_map(|header| {
            let kind = first_in(header, &POS).and_then(label)?;
            let pos_body = next_sibling(header, &POS_BODY)?;

            part_of_speech(kind, definitions(pos_body.select(&SENSE_BLOCK)))
        })
        .collect()
}

/// Returns the trimmed label text of `elem`, or `None` if it is blank.
fn label(elem: ElementRef<'_>) -> Option<String> {
    let text = trimmed_text(elem);

    (!text.is_empty()).then_some(text)
}

fn part_of_speech(kind: String, definitions: Vec<Definition>) -> Option<PartOfSpeech> {
    (!definitions.is_empty()).then_some(PartOfSpeech { kind, definitions })
}

fn definitions<'a>(blocks: impl Iterator<Item = ElementRef<'a>>) -> Vec<Definition> {
    blocks.filter_map(definition).collect()
}

/// Reads a single definition block. Blocks without a `div.def` are skipped.
fn definition(block: ElementRef<'_>) -> Option<Definition> {
    let text = first_in(block, &DEF).map(trimmed_text)?;
    let examples = block.select(&EXAMPLE).map(trimmed_text).collect();

    Some(Definition { text, examples })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const RUN: &str = include_str!("../tests/fixtures/pages/run.html");
    const IDIOM_PAGE: &str = include_str!("../tests/fixtures/pages/break-the-ice.html");
    const ENTRY_BODY_PAGE: &str = include_str!("../tests/fixtures/pages/entry-body.html");
    const NOT_FOUND: &str = include_str!("../tests/fixtures/pages/not-found.html");

    fn origin() -> Url {
        Url::parse("https://dictionary.cambridge.org").unwrap()
    }

    #[test]
    fn test_extract_dictionary_layout() {
        let document = Document::from_html(RUN);
        let entry = extract_entry(&document, "run", &origin()).expect("entry");

        assert_eq!(entry.word, "run");
        assert_eq!(entry.pronunciation, "rʌn");
        assert_eq!(
            entry.audio_url,
            "https://dictionary.cambridge.org/media/english/uk_pron/run.mp3"
        );

        let kinds: Vec<&str> = entry
            .parts_of_speech
            .iter()
            .map(|pos| pos.kind.as_str())
            .collect();
        assert_eq!(kinds, ["verb", "noun"]);

        let verb = &entry.parts_of_speech[0];
        assert_eq!(verb.definitions.len(), 2);
        assert_eq!(verb.definitions[0].text, "to move quickly");
        assert_eq!(verb.definitions[0].examples, ["she ran to the store"]);
        assert_eq!(verb.definitions[1].text, "to be in control of something");
        assert_eq!(
            verb.definitions[1].examples,
            ["He runs a restaurant.", "She ran the company for ten years."]
        );

        let noun = &entry.parts_of_speech[1];
        assert_eq!(noun.definitions.len(), 1);
        assert!(noun.definitions[0].examples.is_empty());
    }

    #[test]
    fn test_dictionary_layout_skips_later_strategies() {
        let document = Document::from_html(RUN);
        let idiom_calls = Cell::new(0);
        let entry_body_calls = Cell::new(0);
        let idiom = |document: &Document| {
            idiom_calls.set(idiom_calls.get() + 1);
            idiom_blocks(document)
        };
        let entry_body = |document: &Document| {
            entry_body_calls.set(entry_body_calls.get() + 1);
            entry_bodies(document)
        };

        let strategies: [(Layout, Strategy<'_>); 3] = [
            (Layout::Dictionary, &dictionary_sections),
            (Layout::Idiom, &idiom),
            (Layout::EntryBody, &entry_body),
        ];
        let extraction = first_match(&document, &strategies).expect("extraction");

        assert_eq!(extraction.layout, Layout::Dictionary);
        assert_eq!(idiom_calls.get(), 0);
        assert_eq!(entry_body_calls.get(), 0);
    }

    #[test]
    fn test_dictionary_layout_matches_document_order() {
        let document = Document::from_html(RUN);
        let extraction = extract_parts_of_speech(&document).expect("extraction");
        let texts: Vec<&str> = extraction
            .parts_of_speech
            .iter()
            .flat_map(|pos| pos.definitions.iter().map(|def| def.text.as_str()))
            .collect();

        assert_eq!(
            texts,
            [
                "to move quickly",
                "to be in control of something",
                "an act of running"
            ]
        );
    }

    #[test]
    fn test_extract_idiom_layout() {
        let document = Document::from_html(IDIOM_PAGE);
        let extraction = extract_parts_of_speech(&document).expect("extraction");

        assert_eq!(extraction.layout, Layout::Idiom);
        assert_eq!(extraction.parts_of_speech.len(), 1);

        let idiom = &extraction.parts_of_speech[0];
        assert_eq!(idiom.kind, IDIOM);
        assert_eq!(
            idiom.definitions[0].text,
            "to make people who have not met before feel more relaxed with each other"
        );
        assert_eq!(
            idiom.definitions[0].examples,
            ["Someone suggested we play a party game to break the ice."]
        );
    }

    #[test]
    fn test_extract_entry_body_layout() {
        let document = Document::from_html(ENTRY_BODY_PAGE);
        let entry = extract_entry(&document, "over the moon", &origin()).expect("entry");

        assert_eq!(entry.pronunciation, "");
        assert_eq!(entry.audio_url, "");
        assert_eq!(
            entry.parts_of_speech,
            [PartOfSpeech {
                kind: "idiom".to_string(),
                definitions: vec![Definition {
                    text: "very pleased".to_string(),
                    examples: vec!["I'm over the moon about my new job.".to_string()],
                }],
            }]
        );
        assert_eq!(
            extract_parts_of_speech(&document).map(|e| e.layout),
            Some(Layout::EntryBody)
        );
    }

    #[test]
    fn test_extract_without_definitions_fails() {
        let document = Document::from_html(NOT_FOUND);
        let result = extract_entry(&document, "qwertyuiop", &origin());

        assert!(matches!(result, Err(Error::NoDefinitionsFound)));
    }

    #[test]
    fn test_extract_is_deterministic() {
        let first = extract_entry(&Document::from_html(RUN), "run", &origin()).unwrap();
        let second = extract_entry(&Document::from_html(RUN), "run", &origin()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sections_without_label_or_definitions_are_dropped() {
        let document = Document::from_html(
            r#"<div class="pr dictionary">
                 <div class="def-block"><div class="def">unlabelled</div></div>
               </div>
               <div class="pr dictionary">
                 <div class="pos-header"><span class="pos">noun</span></div>
                 <div class="def-block"><div class="examp">example without def</div></div>
               </div>
               <div class="pr dictionary">
                 <div class="pos-header"><span class="pos"> adjective </span></div>
                 <div class="def-block"><div class="def"> fast </div></div>
               </div>"#,
        );
        let parts = Layout::Dictionary.parts_of_speech(&document);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].kind, "adjective");
        assert_eq!(parts[0].definitions[0].text, "fast");
    }

    #[test]
    fn test_idiom_blocks_without_title_are_skipped() {
        let document = Document::from_html(
            r#"<div class="idiom-block">
                 <div class="def-block"><div class="def">untitled</div></div>
               </div>"#,
        );

        assert!(Layout::Idiom.parts_of_speech(&document).is_empty());
    }

    #[test]
    fn test_entry_body_header_without_pos_body_is_skipped() {
        let document = Document::from_html(
            r#"<div class="entry-body">
                 <div class="pos-header"><span class="pos">verb</span></div>
               </div>"#,
        );

        assert!(Layout::EntryBody.parts_of_speech(&document).is_empty());
    }

    #[test]
    fn test_entry_body_header_does_not_borrow_next_entry_body() {
        let document = Document::from_html(
            r#"<div class="entry-body">
                 <div class="entry-body__el">
                   <div class="pos-header"><span class="pos">noun</span></div>
                 </div>
                 <div class="entry-body__el">
                   <div class="pos-header"><span class="pos">verb</span></div>
                   <div class="pos-body">
                     <div class="sense-block"><div class="def">to move quickly</div></div>
                   </div>
                 </div>
               </div>"#,
        );
        let parts = Layout::EntryBody.parts_of_speech(&document);

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].kind, "verb");
        assert_eq!(parts[0].definitions[0].text, "to move quickly");
    }
}
