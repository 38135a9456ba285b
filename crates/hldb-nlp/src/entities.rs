//! Rule-based tagging of person, organization and place names.
//!
//! Works on both sentence-case headlines ("Qantas cuts jobs in Sydney") and
//! the all-lowercase headlines common in news archives ("qantas cuts jobs in
//! sydney"). Capitalization is only trusted when the headline is not title
//! case; otherwise the tagger falls back to gazetteers and name cues.

use std::sync::LazyLock;

use regex::Regex;

use crate::gazetteer::{
    GIVEN_NAME_SET, HONORIFIC_SET, MAX_PHRASE_TOKENS, NON_NAME_WORD_SET, ORG_SET,
    ORG_SUFFIX_SET, PLACE_SET, STOP_WORD_SET,
};
use crate::scorer::is_sentiment_word;

/// Longest run of capitalized tokens taken as a single person name.
const MAX_NAME_TOKENS: usize = 3;

/// Longest run of capitalized tokens scanned for an organization suffix.
const MAX_ORG_TOKENS: usize = 5;

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}](?:[\p{L}\p{M}\p{N}'\u{2019}&.\-]*[\p{L}\p{M}\p{N}])?")
        .expect("valid word regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Organization,
    Place,
}

/// A recognized name and where it starts in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEntity {
    /// Surface text exactly as written in the headline.
    pub text: String,
    pub kind: EntityKind,
    /// Byte offset of the first character.
    pub offset: usize,
}

#[derive(Debug)]
struct Token<'a> {
    surface: &'a str,
    /// Lowercased, dots removed, curly apostrophes normalized.
    key: String,
    start: usize,
    end: usize,
    capitalized: bool,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    WORD.find_iter(text)
        .map(|m| {
            let raw = m.as_str();
            let trimmed = raw
                .strip_suffix("'s")
                .or_else(|| raw.strip_suffix("\u{2019}s"))
                .filter(|s| !s.is_empty())
                .unwrap_or(raw);
            let start = m.start();
            let end = start + trimmed.len();
            let surface = &text[start..end];
            Token {
                surface,
                key: surface.to_lowercase().replace('\u{2019}', "'").replace('.', ""),
                start,
                end,
                capitalized: surface.chars().next().is_some_and(char::is_uppercase),
            }
        })
        .collect()
}

/// Title-case headlines capitalize every content word, so capitalization
/// carries no signal for them.
fn is_title_case(tokens: &[Token<'_>]) -> bool {
    let content: Vec<&Token<'_>> = tokens
        .iter()
        .filter(|t| t.key.chars().count() >= 4 && t.surface.starts_with(char::is_alphabetic))
        .collect();
    content.len() >= 3 && content.iter().all(|t| t.capitalized)
}

struct Span {
    start: usize,
    end: usize,
    kind: EntityKind,
}

struct Tagger<'t, 'a> {
    tokens: &'t [Token<'a>],
    cased: bool,
}

impl Tagger<'_, '_> {
    fn key(&self, i: usize) -> &str {
        &self.tokens[i].key
    }

    fn is_stop(&self, i: usize) -> bool {
        STOP_WORD_SET.contains(self.key(i))
    }

    /// Words that end a name in lowercase text.
    fn is_blocker(&self, i: usize) -> bool {
        let key = self.key(i);
        STOP_WORD_SET.contains(key) || NON_NAME_WORD_SET.contains(key) || is_sentiment_word(key)
    }

    fn is_org_suffix(&self, i: usize) -> bool {
        ORG_SUFFIX_SET.contains(self.key(i))
    }

    fn is_honorific(&self, i: usize) -> bool {
        HONORIFIC_SET.contains(self.key(i))
    }

    fn is_given_name(&self, i: usize) -> bool {
        GIVEN_NAME_SET.contains(self.key(i))
    }

    fn name_like(&self, i: usize) -> bool {
        self.cased && self.tokens[i].capitalized && !self.is_stop(i)
    }

    /// Longest gazetteer phrase starting at `i`, as `(len, kind)`.
    fn phrase_at(&self, i: usize) -> Option<(usize, EntityKind)> {
        if self.cased && !self.tokens[i].capitalized {
            return None;
        }
        let max = MAX_PHRASE_TOKENS.min(self.tokens.len() - i);
        (1..=max).rev().find_map(|len| {
            let phrase = self.tokens[i..i + len]
                .iter()
                .map(|t| t.key.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if PLACE_SET.contains(phrase.as_str()) {
                Some((len, EntityKind::Place))
            } else if ORG_SET.contains(phrase.as_str()) {
                Some((len, EntityKind::Organization))
            } else {
                None
            }
        })
    }

    fn capitalized_run_end(&self, start: usize, max_len: usize) -> usize {
        let mut end = start;
        while end < self.tokens.len() && end - start < max_len && self.name_like(end) {
            end += 1;
        }
        end
    }

    /// End of a person name starting at `start`, if one starts there.
    fn name_end(&self, start: usize) -> Option<usize> {
        if start >= self.tokens.len() || self.is_stop(start) || self.phrase_at(start).is_some() {
            return None;
        }

        if self.cased {
            if !self.name_like(start) {
                return None;
            }
            let mut end = start + 1;
            while end < self.tokens.len()
                && end - start < MAX_NAME_TOKENS
                && self.name_like(end)
                && self.phrase_at(end).is_none()
            {
                end += 1;
            }
            return Some(end);
        }

        if self.is_blocker(start) {
            return None;
        }
        let next = start + 1;
        let takes_surname = self.is_given_name(start)
            && next < self.tokens.len()
            && !self.is_blocker(next)
            && !self.is_org_suffix(next)
            && self.phrase_at(next).is_none();
        Some(if takes_surname { next + 1 } else { next })
    }

    fn span_at(&self, i: usize) -> Option<Span> {
        if self.name_like(i) {
            let run_end = self.capitalized_run_end(i, MAX_ORG_TOKENS);
            if let Some(k) = (i + 1..run_end).find(|&k| self.is_org_suffix(k)) {
                return Some(Span {
                    start: i,
                    end: k + 1,
                    kind: EntityKind::Organization,
                });
            }
        }

        if let Some((len, kind)) = self.phrase_at(i) {
            return Some(Span {
                start: i,
                end: i + len,
                kind,
            });
        }

        if self.is_honorific(i) {
            if let Some(end) = self.name_end(i + 1) {
                return Some(Span {
                    start: i + 1,
                    end,
                    kind: EntityKind::Person,
                });
            }
        }

        if self.is_given_name(i) && (!self.cased || self.tokens[i].capitalized) {
            if let Some(end) = self.name_end(i) {
                return Some(Span {
                    start: i,
                    end,
                    kind: EntityKind::Person,
                });
            }
        }

        if self.name_like(i) {
            // Single unknown capitalized words are too often sentence-initial
            // words or common nouns to tag.
            if let Some(end) = self.name_end(i).filter(|&end| end - i >= 2) {
                return Some(Span {
                    start: i,
                    end,
                    kind: EntityKind::Person,
                });
            }
        }

        if !self.cased
            && i + 1 < self.tokens.len()
            && self.is_org_suffix(i + 1)
            && !self.is_blocker(i)
        {
            return Some(Span {
                start: i,
                end: i + 2,
                kind: EntityKind::Organization,
            });
        }

        None
    }
}

/// Tag every person, organization and place name in `text`.
///
/// Spans never overlap. Results are in text order and may repeat the same
/// name when the text does.
#[must_use]
pub fn extract_entities(text: &str) -> Vec<TaggedEntity> {
    let tokens = tokenize(text);
    let tagger = Tagger {
        cased: tokens.iter().any(|t| t.capitalized) && !is_title_case(&tokens),
        tokens: &tokens,
    };

    let mut entities = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match tagger.span_at(i) {
            Some(span) => {
                let first = &tokens[span.start];
                let last = &tokens[span.end - 1];
                entities.push(TaggedEntity {
                    text: text[first.start..last.end].to_string(),
                    kind: span.kind,
                    offset: first.start,
                });
                i = span.end;
            }
            None => i += 1,
        }
    }

    tracing::trace!(found = entities.len(), "tagged headline");
    entities
}
