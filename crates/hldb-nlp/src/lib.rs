//! Headline annotation for hldb.
//!
//! Tags person, organization and place names with a rule-based tagger backed
//! by small gazetteers, and labels sentiment from the sign of an AFINN-style
//! lexicon score. Everything here is a pure function of the input text.

pub mod annotate;
pub mod entities;
pub mod scorer;

mod gazetteer;

pub use annotate::annotate_headline;
pub use entities::{extract_entities, EntityKind, TaggedEntity};
pub use scorer::lexicon_score;
