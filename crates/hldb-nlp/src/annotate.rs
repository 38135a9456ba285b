//! Combines entity tagging and sentiment scoring into one annotation.

use hldb_core::{Annotation, SentimentLabel};

use crate::entities::{extract_entities, EntityKind};
use crate::scorer::lexicon_score;

/// Order in which entity classes are concatenated into the output list.
const KIND_ORDER: [EntityKind; 3] = [
    EntityKind::Person,
    EntityKind::Organization,
    EntityKind::Place,
];

/// Annotate one headline.
///
/// Entities are listed people first, then organizations, then places; within
/// a class they keep text order. The entity class itself is dropped and
/// duplicates are kept. The label follows the sign of [`lexicon_score`].
#[must_use]
pub fn annotate_headline(text: &str) -> Annotation {
    let tagged = extract_entities(text);
    let entities = KIND_ORDER
        .iter()
        .flat_map(|kind| {
            tagged
                .iter()
                .filter(move |e| e.kind == *kind)
                .map(|e| e.text.clone())
        })
        .collect();

    Annotation {
        entities,
        sentiment: SentimentLabel::from_score(lexicon_score(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_are_grouped_people_then_orgs_then_places() {
        let annotation = annotate_headline("melbourne fans cheer as qantas flies john howard home");
        assert_eq!(
            annotation.entities,
            vec![
                "john howard".to_string(),
                "qantas".to_string(),
                "melbourne".to_string(),
            ]
        );
    }

    #[test]
    fn positive_headline() {
        let annotation = annotate_headline("Acme Corp wins export award");
        assert_eq!(annotation.entities, vec!["Acme Corp".to_string()]);
        assert_eq!(annotation.sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn negative_headline() {
        let annotation = annotate_headline("Acme Corp faces lawsuit");
        assert_eq!(annotation.sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn headline_without_lexicon_words_is_neutral() {
        let annotation = annotate_headline("council considers new parking meters");
        assert!(annotation.entities.is_empty());
        assert_eq!(annotation.sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn annotation_is_deterministic() {
        let text = "floods hit queensland as premier bligh warns of more rain";
        assert_eq!(annotate_headline(text), annotate_headline(text));
    }
}
