//! Domain types for annotated headlines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rows::RawRow;

/// Sentiment label derived from the sign of a lexicon score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Map a signed score to a label. Zero is always `Neutral`.
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => Self::Positive,
            -1 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!("unknown sentiment label: {other}")),
        }
    }
}

/// Output of the annotation engine for one headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// People, then organizations, then places. May contain duplicates.
    pub entities: Vec<String>,
    pub sentiment: SentimentLabel,
}

/// A headline together with its entities and sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRecord {
    /// Carried verbatim from the input row.
    pub date: String,
    /// Trimmed, never empty.
    pub headline: String,
    pub entities: Vec<String>,
    pub sentiment_label: SentimentLabel,
}

impl AnnotatedRecord {
    #[must_use]
    pub fn new(row: RawRow, annotation: Annotation) -> Self {
        Self {
            date: row.date,
            headline: row.headline,
            entities: annotation.entities,
            sentiment_label: annotation.sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_sign_maps_to_label() {
        assert_eq!(SentimentLabel::from_score(7), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(1), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(i32::MIN), SentimentLabel::Negative);
    }

    #[test]
    fn zero_score_is_exactly_neutral() {
        assert_eq!(SentimentLabel::from_score(0), SentimentLabel::Neutral);
    }

    #[test]
    fn label_string_round_trips() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            assert_eq!(label.as_str().parse::<SentimentLabel>(), Ok(label));
        }
        assert!("Positive".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn record_carries_row_and_annotation_fields() {
        let row = RawRow {
            date: "20030219".to_string(),
            headline: "council approves new park".to_string(),
        };
        let annotation = Annotation {
            entities: vec!["Brisbane".to_string()],
            sentiment: SentimentLabel::Positive,
        };
        let record = AnnotatedRecord::new(row, annotation);
        assert_eq!(record.date, "20030219");
        assert_eq!(record.headline, "council approves new park");
        assert_eq!(record.entities, vec!["Brisbane".to_string()]);
        assert_eq!(record.sentiment_label, SentimentLabel::Positive);
    }
}
