//! Splitting raw dataset lines into `(date, headline)` rows.

/// Column separator for dataset lines.
pub const FIELD_DELIMITER: char = ',';

/// One accepted input line. The headline is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub headline: String,
}

/// Parse one dataset line.
///
/// Returns `None` when the line does not split into exactly two columns or
/// when the headline column is blank after trimming. The date column is
/// kept verbatim.
#[must_use]
pub fn parse_row(line: &str) -> Option<RawRow> {
    let mut columns = line.split(FIELD_DELIMITER);
    let date = columns.next()?;
    let headline = columns.next()?;
    if columns.next().is_some() {
        return None;
    }

    let headline = headline.trim();
    if headline.is_empty() {
        return None;
    }

    Some(RawRow {
        date: date.to_string(),
        headline: headline.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_columns_produce_a_row() {
        let row = parse_row("20030219,aba decides against community broadcasting licence");
        assert_eq!(
            row,
            Some(RawRow {
                date: "20030219".to_string(),
                headline: "aba decides against community broadcasting licence".to_string(),
            })
        );
    }

    #[test]
    fn single_column_is_discarded() {
        assert_eq!(parse_row("2020-01-01"), None);
    }

    #[test]
    fn three_columns_are_discarded() {
        assert_eq!(parse_row("2020-01-01,acme, inc. expands"), None);
    }

    #[test]
    fn empty_line_is_discarded() {
        assert_eq!(parse_row(""), None);
    }

    #[test]
    fn blank_headline_is_discarded() {
        assert_eq!(parse_row("2020-01-01,"), None);
        assert_eq!(parse_row("2020-01-01,   \t "), None);
        assert_eq!(parse_row("2020-01-01,\r"), None);
    }

    #[test]
    fn headline_is_trimmed_but_date_is_verbatim() {
        let row = parse_row(" 2020-01-01 ,  Acme opens new office \r").unwrap();
        assert_eq!(row.date, " 2020-01-01 ");
        assert_eq!(row.headline, "Acme opens new office");
    }

    #[test]
    fn header_line_is_treated_like_any_other_row() {
        let row = parse_row("publish_date,headline_text").unwrap();
        assert_eq!(row.date, "publish_date");
        assert_eq!(row.headline, "headline_text");
    }
}
