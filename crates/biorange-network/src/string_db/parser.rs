// STRING TSV response parser

use biorange_common::types::InteractionRow;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Endpoint column holding the first interactor's preferred name
pub const COLUMN_A: &str = "preferredName_A";

/// Endpoint column holding the second interactor's preferred name
pub const COLUMN_B: &str = "preferredName_B";

/// Why a response body yielded no interactions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ParseFailure {
    #[error("no data received from interaction service")]
    EmptyData,

    #[error("expected column(s) not found in response: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("malformed interaction table: {0}")]
    Malformed(String),
}

/// Parse a tab-separated interaction table into endpoint pairs
///
/// Only the two endpoint columns are kept. Row order and duplicate rows are
/// preserved; other columns are ignored wherever they appear.
pub fn parse_interactions(raw: &str) -> Result<Vec<InteractionRow>, ParseFailure> {
    if raw.trim().is_empty() {
        warn!("Interaction response is empty");
        return Err(ParseFailure::EmptyData);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseFailure::Malformed(e.to_string()))?
        .clone();

    let index_a = headers.iter().position(|h| h.trim() == COLUMN_A);
    let index_b = headers.iter().position(|h| h.trim() == COLUMN_B);

    let (index_a, index_b) = match (index_a, index_b) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            let mut missing = Vec::new();
            if a.is_none() {
                missing.push(COLUMN_A.to_string());
            }
            if b.is_none() {
                missing.push(COLUMN_B.to_string());
            }
            warn!(missing = ?missing, "Expected columns not found in interaction response");
            return Err(ParseFailure::MissingColumns(missing));
        },
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            warn!(error = %e, "Malformed interaction row");
            ParseFailure::Malformed(e.to_string())
        })?;

        // Both indices come from the header and csv rejects ragged rows
        let (Some(a), Some(b)) = (record.get(index_a), record.get(index_b)) else {
            return Err(ParseFailure::Malformed(format!(
                "row {} lacks endpoint fields",
                rows.len() + 1
            )));
        };
        rows.push(InteractionRow::new(a.trim(), b.trim()));
    }

    if rows.is_empty() {
        warn!("Interaction response has a header but no rows");
        return Err(ParseFailure::EmptyData);
    }

    debug!(rows = rows.len(), "Parsed interaction rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "stringId_A\tstringId_B\tpreferredName_A\tpreferredName_B\tncbiTaxonId\tscore\n\
9606.ENSP1\t9606.ENSP2\tTP53\tAKT1\t9606\t0.999\n\
9606.ENSP1\t9606.ENSP3\tTP53\tEGFR\t9606\t0.95\n\
9606.ENSP1\t9606.ENSP2\tTP53\tAKT1\t9606\t0.999\n";

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let rows = parse_interactions(SAMPLE).expect("sample should parse");
        assert_eq!(
            rows,
            vec![
                InteractionRow::new("TP53", "AKT1"),
                InteractionRow::new("TP53", "EGFR"),
                InteractionRow::new("TP53", "AKT1"),
            ]
        );
    }

    #[test]
    fn test_parse_locates_columns_by_name() {
        let raw = "preferredName_B\tscore\tpreferredName_A\nAKT1\t0.9\tTP53\n";
        let rows = parse_interactions(raw).expect("reordered columns should parse");
        assert_eq!(rows, vec![InteractionRow::new("TP53", "AKT1")]);
    }

    #[test]
    fn test_parse_empty_body() {
        assert_eq!(parse_interactions(""), Err(ParseFailure::EmptyData));
        assert_eq!(parse_interactions("  \n"), Err(ParseFailure::EmptyData));
    }

    #[test]
    fn test_parse_header_only_is_empty_data() {
        let raw = "preferredName_A\tpreferredName_B\n";
        assert_eq!(parse_interactions(raw), Err(ParseFailure::EmptyData));
    }

    #[test]
    fn test_parse_reports_every_missing_column() {
        let raw = "stringId_A\tstringId_B\n9606.ENSP1\t9606.ENSP2\n";
        assert_eq!(
            parse_interactions(raw),
            Err(ParseFailure::MissingColumns(vec![
                COLUMN_A.to_string(),
                COLUMN_B.to_string()
            ]))
        );

        let raw = "preferredName_A\tscore\nTP53\t0.9\n";
        assert_eq!(
            parse_interactions(raw),
            Err(ParseFailure::MissingColumns(vec![COLUMN_B.to_string()]))
        );
    }

    #[test]
    fn test_parse_error_page_is_missing_columns() {
        let raw = "Error: identifiers not found\n";
        assert!(matches!(
            parse_interactions(raw),
            Err(ParseFailure::MissingColumns(_))
        ));
    }

    #[test]
    fn test_parse_ragged_row_is_malformed() {
        let raw = "preferredName_A\tpreferredName_B\nTP53\tAKT1\nEGFR\n";
        assert!(matches!(
            parse_interactions(raw),
            Err(ParseFailure::Malformed(_))
        ));
    }
}
