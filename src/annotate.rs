use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::model::DataTable;
use crate::munsell::convert;
use crate::tone::ToneTable;

// ---------------------------------------------------------------------------
// Per-label annotation
// ---------------------------------------------------------------------------

/// Header names of the four appended output columns.
pub const RESULT_HEADERS: [&str; 4] = ["マンセル値", "R", "G", "B"];

/// The four output fields attached to one input label.
///
/// Computed once per row and immutable afterwards. A missing field means the
/// corresponding stage produced nothing: an unknown label leaves all four
/// empty, a failed conversion keeps the notation but leaves RGB empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub munsell: Option<String>,
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
}

impl ConversionResult {
    /// The all-missing result.
    pub fn undefined() -> Self {
        ConversionResult {
            munsell: None,
            r: None,
            g: None,
            b: None,
        }
    }

    /// Whether every field is missing.
    pub fn is_undefined(&self) -> bool {
        self.munsell.is_none() && self.r.is_none() && self.g.is_none() && self.b.is_none()
    }

    /// The four fields as output cells, missing fields as empty strings.
    pub fn to_cells(&self) -> [String; 4] {
        let num = |c: Option<u8>| c.map(|v| v.to_string()).unwrap_or_default();
        [
            self.munsell.clone().unwrap_or_default(),
            num(self.r),
            num(self.g),
            num(self.b),
        ]
    }
}

/// Annotate a single tone label.
///
/// Never fails: an unknown label is an all-missing result, and a conversion
/// failure is logged and leaves the RGB fields missing. Pure apart from the
/// warning log.
pub fn annotate_label(tones: &ToneTable, label: &str) -> ConversionResult {
    let Some(notation) = tones.resolve(label) else {
        return ConversionResult::undefined();
    };
    match convert::convert(notation) {
        Ok([r, g, b]) => ConversionResult {
            munsell: Some(notation.to_string()),
            r: Some(r),
            g: Some(g),
            b: Some(b),
        },
        Err(err) => {
            warn!("could not convert Munsell notation '{notation}' (label '{label}'): {err}");
            ConversionResult {
                munsell: Some(notation.to_string()),
                r: None,
                g: None,
                b: None,
            }
        }
    }
}

/// Annotate a sequence of labels, preserving input order.
///
/// A batch of N labels always yields N results.
pub fn annotate_labels<'a, I>(tones: &ToneTable, labels: I) -> Vec<ConversionResult>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .map(|label| annotate_label(tones, label))
        .collect()
}

// ---------------------------------------------------------------------------
// Whole-table annotation
// ---------------------------------------------------------------------------

/// The named tone column is not present in the input table.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("column '{0}' not found in the input table")]
pub struct MissingColumn(pub String);

/// Counts reported after a table has been annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSummary {
    /// Total rows processed.
    pub rows: usize,
    /// Rows with a notation and a full RGB triplet.
    pub converted: usize,
    /// Rows whose label had no table entry.
    pub unknown: usize,
    /// Rows whose notation failed to convert.
    pub failed: usize,
}

/// Append the four result columns to `data`, reading labels from
/// `tone_column`. Row order is preserved; every row gets exactly one result.
pub fn annotate_table(
    tones: &ToneTable,
    data: &mut DataTable,
    tone_column: &str,
) -> Result<AnnotationSummary, MissingColumn> {
    let col = data
        .column_index(tone_column)
        .ok_or_else(|| MissingColumn(tone_column.to_string()))?;

    let mut summary = AnnotationSummary {
        rows: data.rows.len(),
        converted: 0,
        unknown: 0,
        failed: 0,
    };

    let results: Vec<ConversionResult> = data
        .rows
        .iter()
        .map(|row| {
            let label = row.get(col).map(String::as_str).unwrap_or("");
            annotate_label(tones, label)
        })
        .collect();

    for result in &results {
        if result.munsell.is_none() {
            summary.unknown += 1;
        } else if result.r.is_none() {
            summary.failed += 1;
        } else {
            summary.converted += 1;
        }
    }

    data.headers.extend(RESULT_HEADERS.iter().map(|h| h.to_string()));
    for (row, result) in data.rows.iter_mut().zip(results) {
        row.extend(result.to_cells());
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_get_notation_and_rgb() {
        let tones = ToneTable::builtin();
        let result = annotate_label(&tones, "暗灰");
        assert_eq!(result.munsell.as_deref(), Some("N 3"));
        assert_eq!((result.r, result.g, result.b), (Some(77), Some(77), Some(77)));
    }

    #[test]
    fn unknown_label_yields_all_missing() {
        let tones = ToneTable::builtin();
        let result = annotate_label(&tones, "不明色");
        assert!(result.is_undefined());
    }

    #[test]
    fn reference_scenario_in_row_order() {
        let tones = ToneTable::builtin();
        let results = annotate_labels(&tones, ["暗灰", "不明色", "灰白～淡"]);
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].munsell.as_deref(), Some("N 3"));
        assert_eq!(results[0].r, Some(77));

        assert!(results[1].is_undefined());

        assert_eq!(results[2].munsell.as_deref(), Some("N 7"));
        assert_eq!(
            (results[2].r, results[2].g, results[2].b),
            (Some(178), Some(178), Some(178))
        );
    }

    #[test]
    fn bad_notation_keeps_notation_but_drops_rgb() {
        // A table carrying a malformed notation must not abort the batch.
        let tones = ToneTable::from_pairs([("こわれ", "N"), ("灰", "N 5")]);
        let results = annotate_labels(&tones, ["こわれ", "灰"]);

        assert_eq!(results[0].munsell.as_deref(), Some("N"));
        assert_eq!(results[0].r, None);

        assert_eq!(results[1].r, Some(128));
    }

    #[test]
    fn annotate_table_appends_four_columns() {
        let tones = ToneTable::builtin();
        let mut data = DataTable {
            headers: vec!["遺構".to_string(), "色調".to_string()],
            rows: vec![
                vec!["SK01".to_string(), "暗灰".to_string()],
                vec!["SK02".to_string(), "不明色".to_string()],
                vec!["SK03".to_string(), "灰白～淡".to_string()],
            ],
        };

        let summary = annotate_table(&tones, &mut data, "色調").unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.failed, 0);

        assert_eq!(
            data.headers,
            vec!["遺構", "色調", "マンセル値", "R", "G", "B"]
        );
        assert_eq!(data.rows[0][2..], ["N 3", "77", "77", "77"].map(String::from));
        assert_eq!(data.rows[1][2..], ["", "", "", ""].map(String::from));
        assert_eq!(data.rows[2][2..], ["N 7", "178", "178", "178"].map(String::from));
    }

    #[test]
    fn annotate_table_requires_the_tone_column() {
        let tones = ToneTable::builtin();
        let mut data = DataTable {
            headers: vec!["遺構".to_string()],
            rows: vec![vec!["SK01".to_string()]],
        };
        let err = annotate_table(&tones, &mut data, "色調").unwrap_err();
        assert_eq!(err, MissingColumn("色調".to_string()));
    }

    #[test]
    fn conversion_result_serializes_round_trip() {
        let result = ConversionResult {
            munsell: Some("N 3".to_string()),
            r: Some(77),
            g: Some(77),
            b: Some(77),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ConversionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
