use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value as JsonValue};

use super::model::DataTable;

// ---------------------------------------------------------------------------
// Table writer
// ---------------------------------------------------------------------------

/// Write a table to a file. Dispatch by extension, mirroring the loader:
/// `.csv` gets a header row, `.json` a records-oriented array of objects.
/// Empty cells become empty CSV fields and JSON `null`s.
pub fn write_file(table: &DataTable, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(table, path),
        "json" => write_json(table, path),
        other => bail!("Unsupported output extension: .{other}"),
    }
}

fn write_csv(table: &DataTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating output CSV")?;
    writer
        .write_record(&table.headers)
        .context("writing CSV headers")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing output CSV")?;
    Ok(())
}

fn write_json(table: &DataTable, path: &Path) -> Result<()> {
    let records: Vec<JsonValue> = table
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (header, cell) in table.headers.iter().zip(row) {
                let value = if cell.is_empty() {
                    JsonValue::Null
                } else {
                    JsonValue::String(cell.clone())
                };
                obj.insert(header.clone(), value);
            }
            JsonValue::Object(obj)
        })
        .collect();

    let text = serde_json::to_string_pretty(&JsonValue::Array(records))
        .context("serializing JSON records")?;
    std::fs::write(path, text).context("writing JSON file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_file;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("munsell-tone-writer-{name}-{}", std::process::id()));
        path
    }

    fn sample_table() -> DataTable {
        DataTable {
            headers: vec!["遺構".to_string(), "マンセル値".to_string(), "R".to_string()],
            rows: vec![
                vec!["SK01".to_string(), "N 3".to_string(), "77".to_string()],
                vec!["SK02".to_string(), String::new(), String::new()],
            ],
        }
    }

    #[test]
    fn csv_round_trips_through_the_loader() {
        let path = temp_path("roundtrip.csv");
        let table = sample_table();

        write_file(&table, &path).unwrap();
        let back = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back, table);
    }

    #[test]
    fn json_uses_null_for_missing_cells() {
        let path = temp_path("nulls.json");
        write_file(&sample_table(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let root: JsonValue = serde_json::from_str(&text).unwrap();
        let rows = root.as_array().unwrap();
        assert_eq!(rows[1]["マンセル値"], JsonValue::Null);
        assert_eq!(rows[0]["マンセル値"], JsonValue::String("N 3".to_string()));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = write_file(&sample_table(), Path::new("out.xlsx"));
        assert!(err.is_err());
    }
}
