//! Rendering of query results as a table, CSV or JSON.

use anyhow::Result;
use clap::ValueEnum;
use isocodes_core::Record;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub const NO_RESULTS: &str = "No results found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Renders `records` in `format`, limited to `fields` when given.
pub fn render(records: &[&Record], format: OutputFormat, fields: Option<&[String]>) -> Result<String> {
    if records.is_empty() {
        return Ok(NO_RESULTS.to_owned());
    }
    let headers = headers(records, fields);

    match format {
        OutputFormat::Json => render_json(records, fields),
        OutputFormat::Csv => render_csv(records, &headers),
        OutputFormat::Table => Ok(render_table(records, &headers)),
    }
}

/// Requested fields that occur in at least one record, in request order.
/// Without a request: the sorted union of all fields.
fn headers(records: &[&Record], fields: Option<&[String]>) -> Vec<String> {
    let all: BTreeSet<&str> = records.iter().flat_map(|r| r.field_names()).collect();
    match fields {
        Some(wanted) => wanted
            .iter()
            .filter(|f| all.contains(f.as_str()))
            .cloned()
            .collect(),
        None => all.into_iter().map(str::to_owned).collect(),
    }
}

fn render_json(records: &[&Record], fields: Option<&[String]>) -> Result<String> {
    let items = records
        .iter()
        .map(|r| match fields {
            Some(wanted) => Ok(Value::Object(
                r.select(wanted)
                    .into_iter()
                    .map(|(k, v)| (k.to_owned(), Value::String(v.to_owned())))
                    .collect::<Map<String, Value>>(),
            )),
            None => serde_json::to_value(r),
        })
        .collect::<serde_json::Result<Vec<Value>>>()?;
    Ok(serde_json::to_string_pretty(&items)?)
}

fn render_csv(records: &[&Record], headers: &[String]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(headers)?;
    for r in records {
        wtr.write_record(headers.iter().map(|h| r.get(h).unwrap_or("")))?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?.trim_end().to_owned())
}

fn render_table(records: &[&Record], headers: &[String]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .map(|h| {
            records
                .iter()
                .map(|r| r.get(h).map_or(0, |v| v.chars().count()))
                .fold(h.chars().count(), usize::max)
        })
        .collect();

    let row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header_line = row(headers.iter().map(String::as_str).collect());
    let mut lines = vec![header_line.clone(), "-".repeat(header_line.chars().count())];
    for r in records {
        lines.push(row(headers.iter().map(|h| r.get(h).unwrap_or("")).collect()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            [("alpha_2", "US"), ("name", "United States")].into_iter().collect(),
            [("alpha_2", "FR"), ("name", "France"), ("official_name", "French Republic")]
                .into_iter()
                .collect(),
        ]
    }

    #[test]
    fn empty_input_has_a_message() {
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(render(&[], format, None).unwrap(), NO_RESULTS);
        }
    }

    #[test]
    fn table_pads_columns() {
        let recs = records();
        let refs: Vec<&Record> = recs.iter().collect();
        let out = render(&refs, OutputFormat::Table, None).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "alpha_2 | name          | official_name  ");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "US      | United States |                ");
    }

    #[test]
    fn csv_uses_requested_fields_in_order() {
        let recs = records();
        let refs: Vec<&Record> = recs.iter().collect();
        let fields = vec!["name".to_owned(), "missing".to_owned(), "alpha_2".to_owned()];
        let out = render(&refs, OutputFormat::Csv, Some(&fields)).unwrap();
        assert_eq!(out, "name,alpha_2\nUnited States,US\nFrance,FR");
    }

    #[test]
    fn json_is_an_array_of_objects() {
        let recs = records();
        let refs: Vec<&Record> = recs.iter().collect();
        let out = render(&refs, OutputFormat::Json, None).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[1]["official_name"], "French Republic");

        let fields = vec!["alpha_2".to_owned()];
        let out = render(&refs, OutputFormat::Json, Some(&fields)).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0], serde_json::json!({"alpha_2": "US"}));
    }
}
