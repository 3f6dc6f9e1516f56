//! Result presentation.
//!
//! Turns filtered rows or an aggregate value into the text written to
//! stdout. Returned strings carry no trailing newline.

use csvsift_render::{Align, BorderStyle, Col, Column, Table};
use csvsift_seeker::{Aggregate, AggregateSpec, Number};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::loader::Row;

/// Output settings shared by every presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub format: OutputFormat,
    pub border: BorderStyle,
    /// Delimiter for CSV output; the same one the input was read with.
    pub delimiter: u8,
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation {
            format: OutputFormat::Table,
            border: BorderStyle::Ascii,
            delimiter: b',',
        }
    }
}

/// Renders rows with every column in header order.
pub fn rows(headers: &[String], rows: &[Row], presentation: &Presentation) -> Result<String> {
    match presentation.format {
        OutputFormat::Table => Ok(table(headers, rows, presentation.border)),
        OutputFormat::Csv => {
            let records = rows.iter().map(|row| row.values());
            csv_text(presentation.delimiter, headers, records)
        }
        OutputFormat::Json => {
            let objects: Vec<JsonValue> = rows
                .iter()
                .map(|row| {
                    let object: Map<String, JsonValue> = row
                        .iter()
                        .map(|(column, value)| (column.to_string(), JsonValue::from(value)))
                        .collect();
                    JsonValue::Object(object)
                })
                .collect();
            Ok(serde_json::to_string_pretty(&objects)?)
        }
    }
}

#[derive(Serialize)]
struct AggregateReport<'a> {
    column: &'a str,
    aggregate: Aggregate,
    value: Number,
}

/// Renders one aggregate value.
pub fn aggregate(spec: &AggregateSpec, value: Number, presentation: &Presentation) -> Result<String> {
    match presentation.format {
        OutputFormat::Table => Ok(value.to_string()),
        OutputFormat::Csv => {
            let record = [
                spec.aggregate().to_string(),
                spec.column().to_string(),
                value.to_string(),
            ];
            csv_text(
                presentation.delimiter,
                &["aggregate", "column", "value"],
                std::iter::once(&record[..]),
            )
        }
        OutputFormat::Json => {
            let report = AggregateReport {
                column: spec.column(),
                aggregate: spec.aggregate(),
                value,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// A column is numeric when it has at least one value and every non-empty
/// value parses as a number.
fn is_numeric_column(rows: &[Row], index: usize) -> bool {
    let mut values = rows
        .iter()
        .filter_map(|row| row.values().get(index))
        .filter(|v| !v.trim().is_empty())
        .peekable();
    values.peek().is_some() && values.all(|v| Number::parse(v).is_some())
}

fn table(headers: &[String], rows: &[Row], border: BorderStyle) -> String {
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            if is_numeric_column(rows, i) {
                Col::right(header.as_str()).header_align(Align::Right)
            } else {
                Col::left(header.as_str())
            }
        })
        .collect();

    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.values().iter().map(String::as_str).collect())
        .collect();

    Table::new(columns)
        .border(border)
        .row_separator(true)
        .render(&cells)
}

fn csv_text<'a, H, R, I>(delimiter: u8, headers: &[H], records: I) -> Result<String>
where
    H: AsRef<[u8]>,
    R: AsRef<[u8]> + 'a,
    I: IntoIterator<Item = &'a [R]>,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    wtr.write_record(headers)?;
    for record in records {
        wtr.write_record(record)?;
    }
    let text = String::from_utf8(wtr.into_inner()?)?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}
