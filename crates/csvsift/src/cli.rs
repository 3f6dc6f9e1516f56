//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use csvsift_render::BorderStyle;

/// Filter rows of a CSV file and optionally reduce a column to one value.
///
/// Conditions compare numerically when both sides are numbers and as text
/// otherwise. Every condition must hold for a row to be kept.
#[derive(Debug, Clone, Parser)]
#[command(name = "csvsift", version)]
#[command(after_help = "Examples:\n  \
    csvsift products.csv --filter \"brand=brand1\"\n  \
    csvsift products.csv --filter \"price>=149\" --filter \"price<=299\"\n  \
    csvsift products.csv --filter \"rating>4.0\" --agg \"price=avg\"")]
pub struct Cli {
    /// CSV file to read; the first line is the header
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Keep rows matching COLUMN<OP>VALUE, with OP one of > < >= <= = != (repeatable)
    #[arg(short, long = "filter", value_name = "CONDITION")]
    pub filters: Vec<String>,

    /// Reduce a column to one value: COLUMN=avg|min|max|sum|count
    #[arg(short, long, value_name = "COLUMN=AGGREGATE")]
    pub agg: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Table border style
    #[arg(long, value_enum, default_value_t = Border::Ascii)]
    pub border: Border,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered grid; plain value for aggregates
    Table,
    /// CSV with a header line
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Table border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Border {
    /// +, - and | characters
    Ascii,
    /// Light box-drawing lines
    Light,
    /// Heavy box-drawing lines
    Heavy,
    /// Double box-drawing lines
    Double,
    /// Light lines with rounded corners
    Rounded,
    /// No frame; columns separated by spaces
    None,
}

impl From<Border> for BorderStyle {
    fn from(border: Border) -> Self {
        match border {
            Border::Ascii => BorderStyle::Ascii,
            Border::Light => BorderStyle::Light,
            Border::Heavy => BorderStyle::Heavy,
            Border::Double => BorderStyle::Double,
            Border::Rounded => BorderStyle::Rounded,
            Border::None => BorderStyle::None,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if s == "\\t" => Ok(b'\t'),
        _ => Err(format!("expected a single ASCII character, got {:?}", s)),
    }
}
