//! # csvsift - filter and aggregate CSV files
//!
//! `csvsift` loads a CSV file, keeps the rows that satisfy every `--filter`
//! condition, and prints them as a table, or reduces one column with
//! `--agg` and prints the single value.
//!
//! The pipeline is:
//!
//! ```text
//! args ─► parse conditions ─► load CSV ─► check columns ─► filter ─► [aggregate] ─► present
//! ```
//!
//! Filtering and aggregation live in [`csvsift_seeker`], table layout in
//! [`csvsift_render`]. This crate adds the CSV [`loader`], the [`cli`]
//! definition and the [`present`]ers.
//!
//! ## Library use
//!
//! ```no_run
//! use clap::Parser;
//! use csvsift::cli::Cli;
//!
//! let cli = Cli::parse_from(["csvsift", "products.csv", "--agg", "price=sum"]);
//! let output = csvsift::run(&cli)?;
//! println!("{}", output);
//! # Ok::<(), csvsift::Error>(())
//! ```

pub mod cli;
mod error;
pub mod loader;
pub mod logging;
pub mod present;

use csvsift_seeker::{AggregateSpec, Query, Seekable};
use tracing::{debug, info};

pub use error::{Error, Result};
pub use loader::{load, Dataset, Row};
pub use present::Presentation;

use cli::Cli;

/// Runs one invocation and returns the text to print.
///
/// Expressions are parsed before the file is read, and every column they
/// name is checked against the header before any row is evaluated.
pub fn run(cli: &Cli) -> Result<String> {
    let mut query = Query::new();
    for expression in &cli.filters {
        query = query.and_parse(expression)?;
        debug!(filter = %expression, "parsed condition");
    }
    let query = query.build();

    let aggregate = cli.agg.as_deref().map(AggregateSpec::parse).transpose()?;
    if let Some(spec) = &aggregate {
        debug!(aggregate = %spec, "parsed aggregate");
    }

    let dataset = load(&cli.path, cli.delimiter)?;
    query.validate(dataset.headers())?;
    if let Some(spec) = &aggregate {
        spec.validate(dataset.headers())?;
    }

    let kept = query.filter_cloned(dataset.rows(), Row::accessor)?;
    info!(
        total = dataset.len(),
        kept = kept.len(),
        conditions = query.conditions().len(),
        "filtered rows"
    );

    let presentation = Presentation {
        format: cli.output,
        border: cli.border.into(),
        delimiter: cli.delimiter,
    };

    match aggregate {
        Some(spec) => {
            let value = spec.apply(&kept, Row::accessor)?;
            info!(aggregate = %spec, %value, rows = kept.len(), "computed aggregate");
            present::aggregate(&spec, value, &presentation)
        }
        None => present::rows(dataset.headers(), &kept, &presentation),
    }
}
