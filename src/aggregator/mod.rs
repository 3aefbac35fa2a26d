//! The load, normalize, group and join pipeline.

use std::{fs::File, io::Read, path::Path};

use tracing::{debug, error, info, warn};

use crate::{
    csv,
    domain::{record::NormalizedRecord, summary::CategorySummary},
    error::{Error, Result},
    json,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// One row per distinct category, ordered by category.
    pub categories: Vec<CategorySummary>,
    /// Number of input rows.
    pub rows: usize,
    /// Rows whose non-empty amount was not numeric and counted as zero.
    pub coerced_amounts: usize,
}

/// Summarize the sales file at `path`.
pub fn process(path: &Path) -> Result<Summary> {
    info!(path = %path.display(), "loading sales records");

    let file = File::open(path).map_err(|source| Error::MissingInput {
        path: path.to_owned(),
        source,
    })?;

    process_reader(file)
}

/// Summarize sales records read from any CSV source.
pub fn process_reader(reader: impl Read) -> Result<Summary> {
    let records = csv::read(reader)?;
    let rows = records.len();
    debug!(rows, "loaded sales records");

    let mut coerced_amounts = 0;
    let normalized: Vec<NormalizedRecord> = records
        .into_iter()
        .zip(1..)
        .map(|(record, row)| -> Result<NormalizedRecord> {
            let raw = record.amount.clone();
            let (normalized, coerced) = record.normalize()?;
            if coerced {
                warn!(row, amount = %raw, "amount does not parse as a number, counting it as zero");
                coerced_amounts += 1;
            }
            Ok(normalized)
        })
        .collect::<Result<_>>()?;

    let categories = CategorySummary::from_records(&normalized)?;
    info!(
        rows,
        categories = categories.len(),
        coerced_amounts,
        "summarized sales records"
    );

    Ok(Summary {
        categories,
        rows,
        coerced_amounts,
    })
}

/// Summarize `input` and write the JSON document to `output`.
///
/// Nothing is written unless the whole summary succeeded.
pub fn run(input: &Path, output: &Path) -> Result<Summary> {
    let summary = process(input)?;
    json::write_to_path(&summary.categories, output)?;
    info!(path = %output.display(), "wrote summary");
    Ok(summary)
}

/// Summarize the sales file at `path`, reporting any failure and returning
/// no rows instead of an error.
pub fn process_or_empty(path: &Path) -> Vec<CategorySummary> {
    match process(path) {
        Ok(summary) => summary.categories,
        Err(err) => {
            error!(kind = %err.kind(), "{err}");
            Vec::new()
        }
    }
}
