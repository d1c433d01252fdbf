use log::{debug, info};

use snafu::{prelude::*, Snafu};

use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod bins;
pub mod io_canonical;
pub mod io_common;
pub mod io_export;
pub mod io_manifest;

#[derive(Debug, Snafu)]
pub enum CvrError {
    #[snafu(display("Error opening CVR export {path}"))]
    OpeningExport { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of the CVR export"))]
    ExportLine { source: csv::Error, lineno: usize },
    #[snafu(display("The CVR export ends at line {lineno}, before the {expected} row"))]
    ExportTooShort { lineno: usize, expected: String },
    #[snafu(display("Line {lineno} of the CVR export has no column {column}"))]
    RowTooShort { lineno: usize, column: usize },
    #[snafu(display("No contest metadata marker in header cell {cell:?}"))]
    ContestPattern { cell: String },
    #[snafu(display("Error writing {path}"))]
    WritingOutput { source: csv::Error, path: String },
    #[snafu(display("Error flushing {path}"))]
    FlushingOutput {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type CvrResult<T> = Result<T, CvrError>;
pub type BCvrResult<T> = Result<T, Box<CvrError>>;

/// A contest as discovered in the export header row, with its choices in
/// column order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Contest {
    /// The raw header cell, metadata marker included.
    pub id: String,
    /// The display name: the text preceding the metadata marker.
    pub name: String,
    pub choices: Vec<String>,
}

/// The ballot records scanned under one (tabulator, batch) pair.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BallotBatch {
    pub tabulator: String,
    pub batch: String,
    pub records: Vec<String>,
}

/// Everything retained from one pass over a CVR export.
///
/// Contests and batches are listed in discovery order, so the derived files
/// keep the same row order from one run to the next.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CvrExport {
    pub contests: Vec<Contest>,
    pub batches: Vec<BallotBatch>,
}

/// Runs the whole pipeline for one county: reads the export and writes the
/// canonical contest list and the ballot manifest to the current directory,
/// overwriting any previous run.
pub fn generate_county_artifacts(export_path: &str, county: &str) -> BCvrResult<()> {
    let export = io_export::read_cvr_export(export_path)?;
    info!(
        "Read {} contests and {} tabulator batches from {}",
        export.contests.len(),
        export.batches.len(),
        export_path
    );
    debug!("generate_county_artifacts: export: {:?}", export);

    let canonical_path = format!("{}_canonical_list.csv", county);
    io_canonical::write_canonical_list(&canonical_path, county, &export.contests)?;
    info!("Wrote canonical contest list {}", canonical_path);

    let manifest_path = format!("{}_manifest.csv", county);
    let mut assigner = bins::BinAssigner::new(StdRng::from_entropy());
    io_manifest::write_manifest(&manifest_path, county, &export.batches, &mut assigner)?;
    info!("Wrote ballot manifest {}", manifest_path);

    Ok(())
}
