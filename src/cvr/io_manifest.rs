// Writing the ballot storage manifest of a county.

use rand::Rng;
use serde::Serialize;

use crate::cvr::{bins::BinAssigner, *};

/// One row of the manifest: a tabulator batch, its ballot count and the
/// storage bin it is assigned to.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
struct ManifestRow<'a> {
    #[serde(rename = "CountyID")]
    county: &'a str,
    #[serde(rename = "ScannerID")]
    scanner: &'a str,
    #[serde(rename = "BatchID")]
    batch: &'a str,
    #[serde(rename = "NumBallots")]
    num_ballots: usize,
    #[serde(rename = "StorageLocation")]
    storage_location: String,
}

pub fn write_manifest<R: Rng>(
    path: &str,
    county: &str,
    batches: &[BallotBatch],
    assigner: &mut BinAssigner<R>,
) -> BCvrResult<()> {
    let mut wtr = csv::Writer::from_path(path).context(WritingOutputSnafu { path })?;
    for group in batches.iter() {
        let row = ManifestRow {
            county,
            scanner: &group.tabulator,
            batch: &group.batch,
            num_ballots: group.records.len(),
            storage_location: assigner.next_label(),
        };
        debug!("write_manifest: row: {:?}", row);
        wtr.serialize(&row).context(WritingOutputSnafu { path })?;
    }
    wtr.flush().context(FlushingOutputSnafu { path })?;
    Ok(())
}
