// Reading the raw CVR export layout: two unused header lines wrapped around
// the contest and choice rows, then one line per scanned ballot.

use std::collections::HashMap;
use std::fs::File;

use snafu::OptionExt;

use crate::cvr::{
    io_common::{contest_display_name, non_empty_cells},
    *,
};

// Columns of every ballot line.
const TABULATOR_COL: usize = 1;
const BATCH_COL: usize = 2;
const RECORD_COL: usize = 3;

pub fn read_cvr_export(path: &str) -> BCvrResult<CvrExport> {
    info!("Attempting to read CVR export file {:?}", path);
    // The header rows and the ballot lines do not share a width.
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(OpeningExportSnafu { path })?;
    let mut records = rdr.into_records();

    // First line of the export: unused tabulator metadata.
    next_header_row(&mut records, 1, "export metadata")?;

    let contest_record = next_header_row(&mut records, 2, "contest header")?;
    let contest_row = non_empty_cells(&contest_record);
    debug!("read_cvr_export: contest row: {:?}", contest_row);

    // A contest spans one column per choice, so its identifier repeats.
    // Distinct identifiers are kept in first-seen order.
    let mut contests: Vec<Contest> = Vec::new();
    let mut contest_index: HashMap<String, usize> = HashMap::new();
    for cid in contest_row.iter() {
        if contest_index.contains_key(cid) {
            continue;
        }
        let name = contest_display_name(cid)?;
        contest_index.insert(cid.clone(), contests.len());
        contests.push(Contest {
            id: cid.clone(),
            name,
            choices: Vec::new(),
        });
    }

    let choice_record = next_header_row(&mut records, 3, "choice header")?;
    let choice_row = non_empty_cells(&choice_record);
    debug!("read_cvr_export: choice row: {:?}", choice_row);
    // The pairing walks the raw contest row, not the deduplicated list:
    // every choice lands on the contest of its own column.
    for (cid, choice) in contest_row.iter().zip(choice_row.iter()) {
        let idx = contest_index[cid];
        contests[idx].choices.push(choice.clone());
    }

    // Fourth line: the per-ballot column names, unused.
    next_header_row(&mut records, 4, "ballot header")?;

    let mut batches: Vec<BallotBatch> = Vec::new();
    let mut batch_index: HashMap<(String, String), usize> = HashMap::new();
    for (idx, line_r) in records.enumerate() {
        let lineno = idx + 5;
        let line = line_r.context(ExportLineSnafu { lineno })?;
        debug!("read_cvr_export: lineno: {:?} row: {:?}", lineno, line);

        let tabulator = get_column(&line, lineno, TABULATOR_COL)?;
        let batch = get_column(&line, lineno, BATCH_COL)?;
        let record = get_column(&line, lineno, RECORD_COL)?;

        let key = (tabulator.clone(), batch.clone());
        match batch_index.get(&key) {
            Some(&i) => batches[i].records.push(record),
            None => {
                batch_index.insert(key, batches.len());
                batches.push(BallotBatch {
                    tabulator,
                    batch,
                    records: vec![record],
                });
            }
        }
    }

    Ok(CvrExport { contests, batches })
}

fn next_header_row(
    records: &mut csv::StringRecordsIntoIter<File>,
    lineno: usize,
    expected: &str,
) -> BCvrResult<csv::StringRecord> {
    let line_r = records.next().context(ExportTooShortSnafu { lineno, expected })?;
    let line = line_r.context(ExportLineSnafu { lineno })?;
    Ok(line)
}

fn get_column(line: &csv::StringRecord, lineno: usize, column: usize) -> CvrResult<String> {
    let cell = line.get(column).context(RowTooShortSnafu { lineno, column })?;
    Ok(cell.to_string())
}
