// Primitives shared by the export reader.

use lazy_static::lazy_static;
use regex::Regex;
use snafu::OptionExt;

use crate::cvr::*;

lazy_static! {
    // Metadata markers embedded in the contest header cells. IRV contests
    // carry a rank count, plurality contests a vote-for count.
    static ref IRV_RX: Regex =
        Regex::new(r"Number of positions=1, Number of ranks=[0-9]+").unwrap();
    static ref PLURALITY_RX: Regex = Regex::new(r"Vote For=[0-9]+").unwrap();
}

/// Extracts the display name of a contest from its raw header cell.
///
/// The name is the text preceding the metadata marker, trimmed of the
/// trailing separator and whitespace. A cell without either marker is a
/// fatal error.
pub fn contest_display_name(cell: &str) -> CvrResult<String> {
    let m = IRV_RX
        .find(cell)
        .or_else(|| PLURALITY_RX.find(cell))
        .context(ContestPatternSnafu { cell })?;
    let head = &cell[..m.start()];
    let head = head.strip_suffix('(').unwrap_or(head);
    Ok(head.trim().to_string())
}

/// The non-empty cells of a row, in position order.
pub fn non_empty_cells(record: &csv::StringRecord) -> Vec<String> {
    record
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string())
        .collect()
}
