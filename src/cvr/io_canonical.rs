// Writing the canonical contest list of a county.

use serde::Serialize;

use crate::cvr::*;

/// One row of the canonical list. The choices of the contest are joined
/// into a single field, which the writer quotes whenever it holds more than
/// one choice.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
struct CanonicalRow<'a> {
    #[serde(rename = "CountyName")]
    county: &'a str,
    #[serde(rename = "ContestName")]
    contest: &'a str,
    #[serde(rename = "ContestChoices")]
    choices: String,
}

pub fn write_canonical_list(path: &str, county: &str, contests: &[Contest]) -> BCvrResult<()> {
    let mut wtr = csv::Writer::from_path(path).context(WritingOutputSnafu { path })?;
    for contest in contests.iter() {
        let row = CanonicalRow {
            county,
            contest: &contest.name,
            choices: contest.choices.join(","),
        };
        debug!("write_canonical_list: row: {:?}", row);
        wtr.serialize(&row).context(WritingOutputSnafu { path })?;
    }
    wtr.flush().context(FlushingOutputSnafu { path })?;
    Ok(())
}
