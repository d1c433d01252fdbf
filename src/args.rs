use clap::Parser;

/// Generates the audit preparation files for one election county.
///
/// Given a CVR export, writes the canonical contest list and the ballot
/// storage manifest of the county as two CSV files in the current directory.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The CVR export file of the county, as produced by the vote
    /// tabulation system.
    #[clap(short = 'f', long = "file", value_parser)]
    pub file: String,

    /// The name of the county. It is used as the prefix of the two output
    /// files and repeated in the first column of every output row.
    #[clap(short = 'n', long = "name", value_parser)]
    pub name: String,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
