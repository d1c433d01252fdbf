use clap::Parser;
use snafu::ErrorCompat;

mod args;
mod cvr;

use crate::args::Args;

fn main() {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let res = cvr::generate_county_artifacts(&args.file, &args.name);
    if let Err(e) = res {
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(e.as_ref()) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
