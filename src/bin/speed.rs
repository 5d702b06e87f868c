use std::process::ExitCode;

use clap::Parser;

use vonneumann::logger;
use vonneumann::opts::SortOptions;
use vonneumann::sort::{parse_size, sort_and_time};
use vonneumann::util::seeded_rng;

/// Times insertion sort over an array of random integers.
#[derive(Parser)]
#[clap(name = "speed")]
struct Cli {
    /// Number of elements to sort
    size: Option<String>,

    #[clap(long)]
    seed: Option<u64>,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let size = match parse_size(cli.size.as_deref()) {
        Ok(size) => size,
        Err(err) => {
            log::error!("{}. usage: speed <size of array>", err);
            return ExitCode::FAILURE;
        }
    };

    let opts = SortOptions { seed: cli.seed, ..Default::default() };
    let mut rng = seeded_rng(opts.seed);
    let report = match sort_and_time(&mut rng, size, opts.max_value) {
        Ok(report) => report,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("Time taken: {:.5} seconds.", report.elapsed.as_secs_f64());

    ExitCode::SUCCESS
}
