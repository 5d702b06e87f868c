use std::process::ExitCode;

use clap::Parser;

use vonneumann::experiment::ExperimentRunner;
use vonneumann::opts::SimulatorOptions;
use vonneumann::logger;

/// Debiases a biased coin with the Von Neumann method and times it.
#[derive(Parser)]
#[clap(name = "simulator")]
struct Cli {
    /// Probability of tails for the biased coin
    #[clap(long, default_value_t = SimulatorOptions::default().probability)]
    probability: f64,

    /// Unbiased flips per repetition
    #[clap(long, default_value_t = SimulatorOptions::default().sequence_length)]
    length: u64,

    #[clap(long, default_value_t = SimulatorOptions::default().repetitions)]
    repetitions: u32,

    /// Seed for a reproducible run
    #[clap(long)]
    seed: Option<u64>,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let opts = SimulatorOptions {
        probability: cli.probability,
        sequence_length: cli.length,
        repetitions: cli.repetitions,
        seed: cli.seed,
    };

    let result = ExperimentRunner::from_options(&opts).and_then(|mut runner| {
        log::info!("============ Running Von Neumann Experiment ============");
        log::info!("bias p = {}", runner.extractor().coin_flipper().probability());
        runner.run()
    });

    match result {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
