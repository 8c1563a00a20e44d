//! CLI for running the dispatch benchmarks.
//!
//! Usage:
//!   dispatch-bench                       # Run every strategy once per size
//!   dispatch-bench --count 5             # Average five trials per size
//!   dispatch-bench --strategy closure    # Run a single strategy
//!   dispatch-bench --list                # List available strategies
//!   dispatch-bench --help                # Show help

use std::io;
use std::process::ExitCode;

use argh::FromArgs;
use dispatch_bench::registry::build_registry;
use dispatch_bench::tui::{self, QuietProgress, SpinnerProgress};
use dispatch_bench::utils::runner::DEFAULT_MAX_SIZE;
use dispatch_bench::utils::{BenchmarkRunner, RunConfig};
use dispatch_bench::workload::WorkloadGenerator;
use dispatch_bench::{run_benchmarks, Result};
use log::LevelFilter;

/// Compare the cost of call-dispatch mechanisms over growing inputs.
#[derive(FromArgs)]
struct Args {
    /// number of times to repeat each test and average the results over
    #[argh(option, short = 'c', default = "1")]
    count: usize,

    /// do not show an activity marker
    #[argh(switch, short = 'q')]
    quiet: bool,

    /// largest input size; sizes grow tenfold from 1 (default: 1000000000)
    #[argh(option, default = "DEFAULT_MAX_SIZE")]
    max_size: usize,

    /// run only this strategy (may be repeated; see --list)
    #[argh(option, short = 's')]
    strategy: Vec<String>,

    /// seed for the input data generator (default: random)
    #[argh(option)]
    seed: Option<u64>,

    /// skip the allocator trim between trials
    #[argh(switch)]
    no_reclaim: bool,

    /// list available strategies and exit
    #[argh(switch, short = 'l')]
    list: bool,

    /// print per-trial diagnostics to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let registry = build_registry();

    if args.list {
        tui::print_available_strategies(&registry);
        return Ok(());
    }

    // Everything that can be rejected is checked before the first trial.
    let config = RunConfig {
        repeat_count: args.count,
        max_size: args.max_size,
        reclaim_between_trials: !args.no_reclaim,
    };
    let generator = match args.seed {
        Some(seed) => WorkloadGenerator::with_seed(seed),
        None => WorkloadGenerator::new(),
    };
    let mut runner = BenchmarkRunner::new(config, generator)?;
    let variants = registry.select(&args.strategy)?;
    registry.verify()?;

    log::info!(
        "running {} strategies, {} trial(s) per size, sizes up to {}",
        variants.len(),
        runner.config().repeat_count,
        runner.config().max_size
    );

    let mut out = io::stdout();
    if args.quiet || !tui::is_interactive() {
        run_benchmarks(&variants, &mut runner, &mut QuietProgress, &mut out)
    } else {
        let mut spinner = SpinnerProgress::stdout();
        run_benchmarks(&variants, &mut runner, &mut spinner, &mut out)
    }
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_bench::BenchError;

    fn args() -> Args {
        Args {
            count: 1,
            quiet: true,
            max_size: 10,
            strategy: Vec::new(),
            seed: Some(5),
            no_reclaim: true,
            list: false,
            verbose: false,
        }
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let args = Args { count: 0, ..args() };
        assert!(matches!(run(&args), Err(BenchError::InvalidRepeatCount(0))));
    }

    #[test]
    fn test_zero_max_size_is_rejected() {
        let args = Args { max_size: 0, ..args() };
        assert!(matches!(run(&args), Err(BenchError::InvalidMaxSize(0))));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let args = Args {
            strategy: vec!["static-call".to_string(), "bogus".to_string()],
            ..args()
        };
        assert!(matches!(
            run(&args),
            Err(BenchError::UnknownStrategy(name)) if name == "bogus"
        ));
    }

    #[test]
    fn test_list_returns_before_validation() {
        // An invalid count would fail if the run got past the listing.
        let args = Args {
            list: true,
            count: 0,
            ..args()
        };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_small_run_succeeds() {
        let args = Args {
            strategy: vec!["virtual-call".to_string()],
            ..args()
        };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::from_args(
            &["dispatch-bench"],
            &["--count", "3", "-q", "-s", "closure", "-s", "pipeline", "--no-reclaim"],
        )
        .unwrap();
        assert_eq!(args.count, 3);
        assert!(args.quiet);
        assert!(args.no_reclaim);
        assert_eq!(args.strategy, vec!["closure", "pipeline"]);
        assert_eq!(args.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_parse_rejects_negative_size() {
        assert!(Args::from_args(&["dispatch-bench"], &["--max-size", "-1"]).is_err());
    }
}
