//! u-tsp CLI: solves the built-in delivery network exactly.

use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, error, info, warn, LevelFilter};
use serde::Serialize;

use u_tsp::dataset::warehouse_network;
use u_tsp::evaluation::TourEvaluator;
use u_tsp::models::Network;
use u_tsp::search::{candidate_count, SearchConfig, SearchOutcome, SearchStrategy};
use u_tsp::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "u-tsp")]
#[command(about = "Exact traveling salesman solver for small delivery networks")]
#[command(long_about = "Finds the shortest closed tour over the built-in delivery network by \
scoring every ordering of its locations.

Examples:
  u-tsp
  u-tsp --strategy fixed-start -v
  u-tsp --format json")]
#[command(version)]
struct Cli {
    /// Which orderings to enumerate
    #[arg(long, value_enum, default_value_t = Strategy::All)]
    strategy: Strategy,

    /// Refuse to search networks larger than this
    #[arg(long, default_value_t = 10)]
    max_locations: usize,

    /// Separator placed between location labels
    #[arg(long, default_value = " -> ")]
    separator: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Every ordering of every location
    All,
    /// Keep the first location fixed
    FixedStart,
}

impl From<Strategy> for SearchStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::All => SearchStrategy::AllPermutations,
            Strategy::FixedStart => SearchStrategy::FixedStart,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    route: &'a [usize],
    labels: Vec<&'a str>,
    distance: f64,
    evaluated: u64,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_strategy(self.strategy.into())
            .with_max_locations(self.max_locations)
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let now = Instant::now();
    let network = warehouse_network()?;
    let config = cli.search_config();
    debug!("config: {config:?}");

    check_conventions(&network);

    match candidate_count(network.len(), config.strategy()) {
        Some(count) => info!(
            "searching {} locations: {count} candidate routes ({:?})",
            network.len(),
            config.strategy()
        ),
        None => warn!("candidate route count for {} locations overflows u64", network.len()),
    }

    let outcome = network.solve_with(&config)?;

    info!(
        "search done: evaluated={} improvements={} time={:.3}s",
        outcome.stats().evaluated,
        outcome.stats().improvements,
        now.elapsed().as_secs_f32()
    );
    log_legs(&network, &outcome)?;

    match cli.format {
        OutputFormat::Text => {
            println!(
                "Optimal Route: {}",
                network.describe(outcome.best(), &cli.separator)?
            );
            println!("Minimum Distance: {}", outcome.best().distance());
        }
        OutputFormat::Json => {
            let best = outcome.best();
            let report = JsonReport {
                route: best.route().stops(),
                labels: best.labels(network.locations())?,
                distance: best.distance(),
                evaluated: outcome.stats().evaluated,
            };
            println!("{}", encode_json(&report)?);
        }
    }

    Ok(())
}

fn encode_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::other(format!("failed to encode report: {e}")))
}

/// Warns about input the solver assumes but does not enforce.
fn check_conventions(network: &Network) {
    let distances = network.distances();
    if !distances.is_symmetric(1e-9) {
        warn!("distance matrix is not symmetric; tours are scored in visit direction");
    }
    if !distances.has_zero_diagonal() {
        warn!("distance matrix has non-zero self-distances");
    }
}

fn log_legs(network: &Network, outcome: &SearchOutcome) -> Result<()> {
    if !log::log_enabled!(log::Level::Debug) {
        return Ok(());
    }
    let stops = outcome.best().route().stops();
    let legs = TourEvaluator::new(network.distances()).edge_costs(stops)?;
    let locations = network.locations();
    for (i, cost) in legs.iter().enumerate() {
        let from = &locations[stops[i]];
        let to = &locations[stops[(i + 1) % stops.len()]];
        debug!("leg {}: {from} -> {to} = {cost}", i + 1);
    }
    Ok(())
}
