use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wn_depth::config::Config;
use wn_depth::depth::DepthCalculator;
use wn_depth::error::Result;
use wn_depth::{output, wordnet, words};

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config) -> Result<()> {
    info!("Loading WordNet");
    let taxonomy = wordnet::open(&config.wordnet)?;
    let root = wordnet::resolve_root(taxonomy.as_ref(), &config.root)?;
    info!("Root concept {} is {:?}", config.root, root);

    info!("Loading words");
    let words = words::word_list(&config.words)?;

    let calculator = DepthCalculator::new(taxonomy.as_ref(), root, config.strategy);
    let results = calculator.depths(&words);

    output::write_results(&config.output, config.format, &results)
}

fn main() {
    let config = Config::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging(config.verbosity);

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(e.exit_code());
    }
}
