use codeharvest::cli::commands::{CliArgs, Commands};
use codeharvest::cli::handlers::{handle_detect, handle_extract, handle_extractors};
use codeharvest::config::HarvestConfig;
use codeharvest::util::{init_logging, parse_level, LoggingConfig};
use codeharvest::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();

    let config = match HarvestConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    init_logging_from_args(&args, &config);

    debug!("codeharvest v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match args.command {
        Commands::Extract(extract_args) => handle_extract(extract_args, &config),
        Commands::Detect(detect_args) => handle_detect(detect_args, &config),
        Commands::Extractors(extractors_args) => handle_extractors(extractors_args, &config),
    };

    std::process::exit(exit_code);
}

/// Explicit flags override the environment-derived configuration
fn init_logging_from_args(args: &CliArgs, config: &HarvestConfig) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    init_logging(LoggingConfig {
        level,
        use_json: config.log_json,
        ..Default::default()
    });
}
