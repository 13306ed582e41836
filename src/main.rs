//! # BASIC
//!
//! Command line front end for the line-numbered BASIC interpreter.
//!

use basic::mach::Config;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::cmp::max;

mod term;

/// Interactive line-numbered BASIC.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Program to load before the READY prompt. May be an http(s) URL.
    file: Option<String>,

    /// Run the loaded program right away.
    #[arg(long, default_value_t = false)]
    run: bool,

    /// NEXT with a variable closes the loop over that variable.
    #[arg(long, default_value_t = false)]
    strict_next: bool,

    /// Start with TRACE on.
    #[arg(long, default_value_t = false)]
    trace: bool,

    /// Seed for RND.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug mode. Raises the log level to at least `Debug`.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Log level for messages on stderr.
    #[arg(long, default_value_t = LevelFilter::Error)]
    log_level: LevelFilter,
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.debug {
        max(LevelFilter::Debug, cli.log_level)
    } else {
        cli.log_level
    };
    let mut config_builder = ConfigBuilder::new();
    if cli.debug {
        config_builder.set_time_format_rfc3339();
        config_builder.set_target_level(LevelFilter::Error);
    } else {
        config_builder.set_time_level(LevelFilter::Off);
        config_builder.set_target_level(LevelFilter::Off);
    }
    config_builder.set_thread_level(LevelFilter::Off);
    config_builder.set_location_level(LevelFilter::Off);
    if let Err(error) = TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {}", error);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    log::debug!("{:?}", cli);
    let config = Config {
        strict_next: cli.strict_next,
        trace: cli.trace,
        seed: cli.seed,
    };
    term::main(config, cli.file.as_deref(), cli.run);
}
