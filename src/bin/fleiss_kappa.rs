use clap::Parser;
use review_tools::cli::FleissKappaCli;
use review_tools::config::Config;
use review_tools::{commands, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = FleissKappaCli::parse();
    logging::init(cli.verbose);

    commands::exit_code(
        Config::load().and_then(|config| commands::run_kappa(&cli.args, &config, cli.verbose)),
    )
}
