use clap::Parser;
use review_tools::cli::{Cli, Commands};
use review_tools::config::Config;
use review_tools::error::Result;
use review_tools::{commands, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    commands::exit_code(run(cli))
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Select(args) => commands::run_select(&args, &config),

        Commands::Kappa(args) => commands::run_kappa(&args, &config, cli.verbose),

        Commands::Config { set_sample_size, set_id_column, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(size) = set_sample_size {
                config.set_sample_size(size)?;
                changed = true;
            }

            if let Some(column) = set_id_column {
                config.set_id_column(column)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  抽出数: {}", config.default_sample_size);
                println!("  識別列: {}", config.id_column);
                println!("  ラウンドファイル: {}_<番号>.csv", config.round_prefix);
                println!("  採択ラベル: {}", config.accept_label);
            }

            Ok(())
        }
    }
}
