//! サブコマンドの実行（各バイナリ共通）

use crate::agreement::{self, report, KappaOptions};
use crate::cli::{KappaArgs, OutputFormat, SelectArgs};
use crate::config::Config;
use crate::error::Result;
use crate::papers::{self, RoundOptions};
use review_tools_common::CategoryMode;
use std::process::ExitCode;

/// CLI引数と設定から抽出条件を作成（引数が優先）
pub fn select_options(args: &SelectArgs, config: &Config) -> Result<RoundOptions> {
    let seed = match args.seed {
        Some(seed) => Some(seed),
        None => Config::default_seed()?,
    };

    Ok(RoundOptions {
        papers_csv: args.csv_file.clone(),
        number: args.number.unwrap_or(config.default_sample_size),
        id_column: args.id_column.clone().unwrap_or_else(|| config.id_column.clone()),
        round_prefix: config.round_prefix.clone(),
        seed,
        output: args.output.clone(),
    })
}

pub fn kappa_options(args: &KappaArgs, config: &Config) -> KappaOptions {
    let mode = if args.binary {
        CategoryMode::binary(
            args.accept_label
                .clone()
                .unwrap_or_else(|| config.accept_label.clone()),
        )
    } else {
        CategoryMode::Multi
    };

    KappaOptions {
        mode,
        item_column: args.item_column.clone(),
    }
}

pub fn run_select(args: &SelectArgs, config: &Config) -> Result<()> {
    println!("📚 review-tools - 論文の無作為抽出\n");

    let options = select_options(args, config)?;
    let summary = papers::create_round(&options)?;

    println!("✔ 候補論文: {}件", summary.total);
    for round in &summary.previous_rounds {
        println!("  - ラウンド{}: {}件 ({})", round.number, round.papers, round.file_name);
    }
    println!("✔ 過去ラウンド除外後: {}件", summary.pool);
    println!(
        "✔ ラウンド{}として{}件を抽出",
        summary.round,
        summary.selected.len()
    );
    println!("✔ 保存先: {}", summary.output.display());

    println!("\n✅ 抽出完了");
    Ok(())
}

pub fn run_kappa(args: &KappaArgs, config: &Config, verbose: bool) -> Result<()> {
    let options = kappa_options(args, config);
    let kappa = agreement::compute_from_file(&args.csv_file, &options)?;

    match args.format {
        OutputFormat::Json => println!("{}", report::render_json(&kappa.report)?),
        OutputFormat::Text => {
            let mode = if args.binary { "二値（採択/不採択）" } else { "全カテゴリ" };
            println!("📊 {} ({})\n", args.csv_file.display(), mode);
            print!("{}", report::render_text(&kappa, verbose));
        }
    }

    Ok(())
}

/// エラーを表示して終了コードに変換
pub fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEED_ENV;
    use crate::error::ReviewError;
    use std::path::PathBuf;

    fn select_args() -> SelectArgs {
        SelectArgs {
            csv_file: PathBuf::from("all.csv"),
            number: None,
            seed: Some(3),
            id_column: None,
            output: None,
        }
    }

    #[test]
    fn test_select_options_use_config_defaults() {
        let options = select_options(&select_args(), &Config::default()).unwrap();
        assert_eq!(options.number, 35);
        assert_eq!(options.id_column, "Article");
        assert_eq!(options.round_prefix, "papers_round");
        assert_eq!(options.seed, Some(3));
    }

    #[test]
    fn test_select_options_args_override() {
        let mut args = select_args();
        args.number = Some(5);
        args.id_column = Some("Title".into());

        let options = select_options(&args, &Config::default()).unwrap();
        assert_eq!(options.number, 5);
        assert_eq!(options.id_column, "Title");
    }

    #[test]
    fn test_kappa_options_binary_accept_label() {
        let mut args = KappaArgs {
            csv_file: PathBuf::from("votes.csv"),
            binary: true,
            accept_label: None,
            item_column: None,
            format: OutputFormat::Text,
        };
        assert_eq!(kappa_options(&args, &Config::default()).mode, CategoryMode::binary("A"));

        args.accept_label = Some("Y".into());
        assert_eq!(kappa_options(&args, &Config::default()).mode, CategoryMode::binary("Y"));

        args.binary = false;
        assert_eq!(kappa_options(&args, &Config::default()).mode, CategoryMode::Multi);
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(Ok(())), ExitCode::SUCCESS);
        assert_eq!(exit_code(Err(ReviewError::EmptySample)), ExitCode::FAILURE);
        assert_eq!(
            exit_code(Err(ReviewError::InsufficientPool { requested: 35, available: 2 })),
            ExitCode::FAILURE
        );
    }

    /// 環境変数の変更はこのテスト内で完結させる
    #[test]
    fn test_seed_from_environment() {
        let mut args = select_args();
        args.seed = None;

        std::env::set_var(SEED_ENV, "2024");
        let from_env = select_options(&args, &Config::default());

        args.seed = Some(7);
        let explicit = select_options(&args, &Config::default());

        args.seed = None;
        std::env::set_var(SEED_ENV, "not-a-number");
        let invalid = select_options(&args, &Config::default());

        std::env::remove_var(SEED_ENV);
        let unset = select_options(&args, &Config::default());

        assert_eq!(from_env.unwrap().seed, Some(2024));
        assert_eq!(explicit.unwrap().seed, Some(7));
        assert!(matches!(invalid, Err(ReviewError::Config(_))));
        assert_eq!(unset.unwrap().seed, None);
    }
}
