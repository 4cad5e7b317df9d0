use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "review-tools")]
#[command(about = "系統的文献レビュー支援ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 候補論文から次ラウンドの論文を無作為抽出
    Select(SelectArgs),

    /// 投票CSVからFleiss' Kappaを計算
    Kappa(KappaArgs),

    /// 設定を表示/編集
    Config {
        /// 1ラウンドの既定抽出数を設定
        #[arg(long)]
        set_sample_size: Option<usize>,

        /// 論文を識別する列名を設定
        #[arg(long)]
        set_id_column: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `select_papers` 互換のエントリポイント
#[derive(Parser)]
#[command(name = "select_papers")]
#[command(about = "候補論文のCSVから無作為に論文を抽出", long_about = None)]
pub struct SelectPapersCli {
    #[command(flatten)]
    pub args: SelectArgs,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

/// `fleiss_kappa` 互換のエントリポイント
#[derive(Parser)]
#[command(name = "fleiss_kappa")]
#[command(about = "投票CSVから評価者間一致度（Fleiss' Kappa）を計算", long_about = None)]
pub struct FleissKappaCli {
    #[command(flatten)]
    pub args: KappaArgs,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// 全候補論文のCSVファイル
    #[arg(required = true)]
    pub csv_file: PathBuf,

    /// 抽出する論文数（省略時は設定値）
    #[arg(short = 'n', long)]
    pub number: Option<usize>,

    /// 乱数シード（同じシードなら同じ結果）
    #[arg(long)]
    pub seed: Option<u64>,

    /// 論文を識別する列名（省略時は設定値）
    #[arg(long)]
    pub id_column: Option<String>,

    /// 出力CSVファイル（デフォルト: 入力フォルダ/papers_round_<番号>.csv）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct KappaArgs {
    /// 投票CSVファイル（1行 = 1論文、1列 = 1評価者）
    #[arg(required = true)]
    pub csv_file: PathBuf,

    /// 採択/不採択の2カテゴリで計算
    #[arg(short, long)]
    pub binary: bool,

    /// 採択とみなすラベル（省略時は設定値）
    #[arg(long)]
    pub accept_label: Option<String>,

    /// 論文名の列（投票から除外する）
    #[arg(long)]
    pub item_column: Option<String>,

    /// 出力形式 (text/json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
