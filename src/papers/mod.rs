//! 論文の無作為抽出
//!
//! ## 処理フロー
//! 1. 全候補論文のCSVを読み込み
//! 2. 同じフォルダの `papers_round_<番号>.csv` から抽出済みの論文を除外
//! 3. 残りから指定件数を重複なしで無作為抽出
//! 4. `papers_round_<次の番号>.csv` に保存

pub mod rounds;
pub mod sampler;
pub mod table;

pub use rounds::{RoundFile, RoundInfo};
pub use table::{PaperRecord, PaperTable};

use crate::error::{ReviewError, Result};
use std::path::{Path, PathBuf};

/// 抽出条件
#[derive(Debug, Clone)]
pub struct RoundOptions {
    pub papers_csv: PathBuf,
    pub number: usize,
    pub id_column: String,
    pub round_prefix: String,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

/// 抽出結果
#[derive(Debug, Clone)]
pub struct RoundSummary {
    /// 候補論文の総数
    pub total: usize,
    /// 過去ラウンド
    pub previous_rounds: Vec<RoundInfo>,
    /// 抽出済みを除いた残り件数
    pub pool: usize,
    /// 今回のラウンド番号
    pub round: u32,
    pub selected: Vec<PaperRecord>,
    pub output: PathBuf,
}

/// 次のラウンドの論文を抽出してCSVに保存
pub fn create_round(options: &RoundOptions) -> Result<RoundSummary> {
    log::info!("Processing: {}", options.papers_csv.display());
    let table = PaperTable::load(&options.papers_csv, &options.id_column)?;
    log::info!("候補論文: {}件", table.len());

    let papers_csv = options.papers_csv.canonicalize()?;
    let folder = papers_csv.parent().unwrap_or(Path::new(".")).to_path_buf();

    let rounds: Vec<RoundFile> = rounds::discover_rounds(&folder, &options.round_prefix)?
        .into_iter()
        .filter(|r| !is_same_file(&r.path, &papers_csv))
        .collect();
    let (selected_ids, previous_rounds) = rounds::load_selected_ids(&rounds, &options.id_column)?;

    let pool = sampler::exclude_selected(table.records(), &selected_ids);
    log::info!("過去ラウンド除外後: {}件", pool.len());

    let selected = sampler::sample(&pool, options.number, options.seed)?;

    let round = rounds::next_round_number(&rounds);
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| folder.join(rounds::round_file_name(&options.round_prefix, round)));

    let resolved = resolve_output(&output)?;
    if resolved == papers_csv || rounds.iter().any(|r| is_same_file(&r.path, &resolved)) {
        return Err(ReviewError::OutputConflict(output.display().to_string()));
    }

    table.write_subset(&output, &selected)?;
    log::info!("ラウンド{}: {}件を保存 ({})", round, selected.len(), output.display());

    Ok(RoundSummary {
        total: table.len(),
        previous_rounds,
        pool: pool.len(),
        round,
        selected,
        output,
    })
}

/// 出力先を正規化（ファイル自体は未作成でもよい）
fn resolve_output(output: &Path) -> Result<PathBuf> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| ReviewError::OutputConflict(output.display().to_string()))?;
    Ok(parent.canonicalize()?.join(file_name))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match a.canonicalize() {
        Ok(a) => a == b,
        Err(_) => false,
    }
}
