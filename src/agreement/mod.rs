//! 評価者間一致度（Fleiss' Kappa）
//!
//! 投票CSVを読み込み、論文 × カテゴリの件数行列に集計して
//! `review_tools_common::fleiss_kappa` で計算する。

pub mod report;
pub mod votes;

pub use votes::{read_votes, ItemVotes, VoteTable};

use crate::error::Result;
use review_tools_common::{fleiss_kappa, CategoryMode, KappaReport, TallyMatrix};
use std::path::Path;

/// 計算条件
#[derive(Debug, Clone, Default)]
pub struct KappaOptions {
    pub mode: CategoryMode,
    pub item_column: Option<String>,
}

/// 論文名・評価者名付きの計算結果
#[derive(Debug, Clone)]
pub struct AgreementResult {
    /// 評価者の列名
    pub raters: Vec<String>,
    /// 論文名（`item_column` 未指定時は `#<行番号>`）
    pub item_labels: Vec<String>,
    pub report: KappaReport,
}

/// CSVファイルからKappaを計算
pub fn compute_from_file(path: &Path, options: &KappaOptions) -> Result<AgreementResult> {
    log::info!("Computing Fleiss Kappa for file: {}", path.display());
    let table = read_votes(path, options.item_column.as_deref())?;

    let matrix = TallyMatrix::from_votes(&table.vote_rows(), &options.mode)?;
    log::debug!(
        "件数行列: {}件 × {}カテゴリ {:?}",
        matrix.items(),
        matrix.categories().len(),
        matrix.categories()
    );

    let report = fleiss_kappa(&matrix)?;

    Ok(AgreementResult {
        raters: table.raters,
        item_labels: table.items.into_iter().map(|item| item.label).collect(),
        report,
    })
}
