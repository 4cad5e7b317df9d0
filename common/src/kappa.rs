//! Fleiss' Kappa
//!
//! 固定人数 n の評価者が N 件の項目を k 個のカテゴリに分類したときの
//! 評価者間一致度を計算する。
//!
//! - p_j = Σ_i n_ij / (N·n)
//! - P_i = (Σ_j n_ij² − n) / (n·(n−1))
//! - P̄ = Σ_i P_i / N
//! - P̄e = Σ_j p_j²
//! - κ = (P̄ − P̄e) / (1 − P̄e)
//!
//! 参考: <https://en.wikipedia.org/wiki/Fleiss%27_kappa>

use crate::error::{Error, Result};
use crate::interpretation::Interpretation;
use crate::tally::TallyMatrix;
use serde::Serialize;

/// 期待一致率が1とみなす許容誤差
const DEGENERATE_EPSILON: f64 = 1e-12;

/// カテゴリごとの投票割合 p_j
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProportion {
    pub category: String,
    pub proportion: f64,
}

/// Kappa計算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KappaReport {
    pub kappa: f64,
    pub items: usize,
    pub raters: u32,
    pub categories: Vec<CategoryProportion>,
    /// 項目ごとの一致度 P_i
    pub item_agreement: Vec<f64>,
    /// 観測一致率 P̄
    pub observed_agreement: f64,
    /// 期待一致率 P̄e
    pub expected_agreement: f64,
    pub interpretation: Interpretation,
}

/// 件数行列からFleiss' Kappaを計算
///
/// 全投票が単一カテゴリに集中している場合（P̄e = 1）は分母が0になるため
/// [`Error::DegenerateAgreement`] を返す。全員が全論文を採択した二値モードの
/// 行列もこれに該当し、κ = 1 やNaNではなくエラーとなる（観測一致率 1.0 は
/// エラーの `observed` で参照できる）。
pub fn fleiss_kappa(matrix: &TallyMatrix) -> Result<KappaReport> {
    let n_items = matrix.items() as f64;
    let n = f64::from(matrix.raters());

    let categories: Vec<CategoryProportion> = matrix
        .categories()
        .iter()
        .zip(matrix.category_totals())
        .map(|(category, total)| CategoryProportion {
            category: category.clone(),
            proportion: f64::from(total) / (n_items * n),
        })
        .collect();

    let item_agreement: Vec<f64> = matrix
        .counts()
        .iter()
        .map(|row| {
            let squares: f64 = row.iter().map(|&c| f64::from(c).powi(2)).sum();
            (squares - n) / (n * (n - 1.0))
        })
        .collect();

    let observed_agreement = item_agreement.iter().sum::<f64>() / n_items;
    let expected_agreement: f64 = categories.iter().map(|c| c.proportion.powi(2)).sum();

    if (1.0 - expected_agreement).abs() < DEGENERATE_EPSILON {
        return Err(Error::DegenerateAgreement { observed: observed_agreement });
    }

    let kappa = (observed_agreement - expected_agreement) / (1.0 - expected_agreement);

    Ok(KappaReport {
        kappa,
        items: matrix.items(),
        raters: matrix.raters(),
        categories,
        item_agreement,
        observed_agreement,
        expected_agreement,
        interpretation: Interpretation::from_kappa(kappa),
    })
}
