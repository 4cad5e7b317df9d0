//! 投票の集計
//!
//! (論文 × 評価者) の投票リストを (論文 × カテゴリ) の件数行列に変換する。
//!
//! ```text
//!         | 評価者1 | 評価者2 | 評価者3 |            || 'A' | '1' | '4' |
//! 論文1   |   4     |   4     |   4     |    ==>   論文1 ||  0  |  0  |  3  |
//! 論文2   |   A     |   4     |   A     |          論文2 ||  2  |  0  |  1  |
//! ```
//!
//! 各行の合計は評価者数 n に等しい。

use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// 二値モードで採択とみなす既定のラベル
pub const DEFAULT_ACCEPT_LABEL: &str = "A";

/// 二値モードのカテゴリ名
pub const ACCEPT_CATEGORY: &str = "Accept";
pub const REJECT_CATEGORY: &str = "Reject";

/// ラベルからカテゴリへの対応づけ
///
/// どちらのモードもラベルの大文字・小文字を区別しない（`a` と `A` は同じ票）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryMode {
    /// ラベルを（大文字に揃えて）そのままカテゴリとして扱う
    #[default]
    Multi,
    /// 採択ラベル以外をすべて Reject にまとめる
    Binary { accept: String },
}

impl CategoryMode {
    pub fn binary(accept: impl Into<String>) -> Self {
        CategoryMode::Binary { accept: accept.into() }
    }

    /// ラベルをカテゴリ名に変換
    pub fn categorize(&self, label: &str) -> String {
        match self {
            CategoryMode::Multi => label.to_ascii_uppercase(),
            CategoryMode::Binary { accept } => {
                if label.eq_ignore_ascii_case(accept.trim()) {
                    ACCEPT_CATEGORY.to_string()
                } else {
                    REJECT_CATEGORY.to_string()
                }
            }
        }
    }
}

/// 項目 × カテゴリの件数行列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyMatrix {
    categories: Vec<String>,
    counts: Vec<Vec<u32>>,
    raters: u32,
}

impl TallyMatrix {
    /// 投票リストから件数行列を作成
    ///
    /// 空のセルは未投票として無視する。二値モードでは投票がなくても
    /// Accept/Reject の2カテゴリを常に持つ。
    pub fn from_votes<S: AsRef<str>>(rows: &[Vec<S>], mode: &CategoryMode) -> Result<Self> {
        let categorized: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| v.as_ref().trim())
                    .filter(|v| !v.is_empty())
                    .map(|v| mode.categorize(v))
                    .collect()
            })
            .collect();

        let categories: Vec<String> = match mode {
            CategoryMode::Binary { .. } => {
                vec![ACCEPT_CATEGORY.to_string(), REJECT_CATEGORY.to_string()]
            }
            CategoryMode::Multi => categorized
                .iter()
                .flatten()
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        };

        let counts = categorized
            .iter()
            .map(|votes| {
                categories
                    .iter()
                    .map(|cat| votes.iter().filter(|v| *v == cat).count() as u32)
                    .collect()
            })
            .collect();

        Self::from_counts(categories, counts)
    }

    /// 件数行列を直接指定して作成
    pub fn from_counts(categories: Vec<String>, counts: Vec<Vec<u32>>) -> Result<Self> {
        let first = counts.first().ok_or(Error::NoItems)?;
        let raters: u32 = first.iter().sum();

        for (i, row) in counts.iter().enumerate() {
            if row.len() != categories.len() {
                return Err(Error::CategoryMismatch {
                    item: i + 1,
                    expected: categories.len(),
                    found: row.len(),
                });
            }
            let found: u32 = row.iter().sum();
            if found != raters {
                return Err(Error::InconsistentRaters {
                    item: i + 1,
                    expected: raters,
                    found,
                });
            }
        }

        if raters < 2 {
            return Err(Error::TooFewRaters { found: raters });
        }

        Ok(Self { categories, counts, raters })
    }

    /// 項目数 N
    pub fn items(&self) -> usize {
        self.counts.len()
    }

    /// 項目あたりの評価者数 n
    pub fn raters(&self) -> u32 {
        self.raters
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn counts(&self) -> &[Vec<u32>] {
        &self.counts
    }

    /// カテゴリごとの総投票数
    pub fn category_totals(&self) -> Vec<u32> {
        (0..self.categories.len())
            .map(|j| self.counts.iter().map(|row| row[j]).sum())
            .collect()
    }
}
