//! 投票CSVの読み込み
//!
//! ```text
//!         | rater 1 | rater 2 | rater 3 |
//! paper 1 |    A    |    4    |    A    |
//! paper 2 |    1    |    1    |    1    |
//! ```
//!
//! 1行目はヘッダ。`item_column` を指定した列は論文名として扱い、
//! 投票からは除外する。

use crate::error::{ReviewError, Result};
use std::path::Path;

/// 論文1件分の投票
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVotes {
    pub label: String,
    pub votes: Vec<String>,
}

/// 投票表
#[derive(Debug, Clone)]
pub struct VoteTable {
    /// 評価者の列名
    pub raters: Vec<String>,
    pub items: Vec<ItemVotes>,
}

impl VoteTable {
    /// 集計用の (論文 × 投票) リスト
    pub fn vote_rows(&self) -> Vec<Vec<String>> {
        self.items.iter().map(|item| item.votes.clone()).collect()
    }
}

pub fn read_votes(path: &Path, item_column: Option<&str>) -> Result<VoteTable> {
    if !path.is_file() {
        return Err(ReviewError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let item_index = match item_column {
        Some(column) => Some(headers.iter().position(|h| h == column).ok_or_else(|| {
            ReviewError::MissingColumn {
                column: column.to_string(),
                file: path.display().to_string(),
            }
        })?),
        None => None,
    };

    let raters = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != item_index)
        .map(|(_, h)| h.clone())
        .collect();

    let mut items = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let label = item_index
            .and_then(|i| record.get(i))
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("#{}", row_no + 1));

        let votes: Vec<String> = record
            .iter()
            .enumerate()
            .filter(|(i, v)| Some(*i) != item_index && !v.is_empty())
            .map(|(_, v)| v.to_string())
            .collect();

        if votes.is_empty() {
            log::warn!("{} の{}行目は投票がないためスキップします", path.display(), row_no + 2);
            continue;
        }

        items.push(ItemVotes { label, votes });
    }

    log::debug!("投票表: {}件 × 評価者{}列", items.len(), headers.len());

    Ok(VoteTable { raters, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_votes_skips_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_2_scores.csv");
        std::fs::write(&path, "r1,r2,r3\nA, 4 ,A\n1,1,1\n").unwrap();

        let table = read_votes(&path, None).unwrap();
        assert_eq!(table.raters, vec!["r1", "r2", "r3"]);
        assert_eq!(table.items.len(), 2);
        assert_eq!(table.items[0].votes, vec!["A", "4", "A"]);
        assert_eq!(table.items[0].label, "#1");
    }

    #[test]
    fn test_item_column_excluded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, "r1,Article,r2\nA,Paper one,A\n2,Paper two,A\n").unwrap();

        let table = read_votes(&path, Some("Article")).unwrap();
        assert_eq!(table.raters, vec!["r1", "r2"]);
        assert_eq!(table.items[1].label, "Paper two");
        assert_eq!(table.vote_rows()[1], vec!["2", "A"]);
    }

    #[test]
    fn test_empty_rows_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, "r1,r2\nA,A\n,\n1,A\n").unwrap();

        let table = read_votes(&path, None).unwrap();
        assert_eq!(table.items.len(), 2);
    }

    #[test]
    fn test_unknown_item_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, "r1,r2\nA,A\n").unwrap();

        let err = read_votes(&path, Some("Article")).unwrap_err();
        assert!(matches!(err, ReviewError::MissingColumn { .. }));
    }
}
