//! 過去ラウンドの抽出結果の検出
//!
//! 候補論文CSVと同じフォルダにある `papers_round_<番号>.csv` を
//! 過去ラウンドの抽出結果として扱う。

use super::table::PaperTable;
use crate::error::{ReviewError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

lazy_static::lazy_static! {
    // ファイル名末尾の _<番号>
    static ref ROUND_NUMBER_RE: Regex = Regex::new(r"_(\d+)$").unwrap();
}

/// 過去ラウンドのファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFile {
    pub path: PathBuf,
    pub file_name: String,
    pub number: u32,
}

/// 過去ラウンドの集計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInfo {
    pub number: u32,
    pub file_name: String,
    pub papers: usize,
}

/// フォルダ直下のラウンドファイルをラウンド番号順に列挙
///
/// 対象: 名前に `prefix` を含む `.csv` ファイル。`.~` で始まる
/// ロックファイルと番号を判別できないファイルは除外する。
pub fn discover_rounds(folder: &Path, prefix: &str) -> Result<Vec<RoundFile>> {
    if !folder.is_dir() {
        return Err(ReviewError::FolderNotFound(folder.display().to_string()));
    }

    let mut rounds = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.contains(prefix) || file_name.starts_with(".~") {
            continue;
        }

        let is_csv = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        match parse_round_number(&stem) {
            Some(number) => rounds.push(RoundFile {
                path: path.to_path_buf(),
                file_name,
                number,
            }),
            None => log::warn!("ラウンド番号を判別できないためスキップします: {}", file_name),
        }
    }

    rounds.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.file_name.cmp(&b.file_name)));

    Ok(rounds)
}

/// `papers_round_3` → 3
pub fn parse_round_number(stem: &str) -> Option<u32> {
    ROUND_NUMBER_RE
        .captures(stem)
        .and_then(|cap| cap[1].parse().ok())
}

/// 次のラウンド番号（過去ラウンドの最大値 + 1）
pub fn next_round_number(rounds: &[RoundFile]) -> u32 {
    rounds.iter().map(|r| r.number).max().unwrap_or(0) + 1
}

pub fn round_file_name(prefix: &str, number: u32) -> String {
    format!("{}_{}.csv", prefix, number)
}

/// 過去ラウンドで抽出済みの論文IDを収集
pub fn load_selected_ids(
    rounds: &[RoundFile],
    id_column: &str,
) -> Result<(HashSet<String>, Vec<RoundInfo>)> {
    let mut selected = HashSet::new();
    let mut infos = Vec::with_capacity(rounds.len());

    for round in rounds {
        log::info!("Processing: {}", round.path.display());
        let table = PaperTable::load(&round.path, id_column)?;
        log::info!("ラウンド{}: {}件", round.number, table.len());

        infos.push(RoundInfo {
            number: round.number,
            file_name: round.file_name.clone(),
            papers: table.len(),
        });
        selected.extend(table.ids());
    }

    Ok((selected, infos))
}
