//! 論文一覧CSVの読み書き
//!
//! 1行目をヘッダとし、識別列（既定 `Article`）の値で論文を識別する。
//! 識別列以外の列はそのまま保持し、出力時も元の列順で書き出す。

use crate::error::{ReviewError, Result};
use std::collections::HashSet;
use std::path::Path;

/// 論文1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    /// 識別列の値（前後の空白を除去）
    pub id: String,
    /// 全列の値（ヘッダ順）
    pub fields: Vec<String>,
}

/// 論文一覧
#[derive(Debug, Clone)]
pub struct PaperTable {
    headers: Vec<String>,
    id_index: usize,
    records: Vec<PaperRecord>,
}

impl PaperTable {
    pub fn load(path: &Path, id_column: &str) -> Result<Self> {
        if !path.is_file() {
            return Err(ReviewError::FileNotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let id_index = headers
            .iter()
            .position(|h| h == id_column)
            .ok_or_else(|| ReviewError::MissingColumn {
                column: id_column.to_string(),
                file: path.display().to_string(),
            })?;

        let mut records = Vec::new();
        for (row_no, result) in reader.records().enumerate() {
            let record = result?;
            let id = record.get(id_index).unwrap_or("").trim().to_string();
            if id.is_empty() {
                log::warn!("{} の{}行目は識別列が空のためスキップします", path.display(), row_no + 2);
                continue;
            }
            records.push(PaperRecord {
                id,
                fields: record.iter().map(|f| f.to_string()).collect(),
            });
        }

        Ok(Self { headers, id_index, records })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn id_column(&self) -> &str {
        &self.headers[self.id_index]
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> HashSet<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    /// 元のヘッダ付きで論文を書き出す
    pub fn write_subset(&self, path: &Path, records: &[PaperRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for record in records {
            writer.write_record(&record.fields)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HEADER: &str = "Responsável,Database,Tipo,Duplicado_na_linha,Downloaded,Autor(YEAR),Article,Link,Classificação";

    #[test]
    fn test_load_keeps_all_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_papers.csv");
        std::fs::write(
            &path,
            format!("{HEADER}\nAna,Scopus,Journal,,yes,Silva(2020),\"Deep, learning\",http://a,1\n"),
        )
        .unwrap();

        let table = PaperTable::load(&path, "Article").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.headers().len(), 9);
        assert_eq!(table.id_column(), "Article");
        assert_eq!(table.records()[0].id, "Deep, learning");
        assert_eq!(table.records()[0].fields[0], "Ana");
    }

    #[test]
    fn test_missing_id_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_papers.csv");
        std::fs::write(&path, "Title,Year\nA,2020\n").unwrap();

        let err = PaperTable::load(&path, "Article").unwrap_err();
        assert!(matches!(err, ReviewError::MissingColumn { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = PaperTable::load(Path::new("/nonexistent/all_papers.csv"), "Article").unwrap_err();
        assert!(matches!(err, ReviewError::FileNotFound(_)));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_papers.csv");
        std::fs::write(&path, "Article,Year\nA,2020\nB,2021,extra\n").unwrap();

        let err = PaperTable::load(&path, "Article").unwrap_err();
        assert!(matches!(err, ReviewError::Csv(_)));
    }

    #[test]
    fn test_blank_id_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_papers.csv");
        std::fs::write(&path, "Article,Year\nA,2020\n  ,2021\n").unwrap();

        let table = PaperTable::load(&path, "Article").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_write_subset_round_trips_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("all_papers.csv");
        std::fs::write(&path, "Article,Year\nA,2020\nB,2021\n").unwrap();
        let table = PaperTable::load(&path, "Article").unwrap();

        let out = dir.path().join("papers_round_1.csv");
        table.write_subset(&out, &table.records()[1..]).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "Article,Year\nB,2021\n");
    }
}
