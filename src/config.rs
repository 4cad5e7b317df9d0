use crate::error::{ReviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 乱数シードの既定値を与える環境変数
pub const SEED_ENV: &str = "REVIEW_TOOLS_SEED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 1ラウンドで抽出する論文数
    pub default_sample_size: usize,
    /// 論文を識別する列名
    pub id_column: String,
    /// ラウンドファイル名の接頭辞（papers_round_<番号>.csv）
    pub round_prefix: String,
    /// 二値モードで採択とみなすラベル
    pub accept_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込みました: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReviewError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("review-tools").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            default_sample_size: 35,
            id_column: "Article".into(),
            round_prefix: "papers_round".into(),
            accept_label: "A".into(),
        }
    }

    /// 環境変数から乱数シードを取得
    pub fn default_seed() -> Result<Option<u64>> {
        match std::env::var(SEED_ENV) {
            Ok(value) => parse_seed(&value).map(Some),
            Err(_) => Ok(None),
        }
    }

    pub fn set_sample_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(ReviewError::EmptySample);
        }
        self.default_sample_size = size;
        Ok(())
    }

    pub fn set_id_column(&mut self, column: String) -> Result<()> {
        let column = column.trim().to_string();
        if column.is_empty() {
            return Err(ReviewError::Config("列名が空です".into()));
        }
        self.id_column = column;
        Ok(())
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ReviewError::Config(format!("{} が不正です: {}", SEED_ENV, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();

        assert_eq!(config.default_sample_size, 35);
        assert_eq!(config.id_column, "Article");
        assert_eq!(config.round_prefix, "papers_round");
        assert_eq!(config.accept_label, "A");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_sample_size(50).unwrap();
        config.set_id_column("Title".to_string()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "id_column": "Title" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.id_column, "Title");
        assert_eq!(config.default_sample_size, 35);
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ReviewError::JsonParse(_)));
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        let mut config = Config::default();
        assert!(matches!(config.set_sample_size(0), Err(ReviewError::EmptySample)));
        assert_eq!(config.default_sample_size, 35);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        assert!(matches!(parse_seed("abc"), Err(ReviewError::Config(_))));
    }
}
