//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("評価対象の項目がありません")]
    NoItems,

    #[error("評価者が2人未満です（{found}人）")]
    TooFewRaters { found: u32 },

    #[error("項目{item}の評価者数が一致しません（期待: {expected}人, 実際: {found}人）")]
    InconsistentRaters { item: usize, expected: u32, found: u32 },

    #[error("項目{item}のカテゴリ数が一致しません（期待: {expected}, 実際: {found}）")]
    CategoryMismatch { item: usize, expected: usize, found: usize },

    #[error("全ての投票が同一カテゴリのためKappaを定義できません（期待一致率 = 1, 観測一致率 = {observed:.4}）")]
    DegenerateAgreement { observed: f64 },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_inconsistent_raters() {
        let error = Error::InconsistentRaters { item: 3, expected: 4, found: 2 };
        let display = format!("{}", error);
        assert!(display.contains("項目3"));
        assert!(display.contains("期待: 4人"));
        assert!(display.contains("実際: 2人"));
    }

    #[test]
    fn test_error_display_degenerate() {
        let error = Error::DegenerateAgreement { observed: 1.0 };
        let display = format!("{}", error);
        assert!(display.contains("Kappa"));
        assert!(display.contains("1.0000"));
    }

    #[test]
    fn test_error_display_too_few_raters() {
        let error = Error::TooFewRaters { found: 1 };
        assert_eq!(format!("{}", error), "評価者が2人未満です（1人）");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NoItems;
        let debug = format!("{:?}", error);
        assert!(debug.contains("NoItems"));
    }
}
