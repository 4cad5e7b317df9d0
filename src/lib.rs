//! 系統的文献レビュー支援ツール
//!
//! - [`papers`]: 候補論文から過去ラウンド分を除いて無作為抽出
//! - [`agreement`]: 投票CSVからFleiss' Kappaを計算

pub mod agreement;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod papers;
