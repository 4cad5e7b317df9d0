//! Review Tools Common Library
//!
//! CLIから利用される、IOを伴わない集計ロジック
//! （投票の集計・Fleiss' Kappa・Landis-Kochによる解釈）

pub mod error;
pub mod interpretation;
pub mod kappa;
pub mod tally;

pub use error::{Error, Result};
pub use interpretation::Interpretation;
pub use kappa::{fleiss_kappa, CategoryProportion, KappaReport};
pub use tally::{CategoryMode, TallyMatrix, ACCEPT_CATEGORY, DEFAULT_ACCEPT_LABEL, REJECT_CATEGORY};
