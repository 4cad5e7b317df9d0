//! Landis-Kochの基準によるKappa値の解釈

use serde::Serialize;

/// Kappa値の定性的な区分
///
/// | kappa | 区分 |
/// |---|---|
/// | < 0.00 | poor |
/// | 0.00 – 0.20 | slight |
/// | 0.21 – 0.40 | fair |
/// | 0.41 – 0.60 | moderate |
/// | 0.61 – 0.80 | substantial |
/// | 0.81 – 1.00 | almost perfect |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    Poor,
    Slight,
    Fair,
    Moderate,
    Substantial,
    AlmostPerfect,
}

impl Interpretation {
    pub fn from_kappa(kappa: f64) -> Self {
        if kappa < 0.0 {
            Interpretation::Poor
        } else if kappa <= 0.20 {
            Interpretation::Slight
        } else if kappa <= 0.40 {
            Interpretation::Fair
        } else if kappa <= 0.60 {
            Interpretation::Moderate
        } else if kappa <= 0.80 {
            Interpretation::Substantial
        } else {
            Interpretation::AlmostPerfect
        }
    }

    /// 日本語の区分名
    pub fn label_ja(&self) -> &'static str {
        match self {
            Interpretation::Poor => "一致なし",
            Interpretation::Slight => "わずかに一致",
            Interpretation::Fair => "まずまずの一致",
            Interpretation::Moderate => "中程度の一致",
            Interpretation::Substantial => "かなりの一致",
            Interpretation::AlmostPerfect => "ほぼ完全な一致",
        }
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interpretation::Poor => write!(f, "poor"),
            Interpretation::Slight => write!(f, "slight"),
            Interpretation::Fair => write!(f, "fair"),
            Interpretation::Moderate => write!(f, "moderate"),
            Interpretation::Substantial => write!(f, "substantial"),
            Interpretation::AlmostPerfect => write!(f, "almost perfect"),
        }
    }
}
