//! Kappa計算結果の出力

use super::AgreementResult;
use crate::error::Result;
use review_tools_common::KappaReport;
use std::fmt::Write;

/// テキスト形式
pub fn render_text(result: &AgreementResult, verbose: bool) -> String {
    let report = &result.report;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Fleiss' Kappa: {:.4} ({} / {})",
        report.kappa,
        report.interpretation,
        report.interpretation.label_ja()
    );
    let _ = writeln!(
        out,
        "  論文数: {}  評価者数: {}  カテゴリ数: {}",
        report.items,
        report.raters,
        report.categories.len()
    );
    let _ = writeln!(out, "  観測一致率 P̄:  {:.4}", report.observed_agreement);
    let _ = writeln!(out, "  期待一致率 P̄e: {:.4}", report.expected_agreement);

    if verbose {
        let _ = writeln!(out, "  評価者: {}", result.raters.join(", "));
        let _ = writeln!(out, "  カテゴリ別の割合:");
        for c in &report.categories {
            let _ = writeln!(out, "    {}: {:.4}", c.category, c.proportion);
        }
        let _ = writeln!(out, "  論文ごとの一致度:");
        for (label, p) in result.item_labels.iter().zip(&report.item_agreement) {
            let _ = writeln!(out, "    {}: {:.4}", label, p);
        }
    }

    out
}

/// JSON形式
pub fn render_json(report: &KappaReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
