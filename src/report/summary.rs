use crate::engines::metrics::{ClassificationMetrics, ErrorStatistics};
use crate::types::DECISION_THRESHOLD;

const RULE_WIDTH: usize = 60;

/// Plain-text results summary, written verbatim to `analysis_summary.txt`
pub fn render_summary(stats: &ErrorStatistics, classification: &ClassificationMetrics) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut report = vec![
        rule.clone(),
        "OPTIMIZATION RESULTS SUMMARY".to_string(),
        rule.clone(),
        String::new(),
        format!("Total Samples: {}", stats.sample_count),
        String::new(),
        "Error Statistics:".to_string(),
        format!("  Mean Error:     {:8.4}", stats.mean_error),
        format!("  Std Error:      {:8.4}", stats.std_error),
        format!("  Mean Abs Error: {:8.4}", stats.mean_abs_error),
        format!("  Max Abs Error:  {:8.4}", stats.max_abs_error),
        format!("  Min Abs Error:  {:8.4}", stats.min_abs_error),
        String::new(),
        format!("  MSE:            {:8.4}", stats.mse),
        format!("  RMSE:           {:8.4}", stats.rmse),
        String::new(),
        format!("  R² Score:       {:8.4}", stats.r2),
        String::new(),
    ];

    report.push(format!("Classification Performance (threshold={}):", DECISION_THRESHOLD));
    report.push(format!("  Accuracy:       {:8.4}", classification.accuracy));
    report.push(format!("  Precision:      {:8.4}", classification.precision));
    report.push(format!("  Recall:         {:8.4}", classification.recall));
    report.push(format!("  F1 Score:       {:8.4}", classification.f1));
    report.push(String::new());
    report.push(rule);

    report.join("\n")
}
