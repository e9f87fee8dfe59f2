//! Handlers behind each CLI subcommand.

use crate::cli::{AnalyzeArgs, MembershipArgs};
use crate::config::AppConfig;
use crate::data::{CsvConnector, GeneFileReader};
use crate::engines::decoding::Chromosome;
use crate::engines::metrics::{AnalysisReport, MetricsEngine};
use crate::error::{FuzzyevalError, Result};
use crate::report::{export::CURVES_FILE, render_parameter_summary, render_summary, ReportExporter};
use crate::types::MembershipCurve;
use std::path::Path;

/// Decode the gene file, print the parameter summary and export curves
pub fn execute_membership(args: &MembershipArgs, config: &AppConfig, output: &Path) -> Result<Vec<MembershipCurve>> {
    let chromosome = GeneFileReader::load_chromosome(&args.genes)?;
    println!("{}", render_parameter_summary(&chromosome));

    let points = args.points.unwrap_or(config.membership.sample_points);
    let variables = chromosome.decode()?;

    let mut curves = Vec::new();
    for variable in &variables {
        curves.extend(variable.sample_curves(points)?);
    }

    let exporter = ReportExporter::new(output)?;
    exporter.write_curves(CURVES_FILE, &curves)?;

    // Default vs optimized for the comparison variable
    let name = &config.membership.comparison_variable;
    let missing = || FuzzyevalError::Configuration(format!("Unknown comparison variable: {}", name));
    let baseline = Chromosome::default().variable(name)?.ok_or_else(missing)?;
    let optimized = chromosome.variable(name)?.ok_or_else(missing)?;
    exporter.write_comparison(&baseline.sample_curves(points)?, &optimized.sample_curves(points)?)?;

    Ok(curves)
}

/// Evaluate the prediction file and write the summary and JSON report
pub fn execute_analyze(args: &AnalyzeArgs, config: &AppConfig, output: &Path) -> Result<AnalysisReport> {
    let (dataset, metadata) =
        CsvConnector::load_with_metadata(&args.predictions, &config.analysis.feature_columns)?;
    let mut report = MetricsEngine::new(config.analysis.clone()).evaluate(&dataset);
    report.source = Some(metadata);

    let exporter = ReportExporter::new(output)?;
    if let (Some(stats), Some(classification)) = (&report.statistics, &report.classification) {
        let summary = render_summary(stats, classification);
        exporter.write_summary(&summary)?;
        println!("\n{}", summary);
    }
    exporter.write_report(&report)?;

    for failure in &report.failures {
        eprintln!("{} skipped: {}", failure.component, failure.message);
    }

    Ok(report)
}
