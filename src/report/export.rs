use crate::engines::metrics::AnalysisReport;
use crate::error::Result;
use crate::types::MembershipCurve;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CURVES_FILE: &str = "membership_curves.csv";
pub const COMPARISON_FILE: &str = "mf_comparison.csv";
pub const SUMMARY_FILE: &str = "analysis_summary.txt";
pub const REPORT_FILE: &str = "analysis.json";

/// Writes the artifacts the chart renderer consumes
pub struct ReportExporter {
    output_dir: PathBuf,
}

impl ReportExporter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Long-format CSV: one `variable,term,x,degree` row per sample
    pub fn write_curves(&self, file_name: &str, curves: &[MembershipCurve]) -> Result<PathBuf> {
        let mut df = Self::curves_frame(curves)?;
        let path = self.output_dir.join(file_name);
        let mut file = File::create(&path)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        log::info!("Saved: {}", path.display());
        Ok(path)
    }

    /// Curves from two parameter sets side by side, tagged by `source`
    pub fn write_comparison(
        &self,
        baseline: &[MembershipCurve],
        optimized: &[MembershipCurve],
    ) -> Result<PathBuf> {
        let mut baseline_df = Self::curves_frame(baseline)?;
        baseline_df.with_column(Column::new("source".into(), vec!["default"; baseline_df.height()]))?;
        let mut optimized_df = Self::curves_frame(optimized)?;
        optimized_df.with_column(Column::new("source".into(), vec!["optimized"; optimized_df.height()]))?;

        let mut df = baseline_df.vstack(&optimized_df)?;
        let path = self.output_dir.join(COMPARISON_FILE);
        let mut file = File::create(&path)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        log::info!("Saved: {}", path.display());
        Ok(path)
    }

    pub fn write_summary(&self, summary: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(SUMMARY_FILE);
        fs::write(&path, summary)?;
        log::info!("Saved: {}", path.display());
        Ok(path)
    }

    pub fn write_report(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let path = self.output_dir.join(REPORT_FILE);
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, report)?;
        log::info!("Saved: {}", path.display());
        Ok(path)
    }

    fn curves_frame(curves: &[MembershipCurve]) -> Result<DataFrame> {
        let total: usize = curves.iter().map(|c| c.points.len()).sum();
        let mut variables = Vec::with_capacity(total);
        let mut terms = Vec::with_capacity(total);
        let mut xs = Vec::with_capacity(total);
        let mut degrees = Vec::with_capacity(total);

        for curve in curves {
            for &(x, y) in &curve.points {
                variables.push(curve.variable.clone());
                terms.push(curve.term.clone());
                xs.push(x);
                degrees.push(y);
            }
        }

        Ok(df! {
            "variable" => variables,
            "term" => terms,
            "x" => xs,
            "degree" => degrees,
        }?)
    }
}
