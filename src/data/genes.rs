use crate::engines::decoding::Chromosome;
use crate::error::{FuzzyevalError, Result};
use std::path::Path;

/// Reads optimizer output: `#` comments, blank lines and comma-separated reals
pub struct GeneFileReader;

impl GeneFileReader {
    /// Concatenate every numeric token in file order
    pub fn parse(contents: &str) -> Result<Vec<f64>> {
        let mut genes = Vec::new();

        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let value = token.parse::<f64>().map_err(|_| FuzzyevalError::Parse {
                    line: line_no + 1,
                    token: token.to_string(),
                })?;
                genes.push(value);
            }
        }

        Ok(genes)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FuzzyevalError::NotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let genes = Self::parse(&contents)?;
        log::info!("Loaded {} genes from {}", genes.len(), path.display());
        Ok(genes)
    }

    /// Load and validate a full 66-gene chromosome
    pub fn load_chromosome<P: AsRef<Path>>(path: P) -> Result<Chromosome> {
        Chromosome::new(Self::load(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let contents = "# best chromosome\n\n1.5, -2.0,3\n  # trailing comment\n4e-1,\n";
        let genes = GeneFileReader::parse(contents).unwrap();
        assert_eq!(genes, vec![1.5, -2.0, 3.0, 0.4]);
    }

    #[test]
    fn test_parse_reports_bad_token() {
        let err = GeneFileReader::parse("1.0, 2.0\n3.0, abc\n").unwrap_err();
        assert!(matches!(
            err,
            FuzzyevalError::Parse { line: 2, ref token } if token == "abc"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = GeneFileReader::load("/nonexistent/optimized_params.txt").unwrap_err();
        assert!(matches!(err, FuzzyevalError::NotFound { .. }));
    }
}
