use super::membership::{linspace, MembershipFunction};
use crate::error::{FuzzyevalError, Result};
use crate::types::MembershipCurve;
use serde::Serialize;

/// Labelled membership function within a linguistic variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub label: String,
    pub function: MembershipFunction,
}

/// Named fuzzy dimension partitioned into ordered terms over a domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinguisticVariable {
    name: String,
    domain: (f64, f64),
    terms: Vec<Term>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, domain: (f64, f64), terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            domain,
            terms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Flattened parameters in term order
    pub fn parameters(&self) -> Vec<f64> {
        self.terms.iter().flat_map(|t| t.function.parameters()).collect()
    }

    /// Membership degree of `x` in every term, in term order
    pub fn fuzzify(&self, x: f64) -> Result<Vec<f64>> {
        self.terms.iter().map(|t| t.function.evaluate(x)).collect()
    }

    /// Membership degree of `x` in the term named `label`
    pub fn membership(&self, label: &str, x: f64) -> Result<f64> {
        let term = self
            .terms
            .iter()
            .find(|t| t.label == label)
            .ok_or_else(|| FuzzyevalError::UnknownTerm {
                variable: self.name.clone(),
                label: label.to_string(),
            })?;
        term.function.evaluate(x)
    }

    /// Sample every term over the full domain
    pub fn sample_curves(&self, points: usize) -> Result<Vec<MembershipCurve>> {
        self.sample_curves_over(self.domain, points)
    }

    /// Sample every term over an explicit range
    pub fn sample_curves_over(&self, range: (f64, f64), points: usize) -> Result<Vec<MembershipCurve>> {
        let xs = linspace(range.0, range.1, points);
        self.terms
            .iter()
            .map(|term| {
                let ys = term.function.evaluate_batch(&xs)?;
                Ok(MembershipCurve {
                    variable: self.name.clone(),
                    term: term.label.clone(),
                    points: xs.iter().copied().zip(ys).collect(),
                })
            })
            .collect()
    }
}
