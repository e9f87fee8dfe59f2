use crate::error::{FuzzyevalError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Shape family of a membership function, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Z,
    Triangular,
    S,
}

impl ShapeKind {
    /// Number of genes one function of this shape consumes
    pub const fn param_count(&self) -> usize {
        match self {
            Self::Z | Self::S => 2,
            Self::Triangular => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Z => "Z-shape",
            Self::Triangular => "triangular",
            Self::S => "S-shape",
        }
    }

    /// Build a function of this shape from exactly `param_count()` parameters
    pub fn build(&self, params: &[f64]) -> Result<MembershipFunction> {
        if params.len() != self.param_count() {
            return Err(FuzzyevalError::SchemaMismatch {
                expected: self.param_count(),
                actual: params.len(),
            });
        }
        Ok(match self {
            Self::Z => MembershipFunction::ZShape { a: params[0], b: params[1] },
            Self::Triangular => MembershipFunction::Triangular {
                a: params[0],
                b: params[1],
                c: params[2],
            },
            Self::S => MembershipFunction::SShape { a: params[0], b: params[1] },
        })
    }
}

/// Fuzzy membership function
///
/// Construction does not check parameter ordering; `evaluate` rejects
/// degenerate parameters with `DegenerateShape` before dividing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MembershipFunction {
    /// Falling edge: 1 below `a`, 0 above `b`
    ZShape { a: f64, b: f64 },
    /// Peak of exactly 1.0 at `b`
    Triangular { a: f64, b: f64, c: f64 },
    /// Rising edge: 0 below `a`, 1 above `b`
    SShape { a: f64, b: f64 },
}

impl MembershipFunction {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::ZShape { .. } => ShapeKind::Z,
            Self::Triangular { .. } => ShapeKind::Triangular,
            Self::SShape { .. } => ShapeKind::S,
        }
    }

    pub fn parameters(&self) -> Vec<f64> {
        match *self {
            Self::ZShape { a, b } | Self::SShape { a, b } => vec![a, b],
            Self::Triangular { a, b, c } => vec![a, b, c],
        }
    }

    /// Check `a < b` (and `b < c` for triangles). NaN parameters fail too.
    pub fn validate(&self) -> Result<()> {
        let well_formed = match *self {
            Self::ZShape { a, b } | Self::SShape { a, b } => a < b,
            Self::Triangular { a, b, c } => a < b && b < c,
        };
        if well_formed {
            Ok(())
        } else {
            Err(FuzzyevalError::DegenerateShape {
                shape: self.kind().as_str(),
                params: self.parameters(),
            })
        }
    }

    /// Degree of membership of `x`. Inside (a, b) the Z and S quadratics
    /// reach below 0 and above 1 respectively.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.validate()?;
        Ok(self.degree(x))
    }

    /// Element-wise evaluation over a grid of inputs
    pub fn evaluate_batch(&self, xs: &[f64]) -> Result<Vec<f64>> {
        self.validate()?;
        Ok(xs.par_iter().map(|&x| self.degree(x)).collect())
    }

    // Callers must have validated the parameters.
    fn degree(&self, x: f64) -> f64 {
        // NaN falls in no region of any shape
        if x.is_nan() {
            return 0.0;
        }
        match *self {
            Self::ZShape { a, b } => {
                if x <= a {
                    1.0
                } else if x >= b {
                    0.0
                } else {
                    let t = (x - a) / (b - a);
                    1.0 - 2.0 * t * t
                }
            }
            Self::Triangular { a, b, c } => {
                if x <= a || x >= c {
                    0.0
                } else if x == b {
                    1.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            Self::SShape { a, b } => {
                if x <= a {
                    0.0
                } else if x >= b {
                    1.0
                } else {
                    let t = (x - a) / (b - a);
                    2.0 * t * t
                }
            }
        }
    }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
