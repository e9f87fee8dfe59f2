use super::gene_consumer::GeneConsumer;
use super::schema::{VariableSchema, TOTAL_GENES, VARIABLE_SCHEMA};
use crate::error::{FuzzyevalError, Result};
use crate::fuzzy::{LinguisticVariable, Term};

/// Chromosome representation of the fuzzy membership parameters
///
/// A chromosome is the flat vector of 66 reals produced by the optimizer.
/// Genes are consumed contiguously in `VARIABLE_SCHEMA` order:
/// - SpeedChange, HeadingChange, VerticalRateChange, AltitudeChange take 13
///   genes each (Z, Tri, Tri, Tri, S)
/// - TimeGap and AnomalyLevel take 7 genes each (Z, Tri, S)
///
/// Decoding never checks parameter ordering. A degenerate function decodes
/// fine and only fails once it is evaluated.
///
/// # Example
///
/// ```
/// use fuzzyeval::engines::decoding::Chromosome;
///
/// let chromosome = Chromosome::default();
/// let variables = chromosome.decode().unwrap();
/// assert_eq!(variables.len(), 6);
/// assert_eq!(variables[0].name(), "SpeedChange");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<f64>,
}

/// Reference parameters the optimizer starts from
#[rustfmt::skip]
pub const DEFAULT_GENES: [f64; TOTAL_GENES] = [
    // SpeedChange
    -6.0, -3.0,
    -6.0, -3.0, 0.0,
    -1.0, 0.0, 1.0,
    0.0, 3.0, 6.0,
    3.0, 6.0,
    // HeadingChange
    -90.0, -30.0,
    -60.0, -20.0, 0.0,
    -5.0, 0.0, 5.0,
    0.0, 20.0, 60.0,
    30.0, 90.0,
    // VerticalRateChange
    -10.0, -5.0,
    -10.0, -5.0, 0.0,
    -1.0, 0.0, 1.0,
    0.0, 5.0, 10.0,
    5.0, 10.0,
    // AltitudeChange
    -500.0, -100.0,
    -500.0, -100.0, 0.0,
    -50.0, 0.0, 50.0,
    0.0, 100.0, 500.0,
    100.0, 500.0,
    // TimeGap
    1.0, 5.0,
    3.0, 10.0, 20.0,
    15.0, 30.0,
    // AnomalyLevel
    0.2, 0.4,
    0.2, 0.5, 0.8,
    0.6, 0.8,
];

impl Chromosome {
    /// Wrap a gene vector, rejecting anything but exactly 66 genes
    pub fn new(genes: Vec<f64>) -> Result<Self> {
        if genes.len() != TOTAL_GENES {
            return Err(FuzzyevalError::SchemaMismatch {
                expected: TOTAL_GENES,
                actual: genes.len(),
            });
        }
        Ok(Self { genes })
    }

    /// Per-variable gene slices in schema order
    pub fn parameter_slices(&self) -> Vec<(&'static VariableSchema, &[f64])> {
        let mut offset = 0;
        VARIABLE_SCHEMA
            .iter()
            .map(|schema| {
                let end = offset + schema.gene_count();
                let slice = &self.genes[offset..end];
                offset = end;
                (schema, slice)
            })
            .collect()
    }

    /// One linguistic variable per schema entry
    pub fn decode(&self) -> Result<Vec<LinguisticVariable>> {
        decode(&self.genes)
    }

    /// Decoded variable by schema name
    pub fn variable(&self, name: &str) -> Result<Option<LinguisticVariable>> {
        Ok(self.decode()?.into_iter().find(|v| v.name() == name))
    }
}

impl Default for Chromosome {
    fn default() -> Self {
        Self {
            genes: DEFAULT_GENES.to_vec(),
        }
    }
}

/// Validate and decode a raw gene vector
pub fn decode(genes: &[f64]) -> Result<Vec<LinguisticVariable>> {
    if genes.len() != TOTAL_GENES {
        return Err(FuzzyevalError::SchemaMismatch {
            expected: TOTAL_GENES,
            actual: genes.len(),
        });
    }

    let mut consumer = GeneConsumer::new(genes);
    let variables = VARIABLE_SCHEMA
        .iter()
        .map(|schema| decode_variable(schema, &mut consumer))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Decoded {} genes into {} linguistic variables",
        consumer.position(),
        variables.len()
    );
    Ok(variables)
}

/// Decode a single variable's parameters, as laid out by `schema`
pub fn decode_variable(
    schema: &VariableSchema,
    consumer: &mut GeneConsumer<'_>,
) -> Result<LinguisticVariable> {
    let terms = schema
        .partition
        .shapes()
        .iter()
        .zip(schema.labels.iter())
        .map(|(shape, label)| {
            let params = consumer.take(shape.param_count())?;
            Ok(Term {
                label: (*label).to_string(),
                function: shape.build(params)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LinguisticVariable::new(schema.name, schema.domain, terms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::MembershipFunction;

    #[test]
    fn test_default_genes_decode() {
        let variables = decode(&DEFAULT_GENES).unwrap();
        let names: Vec<&str> = variables.iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            vec!["SpeedChange", "HeadingChange", "VerticalRateChange", "AltitudeChange", "TimeGap", "AnomalyLevel"]
        );

        let speed = &variables[0];
        assert_eq!(speed.terms()[0].function, MembershipFunction::ZShape { a: -6.0, b: -3.0 });
        assert_eq!(
            speed.terms()[2].function,
            MembershipFunction::Triangular { a: -1.0, b: 0.0, c: 1.0 }
        );
        assert_eq!(speed.terms()[4].function, MembershipFunction::SShape { a: 3.0, b: 6.0 });

        let anomaly = &variables[5];
        assert_eq!(anomaly.domain(), (0.0, 1.0));
        assert_eq!(anomaly.terms()[1].label, "Medium");
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = decode(&[0.0; 65]).unwrap_err();
        assert!(matches!(
            err,
            FuzzyevalError::SchemaMismatch { expected: 66, actual: 65 }
        ));
        assert!(Chromosome::new(vec![0.0; 67]).is_err());
    }

    #[test]
    fn test_chromosome_decode_matches_free_decode() {
        let genes: Vec<f64> = (0..66).map(|i| i as f64).collect();
        let chromosome = Chromosome::new(genes.clone()).unwrap();
        assert_eq!(chromosome.decode().unwrap(), decode(&genes).unwrap());

        let slices = chromosome.parameter_slices();
        assert_eq!(slices[4].1, &genes[52..59]);
        assert_eq!(chromosome.variable("TimeGap").unwrap().unwrap().parameters(), genes[52..59].to_vec());
    }

    #[test]
    fn test_degenerate_genes_decode_but_fail_on_evaluate() {
        let mut genes = DEFAULT_GENES.to_vec();
        genes[1] = genes[0];
        let variables = decode(&genes).unwrap();
        assert!(variables[0].fuzzify(0.0).is_err());
    }
}
