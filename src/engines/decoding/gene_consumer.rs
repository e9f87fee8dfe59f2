use crate::error::{FuzzyevalError, Result};

/// Consumes genes from a chromosome in order, without wrapping
pub struct GeneConsumer<'a> {
    genes: &'a [f64],
    position: usize,
}

impl<'a> GeneConsumer<'a> {
    pub fn new(genes: &'a [f64]) -> Self {
        Self { genes, position: 0 }
    }

    /// Take the next `count` genes as a contiguous slice
    pub fn take(&mut self, count: usize) -> Result<&'a [f64]> {
        let end = self.position + count;
        if end > self.genes.len() {
            return Err(FuzzyevalError::SchemaMismatch {
                expected: end,
                actual: self.genes.len(),
            });
        }
        let slice = &self.genes[self.position..end];
        self.position = end;
        Ok(slice)
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_contiguous() {
        let genes = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut consumer = GeneConsumer::new(&genes);
        assert_eq!(consumer.take(2).unwrap(), &[1.0, 2.0]);
        assert_eq!(consumer.take(3).unwrap(), &[3.0, 4.0, 5.0]);
        assert_eq!(consumer.position(), 5);
    }

    #[test]
    fn test_take_past_end_fails() {
        let genes = [1.0, 2.0];
        let mut consumer = GeneConsumer::new(&genes);
        assert!(consumer.take(3).is_err());
        // a failed take leaves the position untouched
        assert_eq!(consumer.position(), 0);
    }
}
