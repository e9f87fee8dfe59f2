use crate::fuzzy::ShapeKind;

/// Term layout of a linguistic variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Z, Tri, Tri, Tri, S
    FiveTerms,
    /// Z, Tri, S
    ThreeTerms,
}

impl Partition {
    pub const fn shapes(&self) -> &'static [ShapeKind] {
        match self {
            Self::FiveTerms => &[
                ShapeKind::Z,
                ShapeKind::Triangular,
                ShapeKind::Triangular,
                ShapeKind::Triangular,
                ShapeKind::S,
            ],
            Self::ThreeTerms => &[ShapeKind::Z, ShapeKind::Triangular, ShapeKind::S],
        }
    }

    /// 13 for five terms, 7 for three
    pub const fn gene_count(&self) -> usize {
        let shapes = self.shapes();
        let mut total = 0;
        let mut i = 0;
        while i < shapes.len() {
            total += shapes[i].param_count();
            i += 1;
        }
        total
    }
}

/// One row of the fixed variable table
#[derive(Debug, Clone, Copy)]
pub struct VariableSchema {
    pub name: &'static str,
    pub title: &'static str,
    pub partition: Partition,
    pub domain: (f64, f64),
    pub labels: &'static [&'static str],
}

impl VariableSchema {
    pub const fn gene_count(&self) -> usize {
        self.partition.gene_count()
    }
}

const FIVE_LABELS: &[&str] = &["Negative Large", "Negative", "Zero", "Positive", "Positive Large"];

pub const VARIABLE_SCHEMA: [VariableSchema; 6] = [
    VariableSchema {
        name: "SpeedChange",
        title: "Speed Change",
        partition: Partition::FiveTerms,
        domain: (-10.0, 10.0),
        labels: FIVE_LABELS,
    },
    VariableSchema {
        name: "HeadingChange",
        title: "Heading Change",
        partition: Partition::FiveTerms,
        domain: (-180.0, 180.0),
        labels: FIVE_LABELS,
    },
    VariableSchema {
        name: "VerticalRateChange",
        title: "Vertical Rate Change",
        partition: Partition::FiveTerms,
        domain: (-20.0, 20.0),
        labels: FIVE_LABELS,
    },
    VariableSchema {
        name: "AltitudeChange",
        title: "Altitude Change",
        partition: Partition::FiveTerms,
        domain: (-1000.0, 1000.0),
        labels: FIVE_LABELS,
    },
    VariableSchema {
        name: "TimeGap",
        title: "Time Gap",
        partition: Partition::ThreeTerms,
        domain: (0.0, 60.0),
        labels: &["Small", "Medium", "Large"],
    },
    VariableSchema {
        name: "AnomalyLevel",
        title: "Anomaly Level",
        partition: Partition::ThreeTerms,
        domain: (0.0, 1.0),
        labels: &["Low", "Medium", "High"],
    },
];

pub const TOTAL_GENES: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < VARIABLE_SCHEMA.len() {
        total += VARIABLE_SCHEMA[i].gene_count();
        i += 1;
    }
    total
};

pub fn find_schema(name: &str) -> Option<&'static VariableSchema> {
    VARIABLE_SCHEMA.iter().find(|s| s.name == name)
}
