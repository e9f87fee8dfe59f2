use fuzzyeval::data::GeneFileReader;
use fuzzyeval::engines::decoding::{decode, Chromosome, DEFAULT_GENES, TOTAL_GENES};
use fuzzyeval::error::FuzzyevalError;
use fuzzyeval::fuzzy::ShapeKind;
use proptest::prelude::*;
use std::fs;

#[test]
fn test_default_chromosome_slices() {
    let chromosome = Chromosome::default();
    let sizes: Vec<usize> = chromosome
        .parameter_slices()
        .iter()
        .map(|(_, params)| params.len())
        .collect();
    assert_eq!(sizes, vec![13, 13, 13, 13, 7, 7]);
}

#[test]
fn test_decoded_shapes_follow_partition() {
    let variables = decode(&DEFAULT_GENES).unwrap();
    let names: Vec<&str> = variables.iter().map(|v| v.name()).collect();
    assert_eq!(
        names,
        vec!["SpeedChange", "HeadingChange", "VerticalRateChange", "AltitudeChange", "TimeGap", "AnomalyLevel"]
    );

    let speed: Vec<ShapeKind> = variables[0].terms().iter().map(|t| t.function.kind()).collect();
    assert_eq!(
        speed,
        vec![ShapeKind::Z, ShapeKind::Triangular, ShapeKind::Triangular, ShapeKind::Triangular, ShapeKind::S]
    );

    let time_gap: Vec<ShapeKind> = variables[4].terms().iter().map(|t| t.function.kind()).collect();
    assert_eq!(time_gap, vec![ShapeKind::Z, ShapeKind::Triangular, ShapeKind::S]);
}

#[test]
fn test_parameters_round_trip_in_order() {
    let genes: Vec<f64> = (0..TOTAL_GENES).map(|i| i as f64).collect();
    let variables = decode(&genes).unwrap();
    let flattened: Vec<f64> = variables.iter().flat_map(|v| v.parameters()).collect();
    assert_eq!(flattened, genes);
}

#[test]
fn test_short_vector_reports_counts() {
    let err = decode(&DEFAULT_GENES[..65]).unwrap_err();
    match err {
        FuzzyevalError::SchemaMismatch { expected, actual } => {
            assert_eq!(expected, 66);
            assert_eq!(actual, 65);
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }
}

#[test]
fn test_degenerate_genes_decode_but_fail_on_evaluation() {
    let mut genes = DEFAULT_GENES.to_vec();
    // collapse SpeedChange's Z edge
    genes[1] = genes[0];
    let chromosome = Chromosome::new(genes).unwrap();
    let speed = chromosome.variable("SpeedChange").unwrap().unwrap();

    assert!(matches!(
        speed.fuzzify(0.0),
        Err(FuzzyevalError::DegenerateShape { .. })
    ));
}

#[test]
fn test_gene_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("optimized_params.txt");
    let body: Vec<String> = DEFAULT_GENES.chunks(13).map(|chunk| {
        chunk.iter().map(|g| g.to_string()).collect::<Vec<_>>().join(", ")
    }).collect();
    fs::write(&path, format!("# generation 42\n\n{}\n", body.join("\n"))).unwrap();

    let chromosome = GeneFileReader::load_chromosome(&path).unwrap();
    assert_eq!(chromosome, Chromosome::default());

    let altitude = chromosome.variable("AltitudeChange").unwrap().unwrap();
    let degrees = altitude.fuzzify(0.0).unwrap();
    assert_eq!(degrees.len(), 5);
    assert_eq!(degrees[2], 1.0);
}

#[test]
fn test_gene_file_with_wrong_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "1.0, 2.0, 3.0\n").unwrap();

    assert!(matches!(
        GeneFileReader::load_chromosome(&path),
        Err(FuzzyevalError::SchemaMismatch { expected: 66, actual: 3 })
    ));
}

proptest! {
    #[test]
    fn any_full_vector_splits_by_schema(genes in prop::collection::vec(-1.0e6..1.0e6f64, TOTAL_GENES)) {
        let chromosome = Chromosome::new(genes.clone()).unwrap();
        let sizes: Vec<usize> = chromosome
            .parameter_slices()
            .iter()
            .map(|(_, params)| params.len())
            .collect();
        prop_assert_eq!(sizes, vec![13, 13, 13, 13, 7, 7]);

        // decoding never reorders or drops genes, whatever their values
        let variables = chromosome.decode().unwrap();
        prop_assert_eq!(variables.len(), 6);
        let flattened: Vec<f64> = variables.iter().flat_map(|v| v.parameters()).collect();
        prop_assert_eq!(flattened, genes);
    }

    #[test]
    fn any_other_length_is_rejected(len in 0usize..200) {
        prop_assume!(len != TOTAL_GENES);
        let genes = vec![0.0; len];
        let rejected = matches!(
            decode(&genes),
            Err(FuzzyevalError::SchemaMismatch { expected: 66, actual }) if actual == len
        );
        prop_assert!(rejected);
    }
}
