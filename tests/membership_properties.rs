use fuzzyeval::error::FuzzyevalError;
use fuzzyeval::fuzzy::{linspace, MembershipFunction};
use proptest::prelude::*;

fn edge() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0..1000.0f64, 0.001..1000.0f64).prop_map(|(a, width)| (a, a + width))
}

fn triangle() -> impl Strategy<Value = (f64, f64, f64)> {
    (-1000.0..1000.0f64, 0.001..500.0f64, 0.001..500.0f64)
        .prop_map(|(a, left, right)| (a, a + left, a + left + right))
}

proptest! {
    #[test]
    fn z_shape_endpoints((a, b) in edge(), below in 0.0..100.0f64, above in 0.0..100.0f64) {
        let mf = MembershipFunction::ZShape { a, b };
        prop_assert_eq!(mf.evaluate(a - below).unwrap(), 1.0);
        prop_assert_eq!(mf.evaluate(b + above).unwrap(), 0.0);
    }

    #[test]
    fn z_shape_falls_across_edge((a, b) in edge(), u in 0.0..1.0f64, v in 0.0..1.0f64) {
        let mf = MembershipFunction::ZShape { a, b };
        let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
        let x1 = a - 10.0 + lo * (b - a + 10.0);
        let x2 = a - 10.0 + hi * (b - a + 10.0);
        prop_assume!(x2 < b);
        prop_assert!(mf.evaluate(x1).unwrap() >= mf.evaluate(x2).unwrap());
    }

    #[test]
    fn s_shape_endpoints((a, b) in edge(), below in 0.0..100.0f64, above in 0.0..100.0f64) {
        let mf = MembershipFunction::SShape { a, b };
        prop_assert_eq!(mf.evaluate(a - below).unwrap(), 0.0);
        prop_assert_eq!(mf.evaluate(b + above).unwrap(), 1.0);
    }

    #[test]
    fn s_shape_rises_across_edge((a, b) in edge(), u in 0.0..1.0f64, v in 0.0..1.0f64) {
        let mf = MembershipFunction::SShape { a, b };
        let (lo, hi) = if u <= v { (u, v) } else { (v, u) };
        let x1 = a - 10.0 + lo * (b - a + 10.0);
        let x2 = a - 10.0 + hi * (b - a + 10.0);
        prop_assume!(x2 < b);
        prop_assert!(mf.evaluate(x1).unwrap() <= mf.evaluate(x2).unwrap());
    }

    #[test]
    fn z_and_s_share_the_same_quadratic((a, b) in edge(), x in -3000.0..3000.0f64) {
        let z = MembershipFunction::ZShape { a, b }.evaluate(x).unwrap();
        let s = MembershipFunction::SShape { a, b }.evaluate(x).unwrap();
        prop_assert!((z + s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn triangle_stays_in_unit_interval((a, b, c) in triangle(), x in -3000.0..3000.0f64) {
        let mf = MembershipFunction::Triangular { a, b, c };
        let y = mf.evaluate(x).unwrap();
        prop_assert!((0.0..=1.0).contains(&y));
        if x <= a || x >= c {
            prop_assert_eq!(y, 0.0);
        }
    }

    #[test]
    fn triangle_peaks_at_b((a, b, c) in triangle()) {
        let mf = MembershipFunction::Triangular { a, b, c };
        prop_assert_eq!(mf.evaluate(b).unwrap(), 1.0);
        prop_assert_eq!(mf.evaluate(a).unwrap(), 0.0);
        prop_assert_eq!(mf.evaluate(c).unwrap(), 0.0);
    }

    #[test]
    fn evaluation_is_idempotent((a, b, c) in triangle(), x in -3000.0..3000.0f64) {
        let mf = MembershipFunction::Triangular { a, b, c };
        let first = mf.evaluate(x).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(mf.evaluate(x).unwrap(), first);
        }
    }

    #[test]
    fn collapsed_edge_is_rejected(a in -1000.0..1000.0f64, x in -3000.0..3000.0f64) {
        let z = MembershipFunction::ZShape { a, b: a };
        let is_degenerate = matches!(z.evaluate(x), Err(FuzzyevalError::DegenerateShape { .. }));
        prop_assert!(is_degenerate);
    }
}

#[test]
fn batch_evaluation_matches_scalar_over_domain() {
    let mf = MembershipFunction::ZShape { a: -500.0, b: -100.0 };
    let xs = linspace(-1000.0, 1000.0, 1000);
    let batch = mf.evaluate_batch(&xs).unwrap();

    assert_eq!(batch.len(), xs.len());
    for (x, y) in xs.iter().zip(&batch) {
        assert_eq!(*y, mf.evaluate(*x).unwrap());
    }
}
