use fuzzy_num::{
    create_rng, FuzzyError, FuzzyNumber, FuzzyNumberArray, TrapezoidalSampling,
    TriangularSampling,
};
use proptest::prelude::*;

fn tri_params() -> TriangularSampling {
    TriangularSampling::new(10.0, 2.0, 0.5, 1.5, 0.5, 3.0)
}

fn trap_params() -> TrapezoidalSampling {
    TrapezoidalSampling::new(0.0, 1.0, 0.1, 1.0, 0.1, 1.0, 0.0, 2.0)
}

#[test]
fn triangular() {
    let mut rng = create_rng(42);
    let arr = FuzzyNumberArray::random_triangular(100, &tri_params(), &mut rng).unwrap();
    assert_eq!(arr.len(), 100);
    for x in &arr {
        assert!(x.left() <= x.mid() && x.mid() <= x.right(), "unordered: {x}");
        let (l, r) = (x.mid() - x.left(), x.right() - x.mid());
        assert!((0.5..=1.5).contains(&l), "left spread {l} out of range");
        assert!((0.5..=3.0).contains(&r), "right spread {r} out of range");
    }

    // the centers follow N(10, 2)
    let mean = arr.mid().mean().unwrap();
    assert!((mean - 10.0).abs() < 1.0, "sample mean {mean}");
}

#[test]
fn trapezoidal() {
    let mut rng = create_rng(7);
    let arr = FuzzyNumberArray::random_trapezoidal(50, &trap_params(), &mut rng).unwrap();
    assert_eq!(arr.len(), 50);
    for x in &arr {
        let [a1, a2, a3, a4] = x.breakpoints();
        assert!(a1 <= a2 && a2 <= a3 && a3 <= a4, "unordered: {x}");
        assert!(a3 - a2 <= 2.0 + 1e-12);
    }
}

#[test]
fn reproducible() {
    let a = FuzzyNumberArray::random_triangular(10, &tri_params(), &mut create_rng(3)).unwrap();
    let b = FuzzyNumberArray::random_triangular(10, &tri_params(), &mut create_rng(3)).unwrap();
    let c = FuzzyNumberArray::random_triangular(10, &tri_params(), &mut create_rng(4)).unwrap();
    assert_eq!(a.mid().to_vec(), b.mid().to_vec());
    assert_ne!(a.mid().to_vec(), c.mid().to_vec());
}

#[test]
fn empty() {
    let arr = FuzzyNumberArray::random_triangular(0, &tri_params(), &mut create_rng(0)).unwrap();
    assert!(arr.is_empty());
}

#[test]
fn invalid_parameters() {
    let mut rng = create_rng(0);
    let cases = [
        TriangularSampling::new(0.0, -1.0, 0.0, 1.0, 0.0, 1.0),
        TriangularSampling::new(f64::NAN, 1.0, 0.0, 1.0, 0.0, 1.0),
        TriangularSampling::new(0.0, 1.0, 2.0, 1.0, 0.0, 1.0),
        TriangularSampling::new(0.0, 1.0, 0.0, 1.0, 0.0, f64::INFINITY),
    ];
    for params in cases {
        assert!(
            matches!(
                FuzzyNumberArray::random_triangular(5, &params, &mut rng),
                Err(FuzzyError::InvalidParameters(_))
            ),
            "should fail: {params:?}"
        );
    }

    let mut params = trap_params();
    params.w1 = 3.0;
    assert!(matches!(
        FuzzyNumberArray::random_trapezoidal(5, &params, &mut rng),
        Err(FuzzyError::InvalidParameters(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // negative spread bounds are folded by absolute value
    #[test]
    fn always_n_ordered(seed in any::<u64>(), n in 0usize..64, lo in -2.0f64..0.0, hi in 0.0f64..2.0) {
        let params = TrapezoidalSampling::new(0.0, 5.0, lo, hi, lo, hi, lo, hi);
        let arr = FuzzyNumberArray::random_trapezoidal(n, &params, &mut create_rng(seed)).unwrap();
        prop_assert_eq!(arr.len(), n);
        for x in &arr {
            let [a1, a2, a3, a4] = x.breakpoints();
            prop_assert!(a1 <= a2 && a2 <= a3 && a3 <= a4);
        }
    }
}
