use approx::assert_abs_diff_eq;
use fuzzy_num::{
    AdditionMethod, FuzzyContext, FuzzyError, FuzzyKind, FuzzyNumber, TriangularFuzzyNumber,
};
use proptest::prelude::*;

fn tri(l: f64, m: f64, r: f64) -> TriangularFuzzyNumber {
    TriangularFuzzyNumber::new(l, m, r).unwrap()
}

fn parts(x: &TriangularFuzzyNumber) -> (f64, f64, f64) {
    (x.left(), x.mid(), x.right())
}

#[test]
fn construct() {
    let x = tri(0.0, 1.0, 2.0);
    assert_eq!(parts(&x), (0.0, 1.0, 2.0));
    assert_eq!(x.breakpoints(), [0.0, 1.0, 1.0, 2.0]);
    assert_eq!(x.support(), (0.0, 2.0));
    assert_eq!(x.core(), (1.0, 1.0));
    assert_eq!(TriangularFuzzyNumber::KIND, FuzzyKind::Triangular);
    assert!(x.is_piecewise_linear());

    // degenerate numbers are crisp
    let c = tri(3.0, 3.0, 3.0);
    assert_eq!(c.membership(3.0), 1.0);
    assert_eq!(c.membership(3.1), 0.0);
}

#[test]
fn construct_invalid() {
    let cases = [
        (1.0, 0.0, 2.0),
        (0.0, 2.0, 1.0),
        (2.0, 1.0, 0.0),
        (f64::NAN, 1.0, 2.0),
        (0.0, 1.0, f64::INFINITY),
    ];
    for (l, m, r) in cases {
        assert!(
            matches!(TriangularFuzzyNumber::new(l, m, r), Err(FuzzyError::InvalidParameters(_))),
            "construction should fail: ({l}, {m}, {r})"
        );
    }
}

#[test]
fn scalar_mul() {
    let x = tri(0.0, 1.0, 2.0);
    assert_eq!(parts(&(x * 2.0)), (0.0, 2.0, 4.0));
    assert_eq!(parts(&(x * 2)), (0.0, 2.0, 4.0));
    assert_eq!(parts(&(x * -1.0)), (-2.0, -1.0, 0.0));
    assert_eq!(parts(&(3.0 * x)), parts(&(x * 3.0)));
    assert_eq!(parts(&(-x)), (-2.0, -1.0, 0.0));
    assert_eq!(parts(&(x * 0.0)), (0.0, 0.0, 0.0));
}

#[test]
fn scalar_add() {
    let x = tri(0.0, 1.0, 2.0);
    assert_eq!(parts(&(x + 5.0)), (5.0, 6.0, 7.0));
    assert_eq!(parts(&(x + 5)), (5.0, 6.0, 7.0));
    assert_eq!(parts(&(5.0 + x)), (5.0, 6.0, 7.0));
    assert_eq!(parts(&(x - 1.0)), (-1.0, 0.0, 1.0));
    assert_eq!(parts(&(&x + 1.0)), (1.0, 2.0, 3.0));
    // the operand is untouched
    assert_eq!(parts(&x), (0.0, 1.0, 2.0));
}

#[test]
fn scalar_invalid() {
    let x = tri(0.0, 1.0, 2.0);
    assert!(matches!(x.try_mul_scalar(f64::NAN), Err(FuzzyError::InvalidParameters(_))));
    assert!(matches!(x.try_add_scalar(f64::INFINITY), Err(FuzzyError::InvalidParameters(_))));

    // overflow to infinity is rejected as well
    let big = tri(0.0, 1.0, f64::MAX);
    assert!(matches!(big.try_mul_scalar(2.0), Err(FuzzyError::InvalidParameters(_))));
}

#[test]
#[should_panic]
fn scalar_mul_nan_panics() {
    let _ = tri(0.0, 1.0, 2.0) * f64::NAN;
}

#[test]
#[should_panic(expected = "cannot multiply")]
fn scalar_mul_overflow_panics() {
    let x = tri(0.0, 1.0, 2.0);
    assert!(matches!(x.try_mul_scalar(f64::MAX), Err(FuzzyError::InvalidParameters(_))));
    let _ = x * f64::MAX;
}

#[test]
fn add_methods() {
    let x = tri(0.0, 1.0, 2.0);
    let y = tri(1.0, 2.0, 3.0);

    let ctx = FuzzyContext::new();
    assert_eq!(parts(&x.try_add(&y, &ctx).unwrap()), (1.0, 3.0, 5.0));

    let ctx = ctx.with_addition_method(AdditionMethod::ExtensionPrinciple);
    assert_eq!(parts(&x.try_add(&y, &ctx).unwrap()), (1.0, 3.0, 5.0));

    let ctx = ctx.with_addition_method(AdditionMethod::WeakestTNorm);
    assert_eq!(parts(&x.try_add(&y, &ctx).unwrap()), (2.0, 3.0, 4.0));

    // uneven spreads: the larger one survives on each side
    let z = tri(-3.0, 0.0, 0.5);
    assert_eq!(parts(&x.try_add(&z, &ctx).unwrap()), (-2.0, 1.0, 2.0));
}

#[test]
fn add_operator() {
    let x = tri(0.0, 1.0, 2.0);
    let y = tri(1.0, 2.0, 3.0);
    assert_eq!(parts(&(x + y).unwrap()), (1.0, 3.0, 5.0));
    assert_eq!(parts(&(&x + &y).unwrap()), (1.0, 3.0, 5.0));
}

#[test]
fn mul_fuzzy() {
    let x = tri(1.0, 2.0, 3.0);
    let y = tri(-1.0, 1.0, 2.0);
    assert_eq!(parts(&x.mul_fuzzy(&y).unwrap()), (-3.0, 2.0, 6.0));
    assert_eq!(parts(&y.mul_fuzzy(&x).unwrap()), (-3.0, 2.0, 6.0));
}

#[test]
fn membership() {
    let x = tri(0.0, 1.0, 3.0);
    assert_eq!(x.membership(-1.0), 0.0);
    assert_eq!(x.membership(0.0), 0.0);
    assert_eq!(x.membership(0.5), 0.5);
    assert_eq!(x.membership(1.0), 1.0);
    assert_eq!(x.membership(2.0), 0.5);
    assert_eq!(x.membership(3.0), 0.0);
    assert_eq!(x.membership(4.0), 0.0);
}

#[test]
fn alpha_cut() {
    let x = tri(0.0, 1.0, 3.0);
    assert_eq!(x.alpha_cut(0.0).unwrap(), x.support());
    assert_eq!(x.alpha_cut(1.0).unwrap(), x.core());

    let (lo, hi) = x.alpha_cut(0.5).unwrap();
    assert_abs_diff_eq!(lo, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(hi, 2.0, epsilon = 1e-12);

    assert!(matches!(x.alpha_cut(1.5), Err(FuzzyError::InvalidParameters(_))));
    assert!(matches!(x.alpha_cut(-0.1), Err(FuzzyError::InvalidParameters(_))));
}

#[test]
fn equality() {
    assert_eq!(tri(0.0, 1.0, 2.0), tri(0.0, 1.0 + 1e-12, 2.0));
    assert_ne!(tri(0.0, 1.0, 2.0), tri(0.0, 1.1, 2.0));
    assert_eq!(tri(0.1, 0.2, 0.3) * 3.0, tri(0.3, 0.6, 0.9));
}

#[test]
fn display() {
    let x = tri(0.0, 1.5, 2.0);
    assert_eq!(x.to_string(), "TriangularFuzzyNumber(left=0, mid=1.5, right=2)");
}

fn ordered() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-1e6f64..1e6).prop_map(|mut v| {
        v.sort_by(|a, b| a.total_cmp(b));
        v
    })
}

proptest! {
    #[test]
    fn ordered_triples_construct(v in ordered()) {
        let x = TriangularFuzzyNumber::new(v[0], v[1], v[2]).unwrap();
        prop_assert_eq!(parts(&x), (v[0], v[1], v[2]));
    }

    #[test]
    fn unordered_triples_fail(a in -1e6f64..1e6, d in 1e-3f64..1e3) {
        prop_assert!(TriangularFuzzyNumber::new(a, a + d, a).is_err());
        prop_assert!(TriangularFuzzyNumber::new(a + d, a, a + 2.0 * d).is_err());
    }

    #[test]
    fn negative_scaling_keeps_order(v in ordered(), k in -1e3f64..-1e-3) {
        let y = tri(v[0], v[1], v[2]) * k;
        prop_assert!(y.left() <= y.mid() && y.mid() <= y.right());
        prop_assert_eq!(y.mid(), v[1] * k);
    }

    #[test]
    fn membership_in_unit_interval(v in ordered(), x in -2e6f64..2e6) {
        let m = tri(v[0], v[1], v[2]).membership(x);
        prop_assert!((0.0..=1.0).contains(&m));
    }
}
