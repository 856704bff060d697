/*
    The sandbox
*/

use fuzzy_num::*;

fn add<N: FuzzyNumber>(x: N, y: N, ctx: FuzzyContext) -> N {
    x.try_add(&y, &ctx).unwrap()
}

#[test]
fn sandbox() {
    let ctx = FuzzyContext::new().with_addition_method(AdditionMethod::ExtensionPrinciple);

    let a = TriangularFuzzyNumber::new(0.0, 1.0, 2.0).unwrap();
    let b = TriangularFuzzyNumber::new(1.0, 2.0, 3.0).unwrap();
    let _c = add(a, b, ctx);

    let a = GeneralFuzzyNumber::new(0.0, 1.0, 2.0, 3.0).unwrap();
    let b = GeneralFuzzyNumber::with_shapes(
        0.0,
        1.0,
        2.0,
        3.0,
        ShapeFn::new(f64::sqrt),
        ShapeFn::new(|t| 1.0 - t.sqrt()),
    )
    .unwrap();
    let _c = add(a, b, ctx);
}
