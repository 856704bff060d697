use fuzzy_num::*;

fn triangles() -> FuzzyNumberArray<TriangularFuzzyNumber> {
    vec![
        TriangularFuzzyNumber::new(0.0, 1.0, 2.0).unwrap(),
        TriangularFuzzyNumber::new(1.0, 3.0, 4.0).unwrap(),
    ]
    .into()
}

#[test]
fn piecewise_linear_uses_breakpoints() {
    let plot = triangles().plot(&PlotOptions::default()).unwrap();
    assert_eq!(plot.series.len(), 2);
    assert_eq!(plot.series[0].label, "0");
    assert_eq!(plot.series[1].points, vec![(1.0, 0.0), (3.0, 1.0), (4.0, 0.0)]);
    assert_eq!(plot.x_range(), Some((0.0, 4.0)));

    let traps: FuzzyNumberArray<TrapezoidalFuzzyNumber> =
        vec![TrapezoidalFuzzyNumber::new(0.0, 1.0, 2.0, 3.0).unwrap()].into();
    let plot = traps.plot(&PlotOptions::default()).unwrap();
    assert_eq!(plot.series[0].points.len(), 4);
}

#[test]
fn general_is_sampled() {
    let x = GeneralFuzzyNumber::with_shapes(
        0.0,
        1.0,
        2.0,
        3.0,
        ShapeFn::new(|t| t * t),
        ShapeFn::linear_decreasing(),
    )
    .unwrap();
    let arr: FuzzyNumberArray<GeneralFuzzyNumber> = vec![x.clone()].into();

    let plot = arr.plot(&PlotOptions::default()).unwrap();
    assert_eq!(plot.series[0].points.len(), 200);

    let options = PlotOptions {
        n_points: 7,
        ..PlotOptions::default()
    };
    let points = &arr.plot(&options).unwrap().series[0].points;
    assert_eq!(points.len(), 7);
    assert_eq!(points[0], (0.0, 0.0));
    assert_eq!(points[1], (0.5, 0.25));
    assert_eq!(points[3], (1.5, 1.0));
    assert_eq!(points[6], (3.0, 0.0));
}

#[test]
fn options_are_validated() {
    let arr = triangles();
    let options = PlotOptions {
        labels: Some(vec!["a".to_string()]),
        ..PlotOptions::default()
    };
    assert!(matches!(arr.plot(&options), Err(FuzzyError::InvalidParameters(_))));

    // the sample count only constrains general numbers
    let options = PlotOptions {
        n_points: 1,
        ..PlotOptions::default()
    };
    assert_eq!(arr.plot(&options).unwrap().series[1].points.len(), 3);

    let general: FuzzyNumberArray<GeneralFuzzyNumber> =
        vec![GeneralFuzzyNumber::new(0.0, 1.0, 2.0, 3.0).unwrap()].into();
    assert!(matches!(general.plot(&options), Err(FuzzyError::InvalidParameters(_))));
}

#[test]
fn single_number() {
    let x = TriangularFuzzyNumber::new(1.0, 3.0, 4.0).unwrap();
    let plot = x.plot(DEFAULT_PLOT_POINTS, DEFAULT_PLOT_TITLE).unwrap();
    assert_eq!(plot.title, "Fuzzy Number Membership Function");
    assert_eq!(plot.series.len(), 1);
    assert_eq!(plot.series[0].label, x.to_string());
    assert_eq!(plot.series[0].points, vec![(1.0, 0.0), (3.0, 1.0), (4.0, 0.0)]);
    assert!(!plot.show_legend);
    assert!(x.plot(0, "empty grid").is_ok());

    let y = GeneralFuzzyNumber::new(0.0, 1.0, 2.0, 3.0).unwrap();
    let plot = y.plot(DEFAULT_PLOT_POINTS, DEFAULT_PLOT_TITLE).unwrap();
    assert_eq!(plot.series[0].points.len(), 200);
    assert_eq!(plot.series[0].points[0], (0.0, 0.0));
    assert_eq!(y.plot(4, "coarse").unwrap().series[0].points[3], (3.0, 0.0));
    assert!(matches!(y.plot(1, "too few"), Err(FuzzyError::InvalidParameters(_))));
}

#[test]
fn svg() {
    let options = PlotOptions {
        title: "x < y & z".to_string(),
        labels: Some(vec!["first".to_string(), "<second>".to_string()]),
        show_legend: true,
        ..PlotOptions::default()
    };
    let svg = triangles().plot(&options).unwrap().to_svg(640, 480);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<polyline").count(), 2);
    assert!(svg.contains("x &lt; y &amp; z"));
    assert!(svg.contains("&lt;second&gt;"));
    assert!(!svg.contains("<second>"));
}

#[test]
fn empty_array() {
    let arr = FuzzyNumberArray::<TriangularFuzzyNumber>::new(vec![]);
    let plot = arr.plot(&PlotOptions::default()).unwrap();
    assert!(plot.series.is_empty());
    assert_eq!(plot.x_range(), None);
    assert!(plot.to_svg(100, 100).contains("</svg>"));
}

#[test]
fn save_svg() {
    let path = std::env::temp_dir().join(format!("fuzzy_num_plot_{}.svg", std::process::id()));
    let plot = triangles().plot(&PlotOptions::default()).unwrap();
    plot.save_svg(&path, 320, 240).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, plot.to_svg(320, 240));
}
