use std::f64::consts::TAU;

use fourierplot::{spirograph, CurveError, CurveModel, Point, Term};

fn close(a: Point, b: Point) -> bool {
    (a - b).norm() < 1e-9
}

/// Direct evaluation of `sum r_k * exp(i * 2pi * theta * f_k)`.
fn oracle(terms: &[(f64, f64)], theta: f64) -> Point {
    terms
        .iter()
        .map(|&(r, f)| Point::from_polar(r, TAU * theta * f))
        .sum()
}

#[test]
fn evaluate_matches_direct_sum() {
    let terms = [(2.0, 1.0), (-1.0, 2.0), (0.5, 3.0)];
    let model = CurveModel::from_terms(terms.iter().map(|&(r, f)| Term::new(r, f)));
    for theta in [0.0, 0.25, 0.5, 1.0, 3.7, -2.3] {
        let got = model.evaluate(theta);
        let want = oracle(&terms, theta);
        assert!(close(got, want), "theta = {theta}: {got} != {want}");
    }
}

#[test]
fn zero_frequency_term_is_constant_offset() {
    let model = CurveModel::new().with_term(0.75, 0.0);
    for theta in [0.0, 0.3, 12.5] {
        assert!(close(model.evaluate(theta), Point::new(0.75, 0.0)));
    }
}

#[test]
fn whole_rotations_return_to_start_for_integer_frequencies() {
    let model = CurveModel::new()
        .with_term(1.0, 1.0)
        .with_term(0.4, -3.0)
        .with_term(0.1, 7.0);
    let start = model.evaluate(0.0);
    assert!(close(model.evaluate(1.0), start));
    assert!(close(model.evaluate(5.0), start));
}

#[test]
fn push_term_keeps_order() {
    let mut model = CurveModel::new();
    model.push_term(1.0, 1.0).push_term(-0.5, 2.0);
    assert_eq!(model.len(), 2);
    assert_eq!(model.terms()[1], Term::new(-0.5, 2.0));
}

#[test]
fn spirograph_terms() {
    let model = spirograph(0.55, 0.45).unwrap();
    let terms = model.terms();
    assert_eq!(terms.len(), 3);
    assert_eq!(terms[0], Term::new(1.0, 1.0));
    assert_eq!(terms[1], Term::new(-0.55, 1.0));
    assert_eq!(terms[2].radius, 0.45);
    assert!((terms[2].frequency - (-1.0 / 0.55)).abs() < 1e-12);
}

#[test]
fn spirograph_starts_at_one_minus_gear_plus_pen() {
    let model = spirograph(0.75, 0.35).unwrap();
    assert!(close(model.evaluate(0.0), Point::new(1.0 - 0.75 + 0.35, 0.0)));
}

#[test]
fn spirograph_rejects_zero_gear_radius() {
    assert_eq!(spirograph(0.0, 0.45).unwrap_err(), CurveError::ZeroGearRadius);
}

#[test]
fn spirograph_rejects_non_finite_input() {
    assert!(matches!(
        spirograph(f64::NAN, 0.45),
        Err(CurveError::NonFinite { name: "gear_radius", .. })
    ));
    assert!(matches!(
        spirograph(0.5, f64::INFINITY),
        Err(CurveError::NonFinite { name: "pen_radius", .. })
    ));
}

#[test]
fn non_finite_terms_are_rejected() {
    let err = CurveModel::try_from_terms([Term::new(1.0, 1.0), Term::new(f64::NAN, 2.0)])
        .unwrap_err();
    assert!(matches!(err, CurveError::NonFinite { name: "radius", .. }));

    let err = CurveModel::try_from_terms([Term::new(1.0, f64::INFINITY)]).unwrap_err();
    assert!(matches!(err, CurveError::NonFinite { name: "frequency", .. }));

    let model = CurveModel::try_from_terms([Term::new(2.0, 1.0), Term::new(-1.0, 2.0)]).unwrap();
    assert_eq!(model.len(), 2);
}
