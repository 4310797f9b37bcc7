//! End-to-end accuracy checks against closed-form Fourier transforms.

use oscquad::FourierQuadrature;
use std::f64::consts::PI;

fn lorentzian(x: f64) -> f64 {
    1.0 / (x * x + 1.0)
}

#[test]
fn lorentzian_cosine_transform_sweep() {
    // int_0^inf cos(wx) / (x^2 + 1) dx = (pi/2) exp(-w), swept over six
    // decades of frequency with one shared moment table
    let omegas: Vec<f64> = (0..=60).map(|i| 10.0_f64.powf(-3.0 + 0.1 * i as f64)).collect();

    let mut engine = FourierQuadrature::new();
    let values = engine.cosine_transform(lorentzian, &omegas, 0.0, f64::INFINITY);
    let errors = engine.last_integral_errors();

    assert_eq!(values.len(), omegas.len());
    assert_eq!(errors.len(), omegas.len());

    for ((&value, &omega), &error) in values.iter().zip(&omegas).zip(errors) {
        let exact = 0.5 * PI * (-omega).exp();
        let tolerance = 1e-7 + 1e-4 * exact.abs();
        assert!(
            (value - exact).abs() <= tolerance,
            "omega = {omega}: value = {value}, exact = {exact}, error estimate = {error}"
        );
    }
}

#[test]
fn exponential_sine_transform_sweep() {
    // int_0^inf exp(-x) sin(wx) dx = w / (1 + w^2)
    let omegas = [0.1, 0.7, 1.0, 3.0, 12.0, 85.0];

    let mut engine = FourierQuadrature::new();
    engine.set_error_bounds(1e-9, 1e-9);
    let values = engine.sine_transform(|x: f64| (-x).exp(), &omegas, 0.0, f64::INFINITY);

    assert_eq!(values.len(), omegas.len());
    for (&value, &omega) in values.iter().zip(&omegas) {
        let exact = omega / (1.0 + omega * omega);
        assert!(
            (value - exact).abs() < 1e-7,
            "omega = {omega}: value = {value}, exact = {exact}"
        );
    }
}

#[test]
fn sweep_agrees_with_individual_calls() {
    let omegas = [0.05, 1.0, 250.0];

    let mut engine = FourierQuadrature::new();
    let together = engine.cosine_transform(lorentzian, &omegas, 0.0, f64::INFINITY);
    let together_errors = engine.last_integral_errors().to_vec();

    for (i, &omega) in omegas.iter().enumerate() {
        let mut fresh = FourierQuadrature::new();
        let alone = fresh.cosine_transform(lorentzian, &[omega], 0.0, f64::INFINITY);
        let budget = together_errors[i] + fresh.last_integral_errors()[0];
        assert!(
            (together[i] - alone[0]).abs() <= budget.max(1e-12),
            "omega = {omega}: sweep {} vs alone {}",
            together[i],
            alone[0]
        );
    }
}

#[test]
fn tighter_tolerances_do_not_worsen_reported_error() {
    let omegas = [5.0, 20.0];
    let (a, b) = (0.0, 10.0);

    let mut loose = FourierQuadrature::new();
    loose.set_error_bounds(1e-4, 1e-3);
    loose.cosine_transform(lorentzian, &omegas, a, b);
    let loose_errors = loose.last_integral_errors().to_vec();

    let mut tight = FourierQuadrature::new();
    tight.set_error_bounds(1e-10, 1e-10);
    tight.cosine_transform(lorentzian, &omegas, a, b);
    let tight_errors = tight.last_integral_errors().to_vec();

    for (i, (&te, &le)) in tight_errors.iter().zip(&loose_errors).enumerate() {
        assert!(te <= le, "omega = {}: tight {te} > loose {le}", omegas[i]);
    }
}

#[test]
fn bounded_lorentzian_matches_truncated_transform() {
    // A finite interval long enough that the tail past it is negligible
    // compared to the requested tolerance
    let omega = 2.0;
    let b = 2000.0;

    let mut engine = FourierQuadrature::new();
    engine.set_error_bounds(1e-9, 1e-9);
    let bounded = engine.cosine_transform(lorentzian, &[omega], 0.0, b);

    let infinite = engine.cosine_transform(lorentzian, &[omega], 0.0, f64::INFINITY);

    // tail bound: int_b^inf dx/(1+x^2) < 1/b
    assert!((bounded[0] - infinite[0]).abs() < 1.0 / b + 1e-6);
}
