//! # oscquad
//!
//! Adaptive quadrature for oscillatory integrals.
//!
//! Integrals of the form ∫ f(x)·sin(ωx) dx or ∫ f(x)·cos(ωx) dx defeat
//! ordinary quadrature once ω grows: the oscillation causes cancellation that
//! a rule blind to the weight cannot resolve. This crate implements the
//! QUADPACK approach instead: the trigonometric factor is integrated
//! analytically against a precomputed table of Chebyshev moments, so only the
//! smooth factor `f` is ever sampled.
//!
//! # Available Methods
//!
//! | Method | Domain | Technique |
//! |--------|--------|-----------|
//! | [`oscillatory_quad`] | finite `[a, b]` | adaptive bisection + Chebyshev moments |
//! | [`fourier_quad`] | semi-infinite `[a, ∞)` | cycle sums + epsilon-algorithm extrapolation |
//! | [`FourierQuadrature`] | either | frequency-sweep engine reusing one moment table |
//!
//! # Example
//!
//! ```
//! use oscquad::FourierQuadrature;
//!
//! // Cosine transform of a Lorentzian: int_0^inf cos(wx)/(x^2+1) dx = (pi/2) e^-w
//! let mut q = FourierQuadrature::new();
//! let omegas = [0.5, 1.0, 2.0];
//! let values = q.cosine_transform(|x| 1.0 / (x * x + 1.0), &omegas, 0.0, f64::INFINITY);
//!
//! for (omega, value) in omegas.iter().zip(&values) {
//!     let exact = std::f64::consts::FRAC_PI_2 * (-omega).exp();
//!     assert!((value - exact).abs() < 1e-7);
//! }
//! ```

pub mod error;
pub mod quadrature;
pub mod transform;

pub use error::{IntegrateError, IntegrateResult};
pub use quadrature::{
    fourier_quad, oscillatory_quad, MomentTable, Oscillation, QuadOptions, QuadResult,
};
pub use transform::FourierQuadrature;
