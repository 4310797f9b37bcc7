//! Oscillatory quadrature kernels.
//!
//! The layering mirrors the QUADPACK design:
//!
//! - [`MomentTable`] holds Chebyshev moments of the trigonometric weight over
//!   a reference interval, one row per bisection level, retunable in place
//!   for a new frequency.
//! - [`oscillatory_quad`] integrates f(x)·sin(ωx) or f(x)·cos(ωx) over one
//!   finite interval by adaptive bisection, pairing each subinterval with the
//!   moment row of its bisection level.
//! - [`fourier_quad`] extends the integral to [a, ∞) by summing whole cycles
//!   and accelerating the partial sums with the epsilon algorithm.

mod chebyshev;
mod extrapolation;
mod fourier;
mod kronrod;
mod moments;
mod oscillatory;

pub use fourier::fourier_quad;
pub use moments::{MomentTable, Oscillation};
pub use oscillatory::oscillatory_quad;

/// Options for adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QuadOptions {
    /// Relative tolerance (default: 1e-8)
    pub rtol: f64,
    /// Absolute tolerance (default: 1e-8)
    pub atol: f64,
    /// Maximum number of subdivisions (default: 50)
    pub limit: usize,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-8,
            atol: 1e-8,
            limit: 50,
        }
    }
}

/// Result of adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QuadResult {
    /// Computed integral value
    pub integral: f64,
    /// Estimated absolute error
    pub error: f64,
    /// Number of integrand evaluations
    pub neval: usize,
    /// Whether integration converged within the subdivision limit
    pub converged: bool,
}
