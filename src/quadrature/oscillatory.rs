//! Adaptive oscillatory quadrature on a finite interval.
//!
//! Integrates f(x)·sin(ωx) or f(x)·cos(ωx) over [a, a+L] where L is the
//! reference length of the supplied [`MomentTable`]. The trigonometric factor
//! is handled analytically through the moment table, so the adaptive
//! machinery only has to chase the smooth factor `f`; intervals are always
//! bisected at the midpoint to keep every subinterval aligned with a
//! tabulated bisection level.

use crate::error::{IntegrateError, IntegrateResult};
use crate::quadrature::chebyshev::chebyshev_series;
use crate::quadrature::kronrod::gauss_kronrod_15;
use crate::quadrature::moments::{MomentTable, Oscillation};
use crate::quadrature::{QuadOptions, QuadResult};

/// 25-point oscillatory rule on one subinterval.
///
/// When the interval holds less than about a third of an oscillation period
/// (|ω·h| < 2 for half-width h) the weight is tame and a plain Gauss-Kronrod
/// rule on the weighted integrand is both cheaper and accurate. Otherwise the
/// Chebyshev expansion of `f` is contracted against the moment row for
/// `level`, which integrates the oscillation exactly; the gap between the
/// 24- and 12-degree expansions supplies the error estimate.
///
/// Returns (integral, error, neval).
pub(crate) fn oscillatory_rule<F>(
    f: &F,
    a: f64,
    b: f64,
    table: &MomentTable,
    level: usize,
) -> (f64, f64, usize)
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);
    let omega = table.omega();
    let par = omega * half_length;

    if par.abs() < 2.0 {
        return match table.weight() {
            Oscillation::Sine => gauss_kronrod_15(&|x| f(x) * (omega * x).sin(), a, b),
            Oscillation::Cosine => gauss_kronrod_15(&|x| f(x) * (omega * x).cos(), a, b),
        };
    }

    let moment = table.row(level);
    let (cheb12, cheb24) = chebyshev_series(f, a, b);

    // Only even Chebyshev coefficients meet cosine moments and odd ones meet
    // sine moments; the others vanish by parity.
    let mut res12_cos = cheb12[12] * moment[12];
    let mut res12_sin = 0.0;
    for i in 0..6 {
        let k = 10 - 2 * i;
        res12_cos += cheb12[k] * moment[k];
        res12_sin += cheb12[k + 1] * moment[k + 1];
    }

    let mut res24_cos = cheb24[24] * moment[24];
    let mut res24_sin = 0.0;
    for i in 0..12 {
        let k = 22 - 2 * i;
        res24_cos += cheb24[k] * moment[k];
        res24_sin += cheb24[k + 1] * moment[k + 1];
    }

    let est_cos = (res24_cos - res12_cos).abs();
    let est_sin = (res24_sin - res12_sin).abs();

    // rotate from the local frame t in [-1, 1] back to x = center + h*t
    let c = half_length * (center * omega).cos();
    let s = half_length * (center * omega).sin();

    let (result, error) = match table.weight() {
        Oscillation::Sine => (
            c * res24_sin + s * res24_cos,
            (c * est_sin).abs() + (s * est_cos).abs(),
        ),
        Oscillation::Cosine => (
            c * res24_cos - s * res24_sin,
            (c * est_cos).abs() + (s * est_sin).abs(),
        ),
    };

    (result, error, 25)
}

/// Adaptive oscillatory quadrature over the finite interval
/// [a, a + table.length()].
///
/// Bisects the subinterval with the largest error estimate until
/// `atol + rtol·|estimate|` is met or `options.limit` subdivisions have been
/// spent. Running out of subdivisions (or of tabulated bisection levels) is
/// reported through `converged = false`, with the achieved error estimate;
/// callers that care must inspect it.
///
/// # Arguments
///
/// * `f` - Smooth factor of the integrand (the trig weight is implicit)
/// * `a` - Lower bound; the upper bound is `a + table.length()`
/// * `table` - Moment table tuned to the desired ω and weight
/// * `options` - Tolerances and subdivision limit
///
/// # Example
///
/// ```
/// use oscquad::{oscillatory_quad, MomentTable, Oscillation, QuadOptions};
///
/// // int_0^10 sin(5x) dx = (1 - cos(50)) / 5
/// let table = MomentTable::new(5.0, 10.0, Oscillation::Sine, 24).unwrap();
/// let result = oscillatory_quad(|_| 1.0, 0.0, &table, &QuadOptions::default()).unwrap();
/// let exact = (1.0 - 50.0_f64.cos()) / 5.0;
/// assert!((result.integral - exact).abs() < 1e-10);
/// ```
pub fn oscillatory_quad<F>(
    f: F,
    a: f64,
    table: &MomentTable,
    options: &QuadOptions,
) -> IntegrateResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    if options.limit == 0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "limit",
            message: "must be at least 1".to_string(),
        });
    }
    let b = a + table.length();
    if !(b > a) {
        return Err(IntegrateError::InvalidInterval {
            a,
            b,
            context: "oscillatory_quad",
        });
    }

    // Work queue of subintervals: (a, b, integral, error, bisection level)
    let mut intervals: Vec<(f64, f64, f64, f64, usize)> = Vec::new();

    let (integral, error, evals) = oscillatory_rule(&f, a, b, table, 0);
    let mut neval = evals;

    intervals.push((a, b, integral, error, 0));

    let mut total_integral = integral;
    let mut total_error = error;
    let mut subdivisions = 0;
    let mut converged = false;

    while subdivisions < options.limit {
        let tolerance = options.atol + options.rtol * total_integral.abs();
        if total_error <= tolerance {
            converged = true;
            break;
        }

        // Find interval with largest error (NaN sorts low)
        let max_idx = intervals
            .iter()
            .enumerate()
            .max_by(|a, b| {
                a.1 .3
                    .partial_cmp(&b.1 .3)
                    .unwrap_or(std::cmp::Ordering::Less)
            })
            .map(|(i, _)| i)
            .unwrap_or(0);

        let (ia, ib, old_integral, old_error, level) = intervals.swap_remove(max_idx);

        // A child interval that still needs the moment path must have a
        // tabulated row; if the table is too shallow, stop refining.
        let child_par = table.omega() * (ib - ia) * 0.25;
        if level + 1 >= table.depth() && child_par.abs() >= 2.0 {
            intervals.push((ia, ib, old_integral, old_error, level));
            break;
        }

        let mid = (ia + ib) / 2.0;

        let (int1, err1, evals1) = oscillatory_rule(&f, ia, mid, table, level + 1);
        let (int2, err2, evals2) = oscillatory_rule(&f, mid, ib, table, level + 1);
        neval += evals1 + evals2;

        total_integral = total_integral - old_integral + int1 + int2;
        total_error = total_error - old_error + err1 + err2;

        intervals.push((ia, mid, int1, err1, level + 1));
        intervals.push((mid, ib, int2, err2, level + 1));

        subdivisions += 1;
    }

    if !converged {
        let tolerance = options.atol + options.rtol * total_integral.abs();
        converged = total_error <= tolerance;
    }

    Ok(QuadResult {
        integral: total_integral,
        error: total_error,
        neval,
        converged,
    })
}
