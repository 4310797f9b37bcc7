//! Fourier integrals over a semi-infinite interval.
//!
//! Computes ∫ₐ^∞ f(x)·sin(ωx) dx (or cosine) by summing integrals over
//! successive whole cycles of the oscillation and accelerating the sequence
//! of partial sums with the epsilon algorithm. Because consecutive cycle
//! contributions alternate in sign for a decaying `f`, the raw series
//! converges slowly while the accelerated one converges fast.

use crate::error::{IntegrateError, IntegrateResult};
use crate::quadrature::extrapolation::EpsilonTable;
use crate::quadrature::moments::MomentTable;
use crate::quadrature::oscillatory::oscillatory_quad;
use crate::quadrature::{QuadOptions, QuadResult};

/// Semi-infinite Fourier integral ∫ₐ^∞ f(x)·w(ωx) dx.
///
/// The weight (sine or cosine) and frequency come from `table`, whose
/// reference length is overwritten with the cycle length
/// `(2⌊|ω|⌋ + 1)·π/|ω|`, an odd number of half-periods, so successive cycle
/// integrals tend to alternate in sign. Each cycle is integrated with
/// [`oscillatory_quad`] under a geometrically tightening absolute tolerance
/// (ratio 0.9), the running total is fed to an epsilon table, and the
/// extrapolated limit is returned once its error estimate meets `epsabs`.
///
/// Only an absolute tolerance is meaningful here: the cycle sums oscillate
/// around the limit, so a relative test against the running total is
/// unstable.
///
/// `f` must decay as x → ∞ for the integral to exist; the routine reports
/// `converged = false` rather than looping forever when it does not, but it
/// cannot detect divergence outright.
///
/// # Arguments
///
/// * `f` - Smooth factor of the integrand
/// * `a` - Lower bound of integration
/// * `epsabs` - Absolute tolerance on the extrapolated result
/// * `limit` - Maximum number of cycles (and subdivisions per cycle)
/// * `table` - Moment table carrying ω and the weight; retuned in place
///
/// # Example
///
/// ```
/// use oscquad::{fourier_quad, MomentTable, Oscillation};
///
/// // int_0^inf exp(-x) sin(2x) dx = 2 / 5
/// let mut table = MomentTable::new(2.0, 1.0, Oscillation::Sine, 24).unwrap();
/// let result = fourier_quad(|x: f64| (-x).exp(), 0.0, 1e-10, 1000, &mut table).unwrap();
/// assert!((result.integral - 0.4).abs() < 1e-9);
/// ```
pub fn fourier_quad<F>(
    f: F,
    a: f64,
    epsabs: f64,
    limit: usize,
    table: &mut MomentTable,
) -> IntegrateResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    let omega = table.omega();
    if omega == 0.0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "omega",
            message: "frequency must be nonzero on a semi-infinite interval".to_string(),
        });
    }
    if limit == 0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "limit",
            message: "must be at least 1".to_string(),
        });
    }

    // Per-cycle tolerances form a geometric ladder eps·p^k so their sum stays
    // a fixed multiple of eps.
    let p = 0.9;
    let mut factor = 1.0;
    let mut eps = if epsabs > f64::MIN_POSITIVE / (1.0 - p) {
        epsabs * (1.0 - p)
    } else {
        epsabs
    };
    let initial_eps = eps;

    let mut area = 0.0;
    let mut errsum = 0.0;
    let mut neval = 0;

    let mut res_ext = 0.0;
    let mut err_ext = f64::MAX;
    let mut correc = 0.0;
    let mut truncation_error = 0.0;
    let mut total_error = 0.0;

    // 0 = clean, 1 = cycle limit reached, 4 = extrapolation stalled
    let mut error_type = 0;
    let mut ktmin = 0;

    // Odd number of half-periods per cycle
    let cycle = (2.0 * omega.abs().floor() + 1.0) * std::f64::consts::PI / omega.abs();
    table.set_length(cycle);

    let mut eps_table = EpsilonTable::new();

    let mut iteration = 0;
    while iteration < limit {
        let a1 = a + iteration as f64 * cycle;
        let cycle_options = QuadOptions {
            atol: eps * factor,
            rtol: 0.0,
            limit,
        };
        let cycle_result = oscillatory_quad(&f, a1, table, &cycle_options)?;
        factor *= p;

        area += cycle_result.integral;
        errsum += cycle_result.error;
        neval += cycle_result.neval;

        // The last cycle bounds the tail of the series
        truncation_error = 50.0 * cycle_result.integral.abs();
        total_error = errsum + truncation_error;

        if total_error < epsabs && iteration > 4 {
            return Ok(QuadResult {
                integral: area,
                error: total_error,
                neval,
                converged: error_type == 0,
            });
        }

        if cycle_result.error > correc {
            correc = cycle_result.error;
        }
        if !cycle_result.converged {
            eps = initial_eps.max(correc * (1.0 - p));
        }
        if !cycle_result.converged && total_error < 10.0 * correc && iteration > 3 {
            return Ok(QuadResult {
                integral: area,
                error: total_error,
                neval,
                converged: error_type == 0,
            });
        }

        eps_table.append(area);
        if eps_table.len() >= 2 {
            let (reseps, erreps) = eps_table.extrapolate();
            ktmin += 1;
            if ktmin >= 15 && err_ext < 0.001 * total_error {
                error_type = 4;
            }
            if erreps < err_ext {
                ktmin = 0;
                err_ext = erreps;
                res_ext = reseps;
                if err_ext + 10.0 * correc <= epsabs {
                    break;
                }
                if err_ext <= epsabs && 10.0 * correc >= epsabs {
                    break;
                }
            }
        }

        iteration += 1;
    }

    if iteration == limit {
        error_type = 1;
    }

    if err_ext == f64::MAX {
        return Ok(QuadResult {
            integral: area,
            error: total_error,
            neval,
            converged: error_type == 0,
        });
    }

    err_ext += 10.0 * correc;
    let result = res_ext;
    let mut abserr = err_ext;

    if error_type == 0 {
        return Ok(QuadResult {
            integral: result,
            error: abserr,
            neval,
            converged: true,
        });
    }

    // Prefer the raw cycle sum when its relative error beats the
    // extrapolated one
    if res_ext != 0.0 && area != 0.0 {
        if err_ext / res_ext.abs() > errsum / area.abs() {
            return Ok(QuadResult {
                integral: area,
                error: total_error,
                neval,
                converged: false,
            });
        }
    } else if err_ext > errsum {
        return Ok(QuadResult {
            integral: area,
            error: total_error,
            neval,
            converged: false,
        });
    } else if area == 0.0 {
        return Ok(QuadResult {
            integral: result,
            error: abserr,
            neval,
            converged: false,
        });
    }

    if error_type == 4 {
        abserr += truncation_error;
    }

    Ok(QuadResult {
        integral: result,
        error: abserr,
        neval,
        converged: false,
    })
}
