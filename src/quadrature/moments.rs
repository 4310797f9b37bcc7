//! Chebyshev moments of the trigonometric weight.
//!
//! For a subinterval of half-width h the oscillatory rule needs the moments
//! ∫₋₁¹ T_k(t)·cos(par·t) dt and ∫₋₁¹ T_k(t)·sin(par·t) dt with
//! par = ω·h. Adaptive bisection only ever produces half-widths
//! h = L/2^(level+1), so the table precomputes one row of 25 moments per
//! bisection level and the integrator picks the row matching its depth.

use crate::error::{IntegrateError, IntegrateResult};

/// Number of moments per bisection level: 13 cosine (even k) interleaved
/// with 12 sine (odd k).
const MOMENTS_PER_LEVEL: usize = 25;

/// Which trigonometric weight an oscillatory integral carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oscillation {
    /// Weight cos(ωx)
    Cosine,
    /// Weight sin(ωx)
    Sine,
}

/// Precomputed Chebyshev moments of sin(ωx)/cos(ωx) over a reference
/// interval of length `L`, at every bisection level up to a fixed depth.
///
/// The table is built once per frequency sweep and retuned in place with
/// [`MomentTable::set`] for each new ω; the backing storage never
/// reallocates, which is what makes a sweep over many frequencies cheap.
#[derive(Debug, Clone)]
pub struct MomentTable {
    omega: f64,
    length: f64,
    par: f64,
    weight: Oscillation,
    depth: usize,
    moments: Vec<f64>,
}

impl MomentTable {
    /// Allocate a moment table for weight `weight` with frequency `omega`
    /// over a reference interval of length `length`, tabulating `depth`
    /// bisection levels.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrateError::InvalidParameter`] if `depth` is zero.
    pub fn new(
        omega: f64,
        length: f64,
        weight: Oscillation,
        depth: usize,
    ) -> IntegrateResult<Self> {
        if depth == 0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "depth",
                message: "moment table needs at least 1 bisection level".to_string(),
            });
        }
        let mut table = Self {
            omega,
            length,
            par: 0.0,
            weight,
            depth,
            moments: vec![0.0; MOMENTS_PER_LEVEL * depth],
        };
        table.set(omega, length, weight);
        Ok(table)
    }

    /// Retune the table to a new frequency, interval length, and weight.
    ///
    /// Recomputes every moment row in place; the allocation is reused.
    pub fn set(&mut self, omega: f64, length: f64, weight: Oscillation) {
        self.omega = omega;
        self.length = length;
        self.weight = weight;
        self.par = 0.5 * omega * length;
        let mut scale = 1.0;
        for level in 0..self.depth {
            let row = &mut self.moments[MOMENTS_PER_LEVEL * level..MOMENTS_PER_LEVEL * (level + 1)];
            compute_moments(self.par * scale, row);
            scale *= 0.5;
        }
    }

    /// Retune the reference interval length, keeping frequency and weight.
    pub fn set_length(&mut self, length: f64) {
        self.set(self.omega, length, self.weight);
    }

    /// The frequency the table is currently tuned to.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// The reference interval length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The trigonometric weight.
    pub fn weight(&self) -> Oscillation {
        self.weight
    }

    /// Number of tabulated bisection levels.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Moment row for one bisection level.
    ///
    /// `row(level)[2k]` is the cosine moment against T_2k; `row(level)[2k+1]`
    /// the sine moment against T_2k+1.
    pub(crate) fn row(&self, level: usize) -> &[f64] {
        &self.moments[MOMENTS_PER_LEVEL * level..MOMENTS_PER_LEVEL * (level + 1)]
    }
}

/// Fill one row of 25 Chebyshev moments for parameter `par`.
///
/// Even slots hold ∫₋₁¹ T_2k(t)·cos(par·t) dt for k = 0..=12, odd slots
/// ∫₋₁¹ T_2k+1(t)·sin(par·t) dt for k = 0..=11 (the moments that vanish by
/// parity are not stored).
///
/// For |par| ≤ 24 the three-term recurrence for the moments is unstable in
/// the forward direction, so the moments are obtained as the solution of a
/// boundary value problem: a 25-equation tridiagonal system closed with an
/// asymptotic end value. For |par| > 24 forward recursion is stable and
/// cheaper.
fn compute_moments(par: f64, row: &mut [f64]) {
    const NOEQ: usize = 25;

    if par == 0.0 {
        // No oscillation: the integrator never consults the table in this
        // regime (it falls back to Gauss-Kronrod), so leave the row zeroed.
        for m in row.iter_mut() {
            *m = 0.0;
        }
        return;
    }

    let par2 = par * par;
    let par4 = par2 * par2;
    let par22 = par2 + 2.0;
    let sinpar = par.sin();
    let cospar = par.cos();

    let mut v = [0.0_f64; 28];

    // moments against cosine
    let ac = 8.0 * cospar;
    let asv = 24.0 * par * sinpar;

    v[0] = 2.0 * sinpar / par;
    v[1] = (8.0 * cospar + (2.0 * par2 - 8.0) * sinpar / par) / par2;
    v[2] = (32.0 * (par2 - 12.0) * cospar
        + (2.0 * ((par2 - 80.0) * par2 + 192.0) * sinpar) / par)
        / par4;

    if par.abs() <= 24.0 {
        let mut d = [0.0_f64; NOEQ];
        let mut d1 = [0.0_f64; NOEQ];
        let mut d2 = [0.0_f64; NOEQ];

        let mut an = 6.0;
        for k in 0..NOEQ - 1 {
            let an2 = an * an;
            d[k] = -2.0 * (an2 - 4.0) * (par22 - 2.0 * an2);
            d2[k] = (an - 1.0) * (an - 2.0) * par2;
            d1[k + 1] = (an + 3.0) * (an + 4.0) * par2;
            v[k + 3] = asv - (an2 - 4.0) * ac;
            an += 2.0;
        }

        let an2 = an * an;
        d[NOEQ - 1] = -2.0 * (an2 - 4.0) * (par22 - 2.0 * an2);
        v[NOEQ + 2] = asv - (an2 - 4.0) * ac;
        v[3] -= 56.0 * par2 * v[2];

        // asymptotic value closing the boundary value problem
        let ass = par * sinpar;
        let asap = (((((210.0 * par2 - 1.0) * cospar - (105.0 * par2 - 63.0) * ass) / an2
            - (1.0 - 15.0 * par2) * cospar
            + 15.0 * ass)
            / an2
            - cospar
            + 3.0 * ass)
            / an2
            - cospar)
            / an2;
        v[NOEQ + 2] -= 2.0 * asap * par2 * (an - 1.0) * (an - 2.0);

        tridiagonal_solve(&mut d1, &mut d, &mut d2, &mut v[3..3 + NOEQ]);
    } else {
        let mut an = 4.0;
        for k in 3..13 {
            let an2 = an * an;
            v[k] = ((an2 - 4.0) * (2.0 * (par22 - 2.0 * an2) * v[k - 1] - ac) + asv
                - par2 * (an + 1.0) * (an + 2.0) * v[k - 2])
                / (par2 * (an - 1.0) * (an - 2.0));
            an += 2.0;
        }
    }

    for i in 0..13 {
        row[2 * i] = v[i];
    }

    // moments against sine
    let mut v = [0.0_f64; 28];
    let ac = -24.0 * par * cospar;
    let asv = -8.0 * sinpar;

    v[0] = 2.0 * (sinpar - par * cospar) / par2;
    v[1] = (18.0 - 48.0 / par2) * sinpar / par2 + (-2.0 + 48.0 / par2) * cospar / par;

    if par.abs() <= 24.0 {
        let mut d = [0.0_f64; NOEQ];
        let mut d1 = [0.0_f64; NOEQ];
        let mut d2 = [0.0_f64; NOEQ];

        let mut an = 5.0;
        for k in 0..NOEQ - 1 {
            let an2 = an * an;
            d[k] = -2.0 * (an2 - 4.0) * (par22 - 2.0 * an2);
            d2[k] = (an - 1.0) * (an - 2.0) * par2;
            d1[k + 1] = (an + 3.0) * (an + 4.0) * par2;
            v[k + 2] = ac + (an2 - 4.0) * asv;
            an += 2.0;
        }

        let an2 = an * an;
        d[NOEQ - 1] = -2.0 * (an2 - 4.0) * (par22 - 2.0 * an2);
        v[NOEQ + 1] = ac + (an2 - 4.0) * asv;
        v[2] -= 42.0 * par2 * v[1];

        let ass = par * cospar;
        let asap = (((((105.0 * par2 - 63.0) * ass - (210.0 * par2 - 1.0) * sinpar) / an2
            + (15.0 * par2 - 1.0) * sinpar
            - 15.0 * ass)
            / an2
            - sinpar
            - 3.0 * ass)
            / an2
            - sinpar)
            / an2;
        v[NOEQ + 1] -= 2.0 * asap * par2 * (an - 1.0) * (an - 2.0);

        tridiagonal_solve(&mut d1, &mut d, &mut d2, &mut v[2..2 + NOEQ]);
    } else {
        let mut an = 3.0;
        for k in 2..12 {
            let an2 = an * an;
            v[k] = ((an2 - 4.0) * (2.0 * (par22 - 2.0 * an2) * v[k - 1] + asv) + ac
                - par2 * (an + 1.0) * (an + 2.0) * v[k - 2])
                / (par2 * (an - 1.0) * (an - 2.0));
            an += 2.0;
        }
    }

    for i in 0..12 {
        row[2 * i + 1] = v[i];
    }
}

/// Solve a tridiagonal system in place by Gaussian elimination with partial
/// pivoting (the LINPACK `dgtsl` scheme).
///
/// `sub` is the subdiagonal (entries 1..n), `diag` the diagonal, `sup` the
/// superdiagonal (entries 0..n-1); `rhs` is overwritten with the solution.
/// The moment systems this solves are nonsingular for every parameter value
/// the table produces.
fn tridiagonal_solve(sub: &mut [f64], diag: &mut [f64], sup: &mut [f64], rhs: &mut [f64]) {
    let n = rhs.len();

    sub[0] = diag[0];

    if n == 0 {
        return;
    }

    if n > 1 {
        diag[0] = sup[0];
        sup[0] = 0.0;
        sup[n - 1] = 0.0;

        for k in 0..n - 1 {
            let k1 = k + 1;

            if sub[k1].abs() >= sub[k].abs() {
                sub.swap(k, k1);
                diag.swap(k, k1);
                sup.swap(k, k1);
                rhs.swap(k, k1);
            }

            let t = -sub[k1] / sub[k];
            sub[k1] = diag[k1] + t * diag[k];
            diag[k1] = sup[k1] + t * sup[k];
            sup[k1] = 0.0;
            rhs[k1] += t * rhs[k];
        }
    }

    rhs[n - 1] /= sub[n - 1];
    if n > 1 {
        rhs[n - 2] = (rhs[n - 2] - diag[n - 2] * rhs[n - 1]) / sub[n - 2];
    }
    for k in (3..=n).rev() {
        let kb = k - 3;
        rhs[kb] = (rhs[kb] - diag[kb] * rhs[kb + 1] - sup[kb] * rhs[kb + 2]) / sub[kb];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheb_t(k: usize, t: f64) -> f64 {
        (k as f64 * t.clamp(-1.0, 1.0).acos()).cos()
    }

    /// Composite Simpson reference for the moment integrals.
    fn simpson<F: Fn(f64) -> f64>(g: F, a: f64, b: f64, n: usize) -> f64 {
        let h = (b - a) / (n - 1) as f64;
        let mut s = g(a) + g(b);
        for i in 1..n - 1 {
            let w = if i % 2 == 1 { 4.0 } else { 2.0 };
            s += w * g(a + i as f64 * h);
        }
        s * h / 3.0
    }

    #[test]
    fn test_moments_match_reference_both_branches() {
        // spans both the tridiagonal branch (<= 24) and forward recursion (> 24)
        for &par in &[0.5, 3.0, 10.0, 23.9, 25.0, 100.0] {
            let mut row = [0.0; 25];
            compute_moments(par, &mut row);

            for i in 0..13 {
                let reference =
                    simpson(|t| cheb_t(2 * i, t) * (par * t).cos(), -1.0, 1.0, 20001);
                assert!(
                    (row[2 * i] - reference).abs() < 1e-9,
                    "par={par}, cosine moment {i}: {} vs {reference}",
                    row[2 * i]
                );
            }
            for i in 0..12 {
                let reference =
                    simpson(|t| cheb_t(2 * i + 1, t) * (par * t).sin(), -1.0, 1.0, 20001);
                assert!(
                    (row[2 * i + 1] - reference).abs() < 1e-9,
                    "par={par}, sine moment {i}: {} vs {reference}",
                    row[2 * i + 1]
                );
            }
        }
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = MomentTable::new(1.0, 1.0, Oscillation::Sine, 0);
        assert!(err.is_err());
    }

    #[test]
    fn test_retune_matches_fresh_table() {
        let mut table = MomentTable::new(3.0, 2.0, Oscillation::Cosine, 6).unwrap();
        table.set(11.5, 0.7, Oscillation::Sine);

        let fresh = MomentTable::new(11.5, 0.7, Oscillation::Sine, 6).unwrap();
        for level in 0..6 {
            assert_eq!(table.row(level), fresh.row(level));
        }
        assert_eq!(table.omega(), 11.5);
        assert_eq!(table.length(), 0.7);
        assert_eq!(table.weight(), Oscillation::Sine);
    }

    #[test]
    fn test_levels_halve_parameter() {
        // row at level i must equal a depth-1 table built with length/2^i
        let table = MomentTable::new(7.0, 4.0, Oscillation::Cosine, 4).unwrap();
        for level in 0..4 {
            let halved =
                MomentTable::new(7.0, 4.0 / (1 << level) as f64, Oscillation::Cosine, 1).unwrap();
            for (a, b) in table.row(level).iter().zip(halved.row(0)) {
                assert!((a - b).abs() < 1e-13);
            }
        }
    }

    #[test]
    fn test_tridiagonal_solve_small_system() {
        // [2 1 0; 1 2 1; 0 1 2] x = [4; 8; 8] -> x = [1; 2; 3]
        let mut sub = [0.0, 1.0, 1.0];
        let mut diag = [2.0, 2.0, 2.0];
        let mut sup = [1.0, 1.0, 0.0];
        let mut rhs = [4.0, 8.0, 8.0];
        tridiagonal_solve(&mut sub, &mut diag, &mut sup, &mut rhs);
        assert!((rhs[0] - 1.0).abs() < 1e-14);
        assert!((rhs[1] - 2.0).abs() < 1e-14);
        assert!((rhs[2] - 3.0).abs() < 1e-14);
    }
}
