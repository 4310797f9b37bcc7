//! Wynn epsilon-algorithm convergence acceleration.
//!
//! Estimates the limit of a slowly convergent (possibly oscillating) sequence
//! from a finite prefix, the QUADPACK `qelg` scheme: build the epsilon table
//! diagonal by diagonal, drop the tail of the table when two elements nearly
//! coincide, and derive the error estimate from the last three accepted
//! results.

/// Epsilon table over a growing sequence of partial sums.
#[derive(Debug, Clone)]
pub(crate) struct EpsilonTable {
    n: usize,
    list: [f64; 52],
    nres: usize,
    res3la: [f64; 3],
}

impl EpsilonTable {
    pub(crate) fn new() -> Self {
        Self {
            n: 0,
            list: [0.0; 52],
            nres: 0,
            res3la: [0.0; 3],
        }
    }

    /// Append the next term of the sequence.
    pub(crate) fn append(&mut self, y: f64) {
        self.list[self.n] = y;
        self.n += 1;
    }

    /// Number of terms currently held.
    pub(crate) fn len(&self) -> usize {
        self.n
    }

    /// Extrapolate the sequence limit; returns (result, error estimate).
    ///
    /// The error estimate is `f64::MAX` until at least three extrapolated
    /// results exist to difference against.
    pub(crate) fn extrapolate(&mut self) -> (f64, f64) {
        let n = self.n - 1;
        let current = self.list[n];

        let mut absolute = f64::MAX;
        let mut relative = 5.0 * f64::EPSILON * current.abs();

        let newelm = n / 2;
        let n_orig = n;
        let mut n_final = n;

        let nres_orig = self.nres;

        let mut result = current;
        let mut abserr = f64::MAX;

        if n < 2 {
            return (current, absolute.max(relative));
        }

        self.list[n + 2] = self.list[n];
        self.list[n] = f64::MAX;

        for i in 0..newelm {
            let mut res = self.list[n - 2 * i + 2];
            let e0 = self.list[n - 2 * i - 2];
            let e1 = self.list[n - 2 * i - 1];
            let e2 = res;

            let e1abs = e1.abs();
            let delta2 = e2 - e1;
            let err2 = delta2.abs();
            let tol2 = e2.abs().max(e1abs) * f64::EPSILON;
            let delta3 = e1 - e0;
            let err3 = delta3.abs();
            let tol3 = e1abs.max(e0.abs()) * f64::EPSILON;

            if err2 <= tol2 && err3 <= tol3 {
                // e0, e1, e2 agree to machine accuracy: converged
                result = res;
                absolute = err2 + err3;
                relative = 5.0 * f64::EPSILON * res.abs();
                return (result, absolute.max(relative));
            }

            let e3 = self.list[n - 2 * i];
            self.list[n - 2 * i] = e1;
            let delta1 = e1 - e3;
            let err1 = delta1.abs();
            let tol1 = e1abs.max(e3.abs()) * f64::EPSILON;

            // two nearly equal elements: drop the tail of the table
            if err1 <= tol1 || err2 <= tol2 || err3 <= tol3 {
                n_final = 2 * i;
                break;
            }

            let ss = (1.0 / delta1 + 1.0 / delta2) - 1.0 / delta3;

            // irregular behaviour in the table
            if (ss * e1).abs() <= 0.0001 {
                n_final = 2 * i;
                break;
            }

            res = e1 + 1.0 / ss;
            self.list[n - 2 * i] = res;

            let error = err2 + (res - e2).abs() + err3;
            if error <= abserr {
                abserr = error;
                result = res;
            }
        }

        // shift the table
        let limexp = 50 - 1;
        if n_final == limexp {
            n_final = 2 * (limexp / 2);
        }

        if n_orig % 2 == 1 {
            for i in 0..=newelm {
                self.list[1 + i * 2] = self.list[i * 2 + 3];
            }
        } else {
            for i in 0..=newelm {
                self.list[i * 2] = self.list[i * 2 + 2];
            }
        }

        if n_orig != n_final {
            for i in 0..=n_final {
                self.list[i] = self.list[n_orig - n_final + i];
            }
        }

        self.n = n_final + 1;

        if nres_orig < 3 {
            self.res3la[nres_orig] = result;
            abserr = f64::MAX;
        } else {
            abserr = (result - self.res3la[2]).abs()
                + (result - self.res3la[1]).abs()
                + (result - self.res3la[0]).abs();
            self.res3la[0] = self.res3la[1];
            self.res3la[1] = self.res3la[2];
            self.res3la[2] = result;
        }

        self.nres = nres_orig + 1;

        (result, abserr.max(relative))
    }
}
