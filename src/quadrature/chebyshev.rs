//! Chebyshev series on the 25-point Clenshaw-Curtis grid.
//!
//! The grid t_k = cos(kπ/24) nests the 13-point grid (even k), so one set of
//! 25 evaluations yields interpolation coefficients for both rules; the pair
//! feeds the error estimate of the oscillatory rule.

/// cos(kπ/24) for k = 0..=24.
const COS_GRID: [f64; 25] = [
    1.0,
    0.9914448613738104,
    0.9659258262890683,
    0.9238795325112867,
    0.8660254037844387,
    0.7933533402912352,
    0.7071067811865476,
    0.6087614290087207,
    0.5,
    0.38268343236508984,
    0.25881904510252074,
    0.1305261922200517,
    0.0,
    -0.1305261922200517,
    -0.25881904510252074,
    -0.38268343236508984,
    -0.5,
    -0.6087614290087207,
    -0.7071067811865476,
    -0.7933533402912352,
    -0.8660254037844387,
    -0.9238795325112867,
    -0.9659258262890683,
    -0.9914448613738104,
    -1.0,
];

/// cos(j·k·π/24), reduced by periodicity and reflection into the grid table.
#[inline]
fn cos_at(jk: usize) -> f64 {
    let mut idx = jk % 48;
    if idx > 24 {
        idx = 48 - idx;
    }
    COS_GRID[idx]
}

/// Chebyshev interpolation coefficients of `f` over `[a, b]`.
///
/// Returns `(cheb12, cheb24)`: coefficients of the degree-12 and degree-24
/// interpolants in the shifted Chebyshev basis, i.e.
/// f(center + half_length·t) ≈ Σ c_j·T_j(t) as a plain sum.
///
/// Costs exactly 25 evaluations of `f`.
pub(crate) fn chebyshev_series<F>(f: &F, a: f64, b: f64) -> ([f64; 13], [f64; 25])
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (b + a);
    let half_length = 0.5 * (b - a);

    let mut fval = [0.0; 25];
    for (k, v) in fval.iter_mut().enumerate() {
        *v = f(center + half_length * COS_GRID[k]);
    }
    // endpoint samples carry half weight in the discrete cosine sums
    fval[0] *= 0.5;
    fval[24] *= 0.5;

    let mut cheb24 = [0.0; 25];
    for (j, c) in cheb24.iter_mut().enumerate() {
        let mut s = 0.0;
        for (k, &v) in fval.iter().enumerate() {
            s += v * cos_at(j * k);
        }
        let scale = if j == 0 || j == 24 { 1.0 / 24.0 } else { 2.0 / 24.0 };
        *c = s * scale;
    }

    // The 13-point grid is the even-k subset of the 25-point grid. Its
    // endpoint samples are the shared outer endpoints, already halved above,
    // so every stored sample enters with unit weight.
    let mut cheb12 = [0.0; 13];
    for (j, c) in cheb12.iter_mut().enumerate() {
        let mut s = 0.0;
        for k in 0..13 {
            s += fval[2 * k] * cos_at(2 * j * k);
        }
        let scale = if j == 0 || j == 12 { 1.0 / 12.0 } else { 2.0 / 12.0 };
        *c = s * scale;
    }

    (cheb12, cheb24)
}
