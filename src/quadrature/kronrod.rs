//! Gauss-Kronrod 15-point kernel.
//!
//! The G7-K15 pair shares the 7 Gauss nodes, so one batch of 15 evaluations
//! yields both an estimate and an error estimate.

/// Gauss-Kronrod 15-point rule (G7-K15).
///
/// Returns (integral, error, neval).
pub(crate) fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64) -> (f64, f64, usize)
where
    F: Fn(f64) -> f64,
{
    // Kronrod nodes (15 points, including 7 Gauss points)
    const XGK: [f64; 15] = [
        -0.9914553711208126,
        -0.9491079123427585,
        -0.8648644233597691,
        -0.7415311855993944,
        -0.5860872354676911,
        -0.4058451513773972,
        -0.2077849550078985,
        0.0,
        0.2077849550078985,
        0.4058451513773972,
        0.5860872354676911,
        0.7415311855993944,
        0.8648644233597691,
        0.9491079123427585,
        0.9914553711208126,
    ];

    // Kronrod weights (15 points)
    const WGK: [f64; 15] = [
        0.022935322010529224,
        0.063_092_092_629_978_56,
        0.10479001032225018,
        0.14065325971552592,
        0.169_004_726_639_267_9,
        0.190_350_578_064_785_4,
        0.20443294007529889,
        0.20948214108472782,
        0.20443294007529889,
        0.190_350_578_064_785_4,
        0.169_004_726_639_267_9,
        0.14065325971552592,
        0.10479001032225018,
        0.063_092_092_629_978_56,
        0.022935322010529224,
    ];

    // Gauss weights (7 points at indices 1,3,5,7,9,11,13)
    const WG: [f64; 7] = [
        0.129_484_966_168_869_7,
        0.27970539148927664,
        0.381_830_050_505_118_9,
        0.417_959_183_673_469_4,
        0.381_830_050_505_118_9,
        0.27970539148927664,
        0.129_484_966_168_869_7,
    ];

    let mid = (a + b) / 2.0;
    let half_width = (b - a) / 2.0;

    let mut fvals = [0.0; 15];
    for (i, &x) in XGK.iter().enumerate() {
        fvals[i] = f(mid + half_width * x);
    }

    let mut result_kronrod = 0.0;
    for (i, &fval) in fvals.iter().enumerate() {
        result_kronrod += WGK[i] * fval;
    }
    result_kronrod *= half_width;

    let mut result_gauss = 0.0;
    for (i, &w) in WG.iter().enumerate() {
        result_gauss += w * fvals[2 * i + 1];
    }
    result_gauss *= half_width;

    let error = (result_kronrod - result_gauss).abs();

    (result_kronrod, error, 15)
}
