//! Internal rate of return via polynomial root extraction.
//!
//! A cashflow series `{c_t}` discounted at rate `r` has net present value
//! `Σ c_t x^t` where `x = 1/(1+r)` is the per-period discount factor. The
//! IRR is therefore a root of that polynomial in `x`. This module collapses
//! an arbitrary cashflow collection into dense polynomial coefficients,
//! extracts all complex roots simultaneously, and picks the economically
//! sensible real candidate.

use num_complex::Complex64;

use super::cashflow::Cashflow;
use super::error::{EngineError, EngineResult};

/// Relative tolerance below which a root's imaginary part is treated as zero.
const REAL_TOLERANCE: f64 = 1e-8;

/// Convergence tolerance on the largest per-sweep root update.
const ROOT_TOLERANCE: f64 = 1e-10;

/// Iteration cap for the simultaneous root iteration.
const MAX_ITERATIONS: u32 = 1_000;

/// Compute the internal rate of return of a cashflow collection.
///
/// The collection may be unordered and may contain several flows at the
/// same period; amounts sharing a `t` are summed and gaps are zero-filled.
///
/// Among the real roots, the candidate rates `1/x - 1` are filtered to the
/// smallest positive one; when no candidate is positive the largest
/// (non-positive) rate is returned instead. This tie-break mirrors the
/// convention of picking the nearest-to-zero economically meaningful rate.
///
/// # Errors
///
/// * [`EngineError::EmptyCashflows`] for an empty collection.
/// * [`EngineError::NoRealSolution`] when every root is strictly complex
///   or the net series degenerates to a constant.
/// * [`EngineError::ConvergenceFailed`] if the root iteration stalls.
pub fn irr(cashflows: &[Cashflow]) -> EngineResult<f64> {
    if cashflows.is_empty() {
        return Err(EngineError::EmptyCashflows);
    }

    // Dense coefficient array indexed by period, summing duplicate periods.
    let max_t = cashflows.iter().map(|cf| cf.t).max().unwrap_or(0) as usize;
    let mut coeffs = vec![0.0f64; max_t + 1];
    for cf in cashflows {
        coeffs[cf.t as usize] += cf.amount;
    }

    // The polynomial degree is set by the largest period carrying a
    // non-zero net flow.
    while coeffs.len() > 1 && coeffs.last() == Some(&0.0) {
        coeffs.pop();
    }
    if coeffs.len() < 2 {
        return Err(EngineError::NoRealSolution);
    }

    let roots = polynomial_roots(&coeffs)?;

    let rates: Vec<f64> = roots
        .iter()
        .filter(|z| z.im.abs() <= REAL_TOLERANCE * (1.0 + z.norm()))
        .map(|z| z.re)
        // A discount factor of zero has no finite rate.
        .filter(|x| x.abs() > 1e-12)
        .map(|x| 1.0 / x - 1.0)
        .collect();

    if rates.is_empty() {
        return Err(EngineError::NoRealSolution);
    }

    let smallest_positive = rates
        .iter()
        .copied()
        .filter(|r| *r > 0.0)
        .fold(f64::INFINITY, f64::min);

    if smallest_positive.is_finite() {
        Ok(smallest_positive)
    } else {
        Ok(rates.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }
}

/// Find all complex roots of a polynomial given ascending coefficients
/// (index = power) using the Durand-Kerner simultaneous iteration.
///
/// The leading coefficient must be non-zero; callers strip trailing zeros.
fn polynomial_roots(coeffs: &[f64]) -> EngineResult<Vec<Complex64>> {
    let degree = coeffs.len() - 1;
    let lead = coeffs[degree];
    let monic: Vec<Complex64> = coeffs
        .iter()
        .map(|c| Complex64::new(c / lead, 0.0))
        .collect();

    // Spiral seeds: powers of a point that is neither real nor on the unit
    // circle, so no seed coincides with another or with a symmetry axis.
    let seed = Complex64::new(0.4, 0.9);
    let mut roots: Vec<Complex64> = (1..=degree).map(|k| seed.powu(k as u32)).collect();

    for _ in 0..MAX_ITERATIONS {
        let mut max_step = 0.0f64;
        for i in 0..degree {
            let mut denom = Complex64::new(1.0, 0.0);
            for j in 0..degree {
                if j != i {
                    denom *= roots[i] - roots[j];
                }
            }
            if denom.norm() < 1e-300 {
                // Coincident estimates: nudge apart instead of dividing by zero.
                roots[i] += Complex64::new(1e-6, 1e-6);
                max_step = f64::INFINITY;
                continue;
            }
            let step = eval(&monic, roots[i]) / denom;
            roots[i] -= step;
            max_step = max_step.max(step.norm());
        }
        if max_step <= ROOT_TOLERANCE {
            return Ok(roots);
        }
    }

    Err(EngineError::ConvergenceFailed {
        iterations: MAX_ITERATIONS,
    })
}

/// Horner evaluation of an ascending-coefficient polynomial at `x`.
fn eval(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    let mut acc = Complex64::new(0.0, 0.0);
    for c in coeffs.iter().rev() {
        acc = acc * x + c;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_period_loan() {
        // Lend 100 today, receive 110 next period: rate = 10%.
        let flows = vec![Cashflow::new(-100.0, 0), Cashflow::new(110.0, 1)];
        let rate = irr(&flows).unwrap();
        assert!((rate - 0.10).abs() < 1e-9, "expected 10%, got {}", rate);
    }

    #[test]
    fn test_duplicate_periods_are_aggregated() {
        // Two partial inflows at t=1 sum to the same 110 as above.
        let flows = vec![
            Cashflow::new(50.0, 1),
            Cashflow::new(-100.0, 0),
            Cashflow::new(60.0, 1),
        ];
        let rate = irr(&flows).unwrap();
        assert!((rate - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_gap_periods_are_zero_filled() {
        // 100 out today, 121 back at t=2, nothing at t=1: (1.1)^2 = 1.21.
        let flows = vec![Cashflow::new(-100.0, 0), Cashflow::new(121.0, 2)];
        let rate = irr(&flows).unwrap();
        assert!((rate - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_no_positive_candidate_returns_largest() {
        // All flows negative: the only real root gives a rate below -100%.
        let flows = vec![Cashflow::new(-100.0, 0), Cashflow::new(-10.0, 1)];
        let rate = irr(&flows).unwrap();
        assert!(rate <= 0.0);
        assert!((rate - (-1.1)).abs() < 1e-9);
    }

    #[test]
    fn test_no_real_root() {
        // 1 + x^2 has only the roots ±i.
        let flows = vec![Cashflow::new(1.0, 0), Cashflow::new(1.0, 2)];
        assert_eq!(irr(&flows), Err(EngineError::NoRealSolution));
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(irr(&[]), Err(EngineError::EmptyCashflows));
    }

    #[test]
    fn test_constant_series_has_no_solution() {
        // Flows only at t=0 leave a degree-zero polynomial.
        let flows = vec![Cashflow::new(-100.0, 0), Cashflow::new(40.0, 0)];
        assert_eq!(irr(&flows), Err(EngineError::NoRealSolution));
    }

    #[test]
    fn test_multiple_real_roots_prefers_smallest_positive() {
        // (x - 1/1.1)(x - 1/1.5) scaled: two positive rates 10% and 50%.
        // Coefficients of x^2 - (1/1.1 + 1/1.5)x + 1/1.65, ascending.
        let c0 = 1.0 / 1.65;
        let c1 = -(1.0 / 1.1 + 1.0 / 1.5);
        let flows = vec![
            Cashflow::new(c0, 0),
            Cashflow::new(c1, 1),
            Cashflow::new(1.0, 2),
        ];
        let rate = irr(&flows).unwrap();
        assert!((rate - 0.10).abs() < 1e-6, "expected 10%, got {}", rate);
    }
}
