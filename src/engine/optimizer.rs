//! Bounded scalar minimization and the optimal-rate search.
//!
//! [`minimize_bounded`] is a derivative-free Brent-style minimizer (golden
//! section with parabolic interpolation) over a closed interval.
//! [`search_optimal_rate`] uses it to invert the expected-IRR pipeline:
//! find the loan rate whose risk-adjusted yield hits a target.

use serde::Serialize;

use super::amortization::Amortization;
use super::error::{EngineError, EngineResult};

/// Configuration for the bounded minimizer.
#[derive(Debug, Clone, Copy)]
pub struct OptimizerConfig {
    /// Absolute tolerance on the argument of the minimum.
    pub xatol: f64,
    /// Iteration cap.
    pub max_iterations: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            xatol: 1e-5,
            max_iterations: 500,
        }
    }
}

/// Result of a bounded minimization.
#[derive(Debug, Clone, Copy)]
pub struct Minimum {
    /// Argument of the minimum.
    pub x: f64,
    /// Objective value at the minimum.
    pub objective: f64,
    /// Iterations consumed.
    pub iterations: u32,
}

/// Minimize `f` over the closed interval `[lower, upper]`.
///
/// Golden-section search with parabolic acceleration where the fit is
/// trustworthy. The minimum may sit on a boundary when the interval does
/// not bracket an interior minimum; no error is raised for that, callers
/// judge the residual.
///
/// # Errors
///
/// [`EngineError::InvalidBounds`] when `lower >= upper` or either bound is
/// not finite.
pub fn minimize_bounded<F>(
    mut f: F,
    lower: f64,
    upper: f64,
    config: &OptimizerConfig,
) -> EngineResult<Minimum>
where
    F: FnMut(f64) -> f64,
{
    if !(lower < upper) || !lower.is_finite() || !upper.is_finite() {
        return Err(EngineError::InvalidBounds { lower, upper });
    }

    const GOLDEN_MEAN: f64 = 0.381_966_011_250_105_2; // (3 - sqrt(5)) / 2
    let sqrt_eps = f64::EPSILON.sqrt();

    let mut a = lower;
    let mut b = upper;

    let mut xf = a + GOLDEN_MEAN * (b - a);
    let mut nfc = xf;
    let mut fulc = xf;

    let mut rat = 0.0f64;
    let mut e = 0.0f64;

    let mut fx = f(xf);
    let mut fnfc = fx;
    let mut ffulc = fx;

    let mut xm = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * xf.abs() + config.xatol / 3.0;
    let mut tol2 = 2.0 * tol1;

    let mut iterations = 0u32;

    while (xf - xm).abs() > tol2 - 0.5 * (b - a) {
        let mut golden = true;

        // Parabolic fit through the three best points so far.
        if e.abs() > tol1 {
            let r = (xf - nfc) * (fx - ffulc);
            let mut q = (xf - fulc) * (fx - fnfc);
            let mut p = (xf - fulc) * q - (xf - nfc) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            let r_prev = e;
            e = rat;

            if p.abs() < (0.5 * q * r_prev).abs() && p > q * (a - xf) && p < q * (b - xf) {
                rat = p / q;
                let x = xf + rat;
                golden = false;
                // Keep the probe a full tolerance away from the bounds.
                if (x - a) < tol2 || (b - x) < tol2 {
                    rat = if xm >= xf { tol1 } else { -tol1 };
                }
            }
        }

        if golden {
            e = if xf >= xm { a - xf } else { b - xf };
            rat = GOLDEN_MEAN * e;
        }

        let step = if rat >= 0.0 {
            rat.abs().max(tol1)
        } else {
            -rat.abs().max(tol1)
        };
        let x = xf + step;
        let fu = f(x);

        if fu <= fx {
            if x >= xf {
                a = xf;
            } else {
                b = xf;
            }
            fulc = nfc;
            ffulc = fnfc;
            nfc = xf;
            fnfc = fx;
            xf = x;
            fx = fu;
        } else {
            if x < xf {
                a = x;
            } else {
                b = x;
            }
            if fu <= fnfc || nfc == xf {
                fulc = nfc;
                ffulc = fnfc;
                nfc = x;
                fnfc = fu;
            } else if fu <= ffulc || fulc == xf || fulc == nfc {
                fulc = x;
                ffulc = fu;
            }
        }

        xm = 0.5 * (a + b);
        tol1 = sqrt_eps * xf.abs() + config.xatol / 3.0;
        tol2 = 2.0 * tol1;

        iterations += 1;
        if iterations >= config.max_iterations {
            break;
        }
    }

    Ok(Minimum {
        x: xf,
        objective: fx,
        iterations,
    })
}

/// Inputs for the optimal-rate search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RateSearchParams {
    /// Principal disbursed at t = 0.
    pub amount: f64,
    /// Number of repayment periods.
    pub periods: u32,
    /// Per-period probability of default.
    pub prob_of_default: f64,
    /// Fraction of the balance lost on default.
    pub loss_given_default: f64,
    /// Lower bound of the rate search interval.
    pub min_rate: f64,
    /// Upper bound of the rate search interval.
    pub max_rate: f64,
    /// Risk-adjusted yield the search aims for.
    pub target_expected_irr: f64,
}

/// Outcome of the optimal-rate search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RateSearch {
    /// Rate at the objective minimum.
    pub rate: f64,
    /// Expected IRR achieved at that rate.
    pub expected_irr: f64,
    /// Squared target error left at the minimum. The search does not
    /// guarantee this reaches zero; callers should check it.
    pub residual: f64,
    /// Minimizer iterations consumed.
    pub iterations: u32,
}

/// Search for the loan rate whose expected IRR matches the target.
///
/// The objective is `(target - expected_irr(rate))^2`, minimized over
/// `[min_rate, max_rate]`. Rates where the engine cannot produce an
/// expected IRR (for example, a truncated series with no real root) are
/// treated as infinitely bad so the search steers around them.
///
/// # Errors
///
/// [`EngineError::InvalidBounds`] on an inverted or non-finite interval,
/// or a lower bound at or below -100%; any engine failure at the chosen
/// minimum itself is propagated.
pub fn search_optimal_rate(params: &RateSearchParams) -> EngineResult<RateSearch> {
    if !(params.min_rate > -1.0) {
        return Err(EngineError::InvalidBounds {
            lower: params.min_rate,
            upper: params.max_rate,
        });
    }

    let expected_at = |rate: f64| -> EngineResult<f64> {
        Amortization::new(params.amount, rate, params.periods)?
            .expected_irr(params.prob_of_default, params.loss_given_default)
    };

    let objective = |rate: f64| match expected_at(rate) {
        Ok(expected) => (params.target_expected_irr - expected).powi(2),
        Err(_) => f64::INFINITY,
    };

    let minimum = minimize_bounded(
        objective,
        params.min_rate,
        params.max_rate,
        &OptimizerConfig::default(),
    )?;

    let expected = expected_at(minimum.x)?;
    Ok(RateSearch {
        rate: minimum.x,
        expected_irr: expected,
        residual: minimum.objective,
        iterations: minimum.iterations,
    })
}
