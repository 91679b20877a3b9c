//! Annuity amortization schedules and risk-adjusted yields.
//!
//! An [`Amortization`] is an immutable loan configuration; every table and
//! cashflow projection is derived on demand rather than cached. The enriched
//! schedule weaves in a geometric default-probability curve and per-period
//! truncated IRRs, and [`Amortization::expected_irr`] collapses that into a
//! single risk-adjusted yield.

use serde::Serialize;

use super::cashflow::Cashflow;
use super::error::{EngineError, EngineResult};
use super::irr::irr;

/// One row of a plain amortization schedule.
///
/// The `t = 0` row carries the opening balance with zeroed payment fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleRow {
    /// Period index, 0..=n.
    pub t: u32,
    /// Outstanding balance after the period's payment.
    pub balance: f64,
    /// Principal repaid this period.
    pub principal: f64,
    /// Interest accrued this period.
    pub interest: f64,
    /// Level payment for this period.
    pub annuity: f64,
}

/// One row of an enriched schedule: the plain row plus the survival-weighted
/// IRR and expected-loss columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnrichedRow {
    /// Period index, 0..=n.
    pub t: u32,
    /// Outstanding balance after the period's payment.
    pub balance: f64,
    /// Principal repaid this period.
    pub principal: f64,
    /// Interest accrued this period.
    pub interest: f64,
    /// Level payment for this period.
    pub annuity: f64,
    /// IRR of the cashflow series truncated at this period (0 at t = 0).
    pub irr: f64,
    /// Probability mass that default happens exactly at this period.
    pub prob: f64,
    /// Expected loss: balance x default probability x loss given default.
    pub exp_loss: f64,
}

/// An immutable level-payment loan: principal, per-period rate, periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Amortization {
    /// Principal disbursed at t = 0.
    pub amount: f64,
    /// Per-period interest rate. May be zero or negative, but above -100%.
    pub rate: f64,
    /// Number of repayment periods.
    pub n: u32,
}

impl Amortization {
    /// Create a validated loan configuration.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidLoan`] when the principal is not strictly
    /// positive, when `n` is zero, or when the rate is at or below -100%
    /// (where discounting is undefined).
    pub fn new(amount: f64, rate: f64, n: u32) -> EngineResult<Self> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(EngineError::invalid_loan("principal must be positive"));
        }
        if n == 0 {
            return Err(EngineError::invalid_loan("periods must be positive"));
        }
        if !(rate > -1.0) || !rate.is_finite() {
            return Err(EngineError::invalid_loan(
                "per-period rate must be greater than -100%",
            ));
        }
        Ok(Self { amount, rate, n })
    }

    /// The constant payment that fully amortizes the loan over `n` periods.
    ///
    /// Closed form `rate * amount / (1 - (1+rate)^-n)`; the zero-rate loan
    /// degenerates to straight-line repayment `amount / n`.
    pub fn annuity(&self) -> f64 {
        if self.rate == 0.0 {
            return self.amount / self.n as f64;
        }
        self.rate * self.amount / (1.0 - (1.0 + self.rate).powi(-(self.n as i32)))
    }

    /// The full cashflow projection: principal out at t = 0, annuities back
    /// at every period 1..=n.
    pub fn to_cashflows(&self) -> Vec<Cashflow> {
        // Full horizon is always in range.
        self.to_cashflows_until(self.n)
            .expect("n is validated positive")
    }

    /// The cashflow projection truncated at period `t`.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidRange`] unless `1 <= t <= n`.
    pub fn to_cashflows_until(&self, t: u32) -> EngineResult<Vec<Cashflow>> {
        if t == 0 || t > self.n {
            return Err(EngineError::InvalidRange { t, n: self.n });
        }
        let annuity = self.annuity();
        let mut flows = Vec::with_capacity(t as usize + 1);
        flows.push(Cashflow::new(-self.amount, 0));
        flows.extend((1..=t).map(|i| Cashflow::new(annuity, i)));
        Ok(flows)
    }

    /// Build the full amortization schedule row by row.
    ///
    /// Each period accrues interest on the prior balance, the annuity covers
    /// interest first and the remainder retires principal.
    pub fn schedule(&self) -> Vec<ScheduleRow> {
        let annuity = self.annuity();
        let mut balance = self.amount;
        let mut rows = Vec::with_capacity(self.n as usize + 1);
        rows.push(ScheduleRow {
            t: 0,
            balance,
            principal: 0.0,
            interest: 0.0,
            annuity: 0.0,
        });
        for t in 1..=self.n {
            let interest = self.rate * balance;
            let principal = annuity - interest;
            balance -= principal;
            rows.push(ScheduleRow {
                t,
                balance,
                principal,
                interest,
                annuity,
            });
        }
        rows
    }

    /// Build the schedule enriched with per-period truncated IRRs, the
    /// default-probability mass and a flat expected-loss column.
    ///
    /// The probability column is a geometric distribution over the default
    /// period: `(1-p)^t * p` for t < n, with the final period absorbing the
    /// remaining survival mass `(1-p)^n`, and the t = 0 row carrying the raw
    /// `p` boundary value. The column sums to one.
    ///
    /// The expected-loss column uses the flat per-period default rate
    /// (`balance * p * lgd`), not the evolving `prob` column.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidProbability`] for `prob_of_default` or
    /// `loss_given_default` outside [0, 1]; any [`irr`] failure on a
    /// truncated series is propagated.
    pub fn enriched_schedule(
        &self,
        prob_of_default: f64,
        loss_given_default: f64,
    ) -> EngineResult<Vec<EnrichedRow>> {
        validate_probability("prob_of_default", prob_of_default)?;
        validate_probability("loss_given_default", loss_given_default)?;

        let p = prob_of_default;
        let survival = 1.0 - p;

        let mut rows = Vec::with_capacity(self.n as usize + 1);
        for row in self.schedule() {
            let (row_irr, prob) = if row.t == 0 {
                (0.0, p)
            } else if row.t < self.n {
                let truncated = self.to_cashflows_until(row.t)?;
                (irr(&truncated)?, survival.powi(row.t as i32) * p)
            } else {
                let truncated = self.to_cashflows_until(row.t)?;
                (irr(&truncated)?, survival.powi(self.n as i32))
            };
            rows.push(EnrichedRow {
                t: row.t,
                balance: row.balance,
                principal: row.principal,
                interest: row.interest,
                annuity: row.annuity,
                irr: row_irr,
                prob,
                exp_loss: row.balance * p * loss_given_default,
            });
        }
        Ok(rows)
    }

    /// The scalar risk-adjusted yield: the probability-weighted sum of the
    /// enriched schedule's IRR column, rounded to 4 decimal places.
    pub fn expected_irr(
        &self,
        prob_of_default: f64,
        loss_given_default: f64,
    ) -> EngineResult<f64> {
        let table = self.enriched_schedule(prob_of_default, loss_given_default)?;
        let total: f64 = table.iter().map(|row| row.irr * row.prob).sum();
        Ok(round4(total))
    }
}

fn validate_probability(name: &'static str, value: f64) -> EngineResult<()> {
    if !(0.0..=1.0).contains(&value) || !value.is_finite() {
        return Err(EngineError::InvalidProbability { name, value });
    }
    Ok(())
}

/// Round to 4 decimal places, the precision exposed for expected yields.
fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
