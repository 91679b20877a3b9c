//! Cashflow value type.

use serde::Serialize;

/// A single cashflow: an amount paid or received at an integer period index.
///
/// Negative amounts are outflows (the lender disbursing principal), positive
/// amounts are inflows (annuity payments coming back).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cashflow {
    /// Signed amount of the flow.
    pub amount: f64,
    /// Period index at which the flow occurs (0 = today).
    pub t: u32,
}

impl Cashflow {
    /// Create a cashflow of `amount` at period `t`.
    pub fn new(amount: f64, t: u32) -> Self {
        Self { amount, t }
    }

    /// Discount this flow at per-period rate `r`, returning a new cashflow
    /// at t = 0. The original flow is untouched.
    ///
    /// Undefined for r <= -1 (the discount factor base goes non-positive);
    /// callers own that precondition.
    pub fn present_value(&self, r: f64) -> Cashflow {
        let pv_amount = self.amount * (1.0 + r).powi(-(self.t as i32));
        Cashflow {
            amount: pv_amount,
            t: 0,
        }
    }
}

impl std::fmt::Display for Cashflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cashflow({}, {})", self.amount, self.t)
    }
}
