//! Applicant representation and the external-classifier seam.
//!
//! The classifier itself lives outside this crate; it is consumed only
//! through the [`ProbabilityModel`] contract, fed WOE-encoded feature
//! vectors built by a fitted [`WoeMapper`].

use std::collections::BTreeMap;

use super::error::ScoringResult;
use super::mapper::WoeMapper;

/// Contract with the external classifier: a probability pair
/// `(good, bad)` for a WOE-encoded feature vector.
pub trait ProbabilityModel {
    /// Predict the (good, bad) outcome probabilities.
    fn predict_proba(&self, features: &[f64]) -> (f64, f64);
}

/// A loan applicant's raw attributes, as binned labels or category values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub customer_age: String,
    pub months_at_address: String,
    pub residence_status: String,
    pub employment: String,
    pub income: String,
    pub months_with_bank: String,
    pub other_credits: String,
    pub balance: String,
}

/// Enumerated identifier for each [`Client`] field. Updating an attribute
/// goes through this closed set, so an unknown field name is a compile-time
/// impossibility (or a parse error at the CLI boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    CustomerAge,
    MonthsAtAddress,
    ResidenceStatus,
    Employment,
    Income,
    MonthsWithBank,
    OtherCredits,
    Balance,
}

impl ClientField {
    /// All fields, in the canonical record order.
    pub const ALL: [ClientField; 8] = [
        ClientField::CustomerAge,
        ClientField::MonthsAtAddress,
        ClientField::ResidenceStatus,
        ClientField::Employment,
        ClientField::Income,
        ClientField::MonthsWithBank,
        ClientField::OtherCredits,
        ClientField::Balance,
    ];

    /// The record/column name of this field.
    pub fn name(&self) -> &'static str {
        match self {
            ClientField::CustomerAge => "customer_age",
            ClientField::MonthsAtAddress => "months_at_address",
            ClientField::ResidenceStatus => "residence_status",
            ClientField::Employment => "employment",
            ClientField::Income => "income",
            ClientField::MonthsWithBank => "months_with_bank",
            ClientField::OtherCredits => "other_credits",
            ClientField::Balance => "balance",
        }
    }
}

impl std::fmt::Display for ClientField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ClientField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ClientField::ALL.iter().map(|f| f.name()).collect();
                format!("Attribute '{}' not found in {:?}", s, valid)
            })
    }
}

impl Client {
    /// Read one attribute by field identifier.
    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::CustomerAge => &self.customer_age,
            ClientField::MonthsAtAddress => &self.months_at_address,
            ClientField::ResidenceStatus => &self.residence_status,
            ClientField::Employment => &self.employment,
            ClientField::Income => &self.income,
            ClientField::MonthsWithBank => &self.months_with_bank,
            ClientField::OtherCredits => &self.other_credits,
            ClientField::Balance => &self.balance,
        }
    }

    /// Update one attribute by field identifier.
    pub fn set(&mut self, field: ClientField, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match field {
            ClientField::CustomerAge => self.customer_age = value,
            ClientField::MonthsAtAddress => self.months_at_address = value,
            ClientField::ResidenceStatus => self.residence_status = value,
            ClientField::Employment => self.employment = value,
            ClientField::Income => self.income = value,
            ClientField::MonthsWithBank => self.months_with_bank = value,
            ClientField::OtherCredits => self.other_credits = value,
            ClientField::Balance => self.balance = value,
        }
        self
    }

    /// Render the applicant as a field-name -> value record.
    pub fn to_record(&self) -> BTreeMap<String, String> {
        ClientField::ALL
            .into_iter()
            .map(|field| (field.name().to_string(), self.get(field).to_string()))
            .collect()
    }

    /// Score this applicant: WOE-encode the record through the fitted
    /// mapper and read the bad-outcome probability off the external model.
    pub fn prob_of_default(
        &self,
        model: &dyn ProbabilityModel,
        mapper: &WoeMapper,
    ) -> ScoringResult<f64> {
        let encoded = mapper.transform_record(&self.to_record())?;
        let (_good, bad) = model.predict_proba(&encoded);
        Ok(bad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::target::TargetMapping;
    use polars::prelude::*;

    fn sample_client() -> Client {
        Client {
            customer_age: "(37, 40)".to_string(),
            months_at_address: "(23, 83)".to_string(),
            residence_status: "owner".to_string(),
            employment: "salaried".to_string(),
            income: "(29000, 33000)".to_string(),
            months_with_bank: "(12, 45)".to_string(),
            other_credits: "none".to_string(),
            balance: "(558, 1254)".to_string(),
        }
    }

    #[test]
    fn test_set_and_get_by_field() {
        let mut client = sample_client();
        client.set(ClientField::Income, "(47000, inf)");
        assert_eq!(client.get(ClientField::Income), "(47000, inf)");
        assert_eq!(client.income, "(47000, inf)");
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!(
            "customer_age".parse::<ClientField>().unwrap(),
            ClientField::CustomerAge
        );
        let err = "shoe_size".parse::<ClientField>().unwrap_err();
        assert!(err.contains("shoe_size"));
        assert!(err.contains("customer_age"));
    }

    #[test]
    fn test_to_record_covers_all_fields() {
        let record = sample_client().to_record();
        assert_eq!(record.len(), 8);
        assert_eq!(record["employment"], "salaried");
    }

    /// A stand-in for the external classifier: bad probability rises with
    /// the (negated) total WOE score.
    struct StubModel;

    impl ProbabilityModel for StubModel {
        fn predict_proba(&self, features: &[f64]) -> (f64, f64) {
            let score: f64 = features.iter().sum();
            let bad = 1.0 / (1.0 + score.exp());
            (1.0 - bad, bad)
        }
    }

    #[test]
    fn test_prob_of_default_through_mapper_and_model() {
        let history = df! {
            "employment" => ["salaried", "salaried", "salaried", "salaried",
                             "self", "self", "self", "self"],
            "status" => [0i32, 0, 0, 1, 1, 1, 1, 0],
        }
        .unwrap();

        let mut mapper = WoeMapper::new(
            vec!["employment".to_string()],
            "status",
            TargetMapping::default(),
        );
        mapper.fit(&history).unwrap();

        let mut client = sample_client();
        client.set(ClientField::Employment, "salaried");
        let p_salaried = client.prob_of_default(&StubModel, &mapper).unwrap();

        client.set(ClientField::Employment, "self");
        let p_self = client.prob_of_default(&StubModel, &mapper).unwrap();

        // "salaried" has better historical odds, so a lower bad probability.
        assert!(p_salaried < p_self);
        assert!((0.0..=1.0).contains(&p_salaried));
    }
}
