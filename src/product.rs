use serde::Serialize;
use std::fmt;

use crate::decimal::Rate;
use crate::errors::{LoanError, Result};
use crate::types::ProductId;

/// loan product being applied for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanProduct {
    id: ProductId,
    name: String,
    interest_rate: Rate,
}

impl LoanProduct {
    /// create product, rejecting negative annual rates
    pub fn new(id: ProductId, name: impl Into<String>, interest_rate: Rate) -> Result<Self> {
        if interest_rate.is_negative() {
            return Err(LoanError::InvalidInterestRate {
                rate: interest_rate,
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            interest_rate,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }
}

/// requested sum, value is in whatever unit the currency is quoted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanAmount {
    currency_code: String,
    value: i64,
}

impl LoanAmount {
    /// create amount; currency must be a three letter code and value non-negative
    pub fn new(currency_code: &str, value: i64) -> Result<Self> {
        let code = currency_code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LoanError::InvalidCurrency {
                code: currency_code.to_string(),
            });
        }

        if value < 0 {
            return Err(LoanError::InvalidAmount { value });
        }

        Ok(Self {
            currency_code: code.to_ascii_uppercase(),
            value,
        })
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for LoanAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency_code)
    }
}
