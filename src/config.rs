use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};

/// minimum salary an applicant needs before any checks run
pub const MINIMUM_SALARY: i64 = 65_000;

/// minimum credit score for acceptance (inclusive)
pub const MINIMUM_CREDIT_SCORE: u32 = 300;

/// acceptance policy applied by the decision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionPolicy {
    pub minimum_salary: i64,
    pub minimum_score: u32,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl DecisionPolicy {
    /// standard retail policy: 65,000 salary and a score of 300
    pub fn standard() -> Self {
        Self {
            minimum_salary: MINIMUM_SALARY,
            minimum_score: MINIMUM_CREDIT_SCORE,
        }
    }

    pub fn new(minimum_salary: i64, minimum_score: u32) -> Result<Self> {
        let policy = Self {
            minimum_salary,
            minimum_score,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.minimum_salary < 0 {
            return Err(LoanError::InvalidConfiguration {
                message: format!("minimum salary cannot be negative: {}", self.minimum_salary),
            });
        }

        Ok(())
    }

    /// salary gate
    pub fn salary_sufficient(&self, salary: i64) -> bool {
        salary >= self.minimum_salary
    }

    /// load a policy from json, rejecting invalid values
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: Self = serde_json::from_str(json).map_err(|e| LoanError::InvalidConfiguration {
            message: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
