use serde::{Deserialize, Serialize};
use std::fmt;

/// identifier of a loan application
pub type ApplicationId = u64;

/// identifier of a loan product, unique per product
pub type ProductId = u32;

/// outcome of the decision engine for an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Decision {
    /// not yet processed
    #[default]
    Undecided,
    Accepted,
    Declined(DeclineReason),
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted)
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, Decision::Undecided)
    }

    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self {
            Decision::Declined(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// why an application was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclineReason {
    /// salary under the policy minimum, no checks were run
    SalaryBelowMinimum,
    /// identity service did not confirm the applicant
    IdentityNotVerified,
    /// score under the acceptance threshold
    ScoreBelowThreshold,
}

/// credit score reported by a scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreditScore(u32);

impl CreditScore {
    pub const fn new(value: u32) -> Self {
        CreditScore(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// check against an acceptance threshold (inclusive)
    pub fn meets(&self, threshold: u32) -> bool {
        self.0 >= threshold
    }
}

impl From<u32> for CreditScore {
    fn from(value: u32) -> Self {
        CreditScore(value)
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_defaults_to_undecided() {
        let decision = Decision::default();
        assert_eq!(decision, Decision::Undecided);
        assert!(!decision.is_accepted());
        assert!(!decision.is_decided());
    }

    #[test]
    fn test_decline_reason() {
        let decision = Decision::Declined(DeclineReason::ScoreBelowThreshold);
        assert!(decision.is_decided());
        assert!(!decision.is_accepted());
        assert_eq!(decision.decline_reason(), Some(DeclineReason::ScoreBelowThreshold));
        assert_eq!(Decision::Accepted.decline_reason(), None);
    }

    #[test]
    fn test_score_threshold_is_inclusive() {
        assert!(CreditScore::new(300).meets(300));
        assert!(CreditScore::new(301).meets(300));
        assert!(!CreditScore::new(299).meets(300));
    }
}
