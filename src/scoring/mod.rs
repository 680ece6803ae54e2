pub mod bureau;

use crate::errors::Result;
use crate::types::CreditScore;

pub use bureau::{BureauCreditScorer, CreditBureau};

/// credit scoring capability used by the decision engine
pub trait CreditScorer {
    /// compute a score for the applicant and keep it as the current score
    fn calculate_score(&mut self, name: &str, address: &str) -> Result<()>;

    /// most recently calculated score, none if nothing has been calculated
    fn score(&self) -> Option<CreditScore>;
}

impl<T: CreditScorer + ?Sized> CreditScorer for &mut T {
    fn calculate_score(&mut self, name: &str, address: &str) -> Result<()> {
        (**self).calculate_score(name, address)
    }

    fn score(&self) -> Option<CreditScore> {
        (**self).score()
    }
}

impl<T: CreditScorer + ?Sized> CreditScorer for Box<T> {
    fn calculate_score(&mut self, name: &str, address: &str) -> Result<()> {
        (**self).calculate_score(name, address)
    }

    fn score(&self) -> Option<CreditScore> {
        (**self).score()
    }
}
