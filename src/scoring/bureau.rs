use tracing::debug;

use crate::errors::Result;
use crate::scoring::CreditScorer;
use crate::types::CreditScore;

/// source of raw credit scores, e.g. a credit bureau
pub trait CreditBureau {
    fn fetch_score(&self, name: &str, address: &str) -> Result<CreditScore>;
}

impl<F> CreditBureau for F
where
    F: Fn(&str, &str) -> Result<CreditScore>,
{
    fn fetch_score(&self, name: &str, address: &str) -> Result<CreditScore> {
        self(name, address)
    }
}

/// scorer that asks a bureau and caches the latest answer
pub struct BureauCreditScorer<B> {
    bureau: B,
    current: Option<ScoredApplicant>,
    lookups: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoredApplicant {
    name: String,
    address: String,
    score: CreditScore,
}

impl<B: CreditBureau> BureauCreditScorer<B> {
    pub fn new(bureau: B) -> Self {
        Self {
            bureau,
            current: None,
            lookups: 0,
        }
    }

    /// applicant (name, address) the current score belongs to
    pub fn scored_applicant(&self) -> Option<(&str, &str)> {
        self.current
            .as_ref()
            .map(|s| (s.name.as_str(), s.address.as_str()))
    }

    /// number of bureau lookups performed
    pub fn lookups(&self) -> u32 {
        self.lookups
    }

    /// forget the cached score
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl<B: CreditBureau> CreditScorer for BureauCreditScorer<B> {
    fn calculate_score(&mut self, name: &str, address: &str) -> Result<()> {
        self.lookups += 1;
        // a failed lookup must not leave a previous applicant's score behind
        self.current = None;

        let score = self.bureau.fetch_score(name, address)?;
        debug!(score = score.value(), "credit bureau lookup complete");

        self.current = Some(ScoredApplicant {
            name: name.to_string(),
            address: address.to_string(),
            score,
        });

        Ok(())
    }

    fn score(&self) -> Option<CreditScore> {
        self.current.as_ref().map(|s| s.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoanError;

    fn flat_bureau(_name: &str, _address: &str) -> Result<CreditScore> {
        Ok(CreditScore::new(650))
    }

    #[test]
    fn test_no_score_before_calculation() {
        let scorer = BureauCreditScorer::new(flat_bureau);
        assert_eq!(scorer.score(), None);
        assert_eq!(scorer.scored_applicant(), None);
    }

    #[test]
    fn test_calculate_caches_score() {
        let mut scorer = BureauCreditScorer::new(flat_bureau);

        scorer.calculate_score("Sarah", "Draper").unwrap();

        assert_eq!(scorer.score(), Some(CreditScore::new(650)));
        assert_eq!(scorer.scored_applicant(), Some(("Sarah", "Draper")));
        assert_eq!(scorer.lookups(), 1);
    }

    #[test]
    fn test_score_tracks_latest_applicant() {
        let mut scorer = BureauCreditScorer::new(|name: &str, _address: &str| -> Result<CreditScore> {
            Ok(CreditScore::new(if name == "Sarah" { 720 } else { 280 }))
        });

        scorer.calculate_score("Sarah", "Draper").unwrap();
        scorer.calculate_score("Bob", "Provo").unwrap();

        assert_eq!(scorer.score(), Some(CreditScore::new(280)));
        assert_eq!(scorer.scored_applicant(), Some(("Bob", "Provo")));

        scorer.reset();
        assert_eq!(scorer.score(), None);
    }

    #[test]
    fn test_failed_lookup_clears_score() {
        let mut scorer = BureauCreditScorer::new(|name: &str, _address: &str| -> Result<CreditScore> {
            if name == "Sarah" {
                Ok(CreditScore::new(720))
            } else {
                Err(LoanError::ScoringService {
                    message: "bureau unavailable".to_string(),
                })
            }
        });

        scorer.calculate_score("Sarah", "Draper").unwrap();
        let err = scorer.calculate_score("Bob", "Provo").unwrap_err();

        assert!(matches!(err, LoanError::ScoringService { .. }));
        assert_eq!(scorer.score(), None);
        assert_eq!(scorer.lookups(), 2);
    }
}
