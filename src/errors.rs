use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid loan amount: {value}")]
    InvalidAmount {
        value: i64,
    },

    #[error("invalid currency code: {code:?}")]
    InvalidCurrency {
        code: String,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid applicant: {message}")]
    InvalidApplicant {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("identity verifier used before initialize")]
    VerifierNotInitialized,

    #[error("identity verification service failed: {message}")]
    VerificationService {
        message: String,
    },

    #[error("credit scoring service failed: {message}")]
    ScoringService {
        message: String,
    },

    #[error("no credit score has been calculated")]
    ScoreUnavailable,
}

pub type Result<T> = std::result::Result<T, LoanError>;
