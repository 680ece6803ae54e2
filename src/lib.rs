pub mod application;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod identity;
pub mod processor;
pub mod product;
pub mod scoring;
pub mod types;

// re-export key types
pub use application::{Applicant, LoanApplication, LoanApplicationBuilder};
pub use config::{DecisionPolicy, MINIMUM_CREDIT_SCORE, MINIMUM_SALARY};
pub use decimal::Rate;
pub use errors::{LoanError, Result};
pub use events::{Event, EventStore};
pub use identity::{
    clock_fn, service_fn, Clock, IdentityService, IdentityVerifier, ServiceGatewayVerifier,
    SimpleIdentityVerifier,
};
pub use processor::LoanApplicationProcessor;
pub use product::{LoanAmount, LoanProduct};
pub use scoring::{BureauCreditScorer, CreditBureau, CreditScorer};
pub use types::{ApplicationId, CreditScore, Decision, DeclineReason, ProductId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
