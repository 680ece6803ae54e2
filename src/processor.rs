use hourglass_rs::{SafeTimeProvider, TimeSource};
use tracing::{debug, debug_span, info, warn};
use uuid::Uuid;

use crate::application::LoanApplication;
use crate::config::DecisionPolicy;
use crate::errors::{LoanError, Result};
use crate::events::{Event, EventStore};
use crate::identity::IdentityVerifier;
use crate::scoring::CreditScorer;
use crate::types::{Decision, DeclineReason};

/// decision engine for loan applications
///
/// Owns the two collaborators it is constructed with and never creates its
/// own. Each call to [`process`](Self::process) runs the policy in order:
///
/// 1. salary gate, declining without touching either collaborator
/// 2. `initialize` then `validate` on the identity verifier
/// 3. `calculate_score` then `score` on the credit scorer
///
/// Collaborator errors propagate unchanged and leave the application's
/// decision as it was.
pub struct LoanApplicationProcessor<V, S> {
    identity_verifier: V,
    credit_scorer: S,
    policy: DecisionPolicy,
    time: SafeTimeProvider,
    events: EventStore,
}

impl<V: IdentityVerifier, S: CreditScorer> LoanApplicationProcessor<V, S> {
    /// create processor with the standard policy
    pub fn new(identity_verifier: V, credit_scorer: S) -> Self {
        Self::with_policy(identity_verifier, credit_scorer, DecisionPolicy::standard())
    }

    pub fn with_policy(identity_verifier: V, credit_scorer: S, policy: DecisionPolicy) -> Self {
        Self {
            identity_verifier,
            credit_scorer,
            policy,
            time: SafeTimeProvider::new(TimeSource::System),
            events: EventStore::new(),
        }
    }

    /// set the time provider used to stamp events
    pub fn set_time(&mut self, time: SafeTimeProvider) {
        self.time = time;
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    pub fn identity_verifier(&self) -> &V {
        &self.identity_verifier
    }

    pub fn identity_verifier_mut(&mut self) -> &mut V {
        &mut self.identity_verifier
    }

    pub fn credit_scorer(&self) -> &S {
        &self.credit_scorer
    }

    pub fn credit_scorer_mut(&mut self) -> &mut S {
        &mut self.credit_scorer
    }

    /// give the collaborators back
    pub fn into_parts(self) -> (V, S) {
        (self.identity_verifier, self.credit_scorer)
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// decide the application and record the outcome on it
    ///
    /// Events from the previous pass are discarded; `events()` only
    /// reflects the latest call.
    pub fn process(&mut self, application: &mut LoanApplication) -> Result<()> {
        let run_id = Uuid::new_v4();
        let application_id = application.id();
        let span = debug_span!("process_application", application_id, %run_id);
        let _enter = span.enter();

        self.events.clear();
        self.events.emit(Event::ProcessingStarted {
            run_id,
            application_id,
            timestamp: self.time.now(),
        });

        match self.decide(application, run_id) {
            Ok(decision) => {
                application.record_decision(decision);
                info!(?decision, "loan application decided");

                self.events.emit(Event::DecisionRecorded {
                    run_id,
                    application_id,
                    decision,
                    timestamp: self.time.now(),
                });
                Ok(())
            }
            Err(error) => {
                warn!(%error, "loan application processing failed");

                self.events.emit(Event::ProcessingFailed {
                    run_id,
                    application_id,
                    error: error.to_string(),
                    timestamp: self.time.now(),
                });
                Err(error)
            }
        }
    }

    fn decide(&mut self, application: &LoanApplication, run_id: Uuid) -> Result<Decision> {
        let application_id = application.id();

        if !self.policy.salary_sufficient(application.salary()) {
            debug!(
                salary = application.salary(),
                minimum = self.policy.minimum_salary,
                "salary below minimum"
            );
            self.events.emit(Event::SalaryGateFailed {
                run_id,
                application_id,
                salary: application.salary(),
                minimum_salary: self.policy.minimum_salary,
                timestamp: self.time.now(),
            });
            return Ok(Decision::Declined(DeclineReason::SalaryBelowMinimum));
        }

        self.identity_verifier.initialize()?;
        let verified = self.identity_verifier.validate(
            application.name(),
            application.age(),
            application.address(),
        )?;
        debug!(verified, "identity checked");

        self.events.emit(Event::IdentityChecked {
            run_id,
            application_id,
            verified,
            timestamp: self.time.now(),
        });

        if !verified {
            return Ok(Decision::Declined(DeclineReason::IdentityNotVerified));
        }

        self.credit_scorer
            .calculate_score(application.name(), application.address())?;
        let score = self.credit_scorer.score().ok_or(LoanError::ScoreUnavailable)?;
        debug!(score = score.value(), minimum = self.policy.minimum_score, "credit score calculated");

        self.events.emit(Event::ScoreCalculated {
            run_id,
            application_id,
            score,
            minimum_score: self.policy.minimum_score,
            timestamp: self.time.now(),
        });

        if score.meets(self.policy.minimum_score) {
            Ok(Decision::Accepted)
        } else {
            Ok(Decision::Declined(DeclineReason::ScoreBelowThreshold))
        }
    }
}
