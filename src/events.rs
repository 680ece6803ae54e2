use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ApplicationId, CreditScore, Decision};

/// audit events emitted while processing applications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ProcessingStarted {
        run_id: Uuid,
        application_id: ApplicationId,
        timestamp: DateTime<Utc>,
    },
    SalaryGateFailed {
        run_id: Uuid,
        application_id: ApplicationId,
        salary: i64,
        minimum_salary: i64,
        timestamp: DateTime<Utc>,
    },
    IdentityChecked {
        run_id: Uuid,
        application_id: ApplicationId,
        verified: bool,
        timestamp: DateTime<Utc>,
    },
    ScoreCalculated {
        run_id: Uuid,
        application_id: ApplicationId,
        score: CreditScore,
        minimum_score: u32,
        timestamp: DateTime<Utc>,
    },
    DecisionRecorded {
        run_id: Uuid,
        application_id: ApplicationId,
        decision: Decision,
        timestamp: DateTime<Utc>,
    },
    ProcessingFailed {
        run_id: Uuid,
        application_id: ApplicationId,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl Event {
    pub fn run_id(&self) -> Uuid {
        match self {
            Event::ProcessingStarted { run_id, .. }
            | Event::SalaryGateFailed { run_id, .. }
            | Event::IdentityChecked { run_id, .. }
            | Event::ScoreCalculated { run_id, .. }
            | Event::DecisionRecorded { run_id, .. }
            | Event::ProcessingFailed { run_id, .. } => *run_id,
        }
    }
}

/// event store for collecting events during processing
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
