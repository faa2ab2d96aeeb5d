// ============================================================================
// Event Handler Interface
// Defines the contract for observing evaluation events
// ============================================================================

use crate::domain::{ErrorKind, RoundingPolicy, Stage};
use crate::numeric::ExactDecimal;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationEvent {
    /// Request received, before any parsing
    EvaluationReceived {
        evaluation_id: Uuid,
        expression: String,
        timestamp: DateTime<Utc>,
    },

    /// Operand parsed and range-checked
    OperandParsed {
        evaluation_id: Uuid,
        field: String,
        value: ExactDecimal,
        timestamp: DateTime<Utc>,
    },

    /// Intermediate or final stage computed, rounded and range-checked
    StageComputed {
        evaluation_id: Uuid,
        stage: Stage,
        value: ExactDecimal,
        timestamp: DateTime<Utc>,
    },

    /// Evaluation finished successfully
    EvaluationCompleted {
        evaluation_id: Uuid,
        result: ExactDecimal,
        rounded: ExactDecimal,
        policy: RoundingPolicy,
        timestamp: DateTime<Utc>,
    },

    /// Evaluation failed with reason
    EvaluationRejected {
        evaluation_id: Uuid,
        kind: ErrorKind,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl EvaluationEvent {
    /// Correlation id shared by all events of one evaluation
    pub fn evaluation_id(&self) -> Uuid {
        match self {
            EvaluationEvent::EvaluationReceived { evaluation_id, .. }
            | EvaluationEvent::OperandParsed { evaluation_id, .. }
            | EvaluationEvent::StageComputed { evaluation_id, .. }
            | EvaluationEvent::EvaluationCompleted { evaluation_id, .. }
            | EvaluationEvent::EvaluationRejected { evaluation_id, .. } => *evaluation_id,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an evaluation event
    fn on_event(&self, event: EvaluationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<EvaluationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: EvaluationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: EvaluationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order.
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<EvaluationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<EvaluationEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events
    pub fn take(&self) -> Vec<EvaluationEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: EvaluationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<EvaluationEvent>) {
        self.events.lock().extend(events);
    }
}
