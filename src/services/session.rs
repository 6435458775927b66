use {
    crate::domain::charge::PixStatus,
    crate::domain::error::ChargeError,
    crate::domain::id::TransactionId,
    chrono::{DateTime, Utc},
    uuid::Uuid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Creating,
    AwaitingPayment,
    Confirmed,
}

/// Outcome of feeding one observed provider status into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// First observation of the terminal status; fire side effects now.
    ConfirmedNow,
    /// Terminal status observed again after confirmation; fire nothing.
    AlreadyConfirmed,
    StillWaiting,
}

/// In-memory state for one charge cycle. All mutation goes through the
/// transition methods; dropping the value is the reload-equivalent teardown.
#[derive(Debug)]
pub struct PollingSession {
    id: Uuid,
    state: SessionState,
    transaction_id: Option<TransactionId>,
    last_status: Option<PixStatus>,
    started_at: Option<DateTime<Utc>>,
}

impl PollingSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            state: SessionState::Idle,
            transaction_id: None,
            last_status: None,
            started_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transaction_id(&self) -> Option<&TransactionId> {
        self.transaction_id.as_ref()
    }

    pub fn last_status(&self) -> Option<&PixStatus> {
        self.last_status.as_ref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Start a new charge cycle. Rejected while a creation is already in
    /// flight, so a double trigger cannot open a duplicate charge; from any
    /// settled or waiting state it clears the previous cycle first.
    pub fn begin_creating(&mut self) -> Result<(), ChargeError> {
        if self.state == SessionState::Creating {
            return Err(ChargeError::Validation(
                "charge creation already in flight".into(),
            ));
        }
        self.clear();
        self.state = SessionState::Creating;
        Ok(())
    }

    /// Creating → AwaitingPayment. The caller starts the watcher with the
    /// same id.
    pub fn charge_created(&mut self, id: TransactionId) {
        debug_assert_eq!(self.state, SessionState::Creating);
        self.transaction_id = Some(id);
        self.started_at = Some(Utc::now());
        self.state = SessionState::AwaitingPayment;
    }

    /// Creating → Idle. The session stays ready for another attempt.
    pub fn creation_failed(&mut self) {
        debug_assert_eq!(self.state, SessionState::Creating);
        self.state = SessionState::Idle;
    }

    /// Record a polled status. `ConfirmedNow` is returned at most once per
    /// charge cycle, no matter how many times the terminal status arrives.
    pub fn observe_status(&mut self, status: PixStatus) -> StatusOutcome {
        if self.state == SessionState::Confirmed {
            return StatusOutcome::AlreadyConfirmed;
        }
        let paid = status.is_paid();
        self.last_status = Some(status);
        if paid {
            self.state = SessionState::Confirmed;
            StatusOutcome::ConfirmedNow
        } else {
            StatusOutcome::StillWaiting
        }
    }

    /// Back to Idle from any state, clearing the transaction id and status.
    pub fn reset(&mut self) {
        self.clear();
        self.state = SessionState::Idle;
    }

    fn clear(&mut self) {
        self.transaction_id = None;
        self.last_status = None;
        self.started_at = None;
    }
}

impl Default for PollingSession {
    fn default() -> Self {
        Self::new()
    }
}
