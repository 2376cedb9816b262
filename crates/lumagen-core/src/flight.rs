//! Lifecycle state for long-running operations.
//!
//! Generation and export each own one `Flight`. The machine is the only
//! source of truth for "is something running": controls are disabled while a
//! flight is up, and a second begin attempt is refused until the first one
//! settles. There is no cancellation; a flight always settles to `Succeeded`
//! or `Failed` before another can begin.

/// State of one long-running operation.
///
/// Transitions: `Idle -> InFlight -> (Succeeded | Failed) -> Idle` (via
/// [`Flight::reset`], or directly by the next [`Flight::try_begin`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Flight {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl Flight {
    /// Create a settled, idle flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to begin the operation.
    ///
    /// Returns `true` and enters `InFlight` if the flight is settled;
    /// returns `false` without changing state while one is already up.
    pub fn try_begin(&mut self) -> bool {
        if matches!(self, Flight::InFlight) {
            log::debug!("refusing to begin: operation already in flight");
            return false;
        }
        *self = Flight::InFlight;
        true
    }

    /// Settle the flight as succeeded.
    pub fn succeed(&mut self) {
        *self = Flight::Succeeded;
    }

    /// Settle the flight as failed, recording the user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Flight::Failed(message.into());
    }

    /// Dismiss a settled outcome and return to `Idle`.
    pub fn reset(&mut self) {
        if !matches!(self, Flight::InFlight) {
            *self = Flight::Idle;
        }
    }

    /// Whether the operation is currently running.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Flight::InFlight)
    }

    /// Whether the UI controls tied to this operation should be disabled.
    pub fn controls_locked(&self) -> bool {
        self.is_in_flight()
    }

    /// The failure message, if the last flight failed.
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Flight::Failed(message) => Some(message),
            _ => None,
        }
    }
}
