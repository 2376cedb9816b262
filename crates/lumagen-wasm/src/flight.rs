//! Flight-state bindings.
//!
//! The page owns one `JsFlight` per long-running operation (one for
//! generation, one for export) and derives its disabled-controls state from
//! `controls_locked` instead of keeping loading booleans of its own.

use lumagen_core::Flight;
use wasm_bindgen::prelude::*;

/// Lifecycle state of one long-running operation.
#[wasm_bindgen]
pub struct JsFlight {
    inner: Flight,
}

#[wasm_bindgen]
impl JsFlight {
    /// Create a settled, idle flight.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Flight::new(),
        }
    }

    /// Attempt to begin the operation; returns `false` while one is already
    /// in flight (the caller must not issue a second request).
    pub fn try_begin(&mut self) -> bool {
        self.inner.try_begin()
    }

    /// Settle the flight as succeeded.
    pub fn succeed(&mut self) {
        self.inner.succeed();
    }

    /// Settle the flight as failed with a user-facing message.
    pub fn fail(&mut self, message: String) {
        self.inner.fail(message);
    }

    /// Dismiss a settled outcome.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Whether the operation is currently running.
    #[wasm_bindgen(getter)]
    pub fn is_in_flight(&self) -> bool {
        self.inner.is_in_flight()
    }

    /// Whether the controls tied to this operation should be disabled.
    #[wasm_bindgen(getter)]
    pub fn controls_locked(&self) -> bool {
        self.inner.controls_locked()
    }

    /// The failure message from the last flight, if it failed.
    pub fn last_error(&self) -> Option<String> {
        self.inner.last_error().map(str::to_string)
    }
}

impl Default for JsFlight {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_begin_is_refused() {
        let mut flight = JsFlight::new();
        assert!(flight.try_begin());
        assert!(!flight.try_begin());
        assert!(flight.controls_locked());
    }

    #[test]
    fn test_failure_unlocks_and_reports() {
        let mut flight = JsFlight::new();
        flight.try_begin();
        flight.fail("Generation Failed".to_string());
        assert!(!flight.controls_locked());
        assert_eq!(flight.last_error().as_deref(), Some("Generation Failed"));
    }
}
