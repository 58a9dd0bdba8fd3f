use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::errors::DomainError;

/// Shared flag telling a running order transaction that its caller has gone
/// away. Checked at commit points; a set flag makes the transaction roll back.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(DomainError::Cancelled)` once the flag is set.
    pub fn check(&self) -> Result<(), DomainError> {
        if self.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        Ok(())
    }

    /// Returns a guard that cancels this flag when dropped, unless it was
    /// disarmed first.
    pub fn cancel_on_drop(&self) -> CancelOnDrop {
        CancelOnDrop {
            cancellation: self.clone(),
            armed: true,
        }
    }
}

/// Held across an await point; if the awaiting future is dropped the guard
/// goes with it and cancels the flag.
#[derive(Debug)]
pub struct CancelOnDrop {
    cancellation: Cancellation,
    armed: bool,
}

impl CancelOnDrop {
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if self.armed {
            self.cancellation.cancel();
        }
    }
}
