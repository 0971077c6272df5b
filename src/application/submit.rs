use crate::domain::form::FieldErrors;
use std::sync::atomic::{AtomicBool, Ordering};

/// Result of one submission attempt. Every variant returns the screen to an
/// idle state awaiting the next user action.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The remote call succeeded.
    Completed,
    /// The schema rejected the input; the caller maps these into per-field
    /// annotations. The remote collaborator was never contacted.
    FieldErrors(FieldErrors),
    /// The remote call failed; a generic alert was already raised.
    Failed,
    /// Another submission was still outstanding; nothing was done.
    InFlight,
}

/// At most one submission may be outstanding per flow. The original screens
/// let the submit action fire while a request was still in flight, producing
/// duplicate remote calls; the guard closes that gap.
#[derive(Debug, Default)]
pub struct InFlightGuard {
    busy: AtomicBool,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the flow for one attempt. Returns `None` while a prior attempt
    /// has not resolved yet.
    pub fn try_begin(&self) -> Option<InFlightPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightPermit { guard: self })
    }
}

/// Releases the guard when the attempt resolves, on every exit path.
pub struct InFlightPermit<'a> {
    guard: &'a InFlightGuard,
}

impl Drop for InFlightPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
