//! Services bridging the session core to external collaborators.
//!
//! # Services
//!
//! - [`auth`] - Signup/login against the external auth collaborator
//! - [`checkout`] - Order placement against the external checkout collaborator
//! - [`notices`] - User-facing success/error messages (toasts)
//!
//! Auth and checkout calls are asynchronous with respect to the UI; while one
//! is in flight, duplicate submissions are rejected by an internal flag
//! rather than a UI-bound disabled button.

pub mod auth;
pub mod checkout;
pub mod notices;

pub use auth::{AuthBackend, AuthError, AuthService, SignupRequest};
pub use checkout::{CheckoutBackend, CheckoutError, CheckoutService};
pub use notices::{MemorySink, Notice, NoticeSink, TracingSink};

use std::sync::atomic::{AtomicBool, Ordering};

/// Guards against concurrent duplicate submissions.
///
/// `try_begin` flips the flag and hands back an RAII guard; the flag resets
/// when the guard drops, including on error and panic paths.
#[derive(Debug, Default)]
pub(crate) struct SubmissionFlag(AtomicBool);

impl SubmissionFlag {
    /// Begin a submission, or return `None` if one is already in flight.
    pub(crate) fn try_begin(&self) -> Option<SubmissionGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmissionGuard(&self.0))
    }

    /// Whether a submission is currently in flight.
    pub(crate) fn is_in_flight(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// RAII guard marking a submission in flight.
pub(crate) struct SubmissionGuard<'a>(&'a AtomicBool);

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
