//! Authentication against the external auth collaborator.
//!
//! The collaborator is opaque: this core validates input locally, hands the
//! call off, and reacts to the success/failure outcome. There is no automatic
//! retry and no cancellation of in-flight calls; duplicate submissions while
//! one is in flight are rejected.

use std::sync::Arc;

use emerald_table_core::{Email, EmailError};

use crate::services::notices::{Notice, NoticeSink};
use crate::services::SubmissionFlag;

/// Errors that can occur during authentication operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// A required form field is empty.
    #[error("please fill all required fields")]
    MissingField(&'static str),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Signup requires agreeing to the terms.
    #[error("you must agree to the Terms of Service and Privacy Policy")]
    TermsNotAccepted,

    /// A submission is already in flight.
    #[error("a request is already in progress")]
    SubmissionInFlight,

    /// The collaborator rejected the request; the reason is user-safe.
    #[error("{0}")]
    Rejected(String),
}

/// The external auth collaborator.
///
/// Implementations perform the actual account work (network, backend);
/// this core only reacts to the outcome. A rejection reason must be safe to
/// surface to the diner verbatim.
pub trait AuthBackend: Send + Sync {
    /// Create an account.
    fn signup(
        &self,
        name: &str,
        email: &Email,
        password: &str,
    ) -> impl Future<Output = Result<(), String>> + Send;

    /// Sign in with email and password.
    fn login(
        &self,
        email: &Email,
        password: &str,
    ) -> impl Future<Output = Result<(), String>> + Send;

    /// Sign in through Google.
    fn google_login(&self) -> impl Future<Output = Result<(), String>> + Send;
}

/// Validated signup form data.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    /// Full display name.
    pub name: String,
    /// Email address as typed; parsed before submission.
    pub email: String,
    /// Plain password; the backend owns hashing and storage.
    pub password: String,
    /// Whether the terms checkbox was ticked.
    pub accepted_terms: bool,
}

/// Authentication service.
///
/// Validates locally first, then calls the backend at most once at a time,
/// pushing the outcome into the notice sink.
pub struct AuthService<B> {
    backend: B,
    notices: Arc<dyn NoticeSink>,
    in_flight: SubmissionFlag,
}

impl<B: AuthBackend> AuthService<B> {
    /// Create a new authentication service.
    pub fn new(backend: B, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            backend,
            notices,
            in_flight: SubmissionFlag::default(),
        }
    }

    /// Whether an auth call is currently in flight.
    ///
    /// The view layer uses this to disable the triggering control.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_in_flight()
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any backend call if a required
    /// field is empty, the email is malformed, or the terms were not
    /// accepted; [`AuthError::SubmissionInFlight`] if another call is
    /// running; [`AuthError::Rejected`] if the collaborator declines.
    pub async fn signup(&self, request: SignupRequest) -> Result<(), AuthError> {
        let result = self.signup_inner(request).await;
        self.report(&result, "Account created. Welcome!");
        result
    }

    async fn signup_inner(&self, request: SignupRequest) -> Result<(), AuthError> {
        let email = validate_signup(&request)?;

        let _guard = self
            .in_flight
            .try_begin()
            .ok_or(AuthError::SubmissionInFlight)?;

        self.backend
            .signup(&request.name, &email, &request.password)
            .await
            .map_err(AuthError::Rejected)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty fields or a malformed email,
    /// [`AuthError::SubmissionInFlight`] if another call is running, or
    /// [`AuthError::Rejected`] if the collaborator declines.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let result = self.login_inner(email, password).await;
        self.report(&result, "Welcome back!");
        result
    }

    async fn login_inner(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        let email = Email::parse(email.trim())?;

        let _guard = self
            .in_flight
            .try_begin()
            .ok_or(AuthError::SubmissionInFlight)?;

        self.backend
            .login(&email, password)
            .await
            .map_err(AuthError::Rejected)
    }

    /// Sign in through Google.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SubmissionInFlight`] if another call is running,
    /// or [`AuthError::Rejected`] if the collaborator declines.
    pub async fn google_login(&self) -> Result<(), AuthError> {
        let result = self.google_login_inner().await;
        self.report(&result, "Welcome back!");
        result
    }

    async fn google_login_inner(&self) -> Result<(), AuthError> {
        let _guard = self
            .in_flight
            .try_begin()
            .ok_or(AuthError::SubmissionInFlight)?;

        self.backend.google_login().await.map_err(AuthError::Rejected)
    }

    fn report(&self, result: &Result<(), AuthError>, success_message: &str) {
        match result {
            Ok(()) => self.notices.push(Notice::Success(success_message.to_owned())),
            Err(err) => self.notices.push(Notice::Error(err.to_string())),
        }
    }
}

fn validate_signup(request: &SignupRequest) -> Result<Email, AuthError> {
    if request.name.trim().is_empty() {
        return Err(AuthError::MissingField("name"));
    }
    if request.email.trim().is_empty() {
        return Err(AuthError::MissingField("email"));
    }
    if request.password.is_empty() {
        return Err(AuthError::MissingField("password"));
    }
    let email = Email::parse(request.email.trim())?;
    if !request.accepted_terms {
        return Err(AuthError::TermsNotAccepted);
    }
    Ok(email)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::time::Duration;

    use tokio::sync::oneshot;

    use crate::services::notices::MemorySink;

    /// Backend that always accepts.
    struct Accepting;

    impl AuthBackend for Accepting {
        async fn signup(&self, _: &str, _: &Email, _: &str) -> Result<(), String> {
            Ok(())
        }

        async fn login(&self, _: &Email, _: &str) -> Result<(), String> {
            Ok(())
        }

        async fn google_login(&self) -> Result<(), String> {
            Ok(())
        }
    }

    /// Backend that always declines with a reason.
    struct Declining;

    impl AuthBackend for Declining {
        async fn signup(&self, _: &str, _: &Email, _: &str) -> Result<(), String> {
            Err("email already registered".to_owned())
        }

        async fn login(&self, _: &Email, _: &str) -> Result<(), String> {
            Err("invalid credentials".to_owned())
        }

        async fn google_login(&self) -> Result<(), String> {
            Err("google unavailable".to_owned())
        }
    }

    /// Backend whose signup blocks until released through a oneshot.
    struct Blocking {
        release: Mutex<Option<oneshot::Receiver<()>>>,
    }

    impl AuthBackend for Blocking {
        async fn signup(&self, _: &str, _: &Email, _: &str) -> Result<(), String> {
            let rx = self.release.lock().unwrap().take();
            if let Some(rx) = rx {
                let _ = rx.await;
            }
            Ok(())
        }

        async fn login(&self, _: &Email, _: &str) -> Result<(), String> {
            Ok(())
        }

        async fn google_login(&self) -> Result<(), String> {
            Ok(())
        }
    }

    fn request() -> SignupRequest {
        SignupRequest {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "correct-horse".to_owned(),
            accepted_terms: true,
        }
    }

    #[tokio::test]
    async fn test_signup_success_pushes_notice() {
        let sink = Arc::new(MemorySink::new());
        let service = AuthService::new(Accepting, sink.clone());

        service.signup(request()).await.unwrap();

        let last = sink.last().unwrap();
        assert!(!last.is_error());
        assert!(!service.is_submitting());
    }

    #[tokio::test]
    async fn test_signup_missing_fields_rejected_before_backend() {
        let sink = Arc::new(MemorySink::new());
        let service = AuthService::new(Declining, sink.clone());

        let mut req = request();
        req.name = "  ".to_owned();
        let err = service.signup(req).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingField("name")));

        // The notice is the validation message, not the backend's
        assert_eq!(
            sink.last().unwrap(),
            Notice::Error("please fill all required fields".to_owned())
        );
    }

    #[tokio::test]
    async fn test_signup_requires_terms() {
        let sink = Arc::new(MemorySink::new());
        let service = AuthService::new(Accepting, sink);

        let mut req = request();
        req.accepted_terms = false;
        let err = service.signup(req).await.unwrap_err();
        assert!(matches!(err, AuthError::TermsNotAccepted));
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let sink = Arc::new(MemorySink::new());
        let service = AuthService::new(Accepting, sink);

        let mut req = request();
        req.email = "not-an-email".to_owned();
        let err = service.signup(req).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_reason() {
        let sink = Arc::new(MemorySink::new());
        let service = AuthService::new(Declining, sink.clone());

        let err = service.signup(request()).await.unwrap_err();
        assert!(matches!(err, AuthError::Rejected(ref reason) if reason == "email already registered"));
        assert_eq!(
            sink.last().unwrap(),
            Notice::Error("email already registered".to_owned())
        );
    }

    #[tokio::test]
    async fn test_login_validates_fields() {
        let sink = Arc::new(MemorySink::new());
        let service = AuthService::new(Accepting, sink);

        let err = service.login("", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingField("email")));

        let err = service.login("ada@example.com", "").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingField("password")));
    }

    #[tokio::test]
    async fn test_duplicate_submission_rejected_while_in_flight() {
        let (tx, rx) = oneshot::channel();
        let sink = Arc::new(MemorySink::new());
        let service = AuthService::new(
            Blocking {
                release: Mutex::new(Some(rx)),
            },
            sink,
        );

        let mut first = Box::pin(service.signup(request()));

        // Poll the first submission until it parks on the backend call
        assert!(
            tokio::time::timeout(Duration::from_millis(10), &mut first)
                .await
                .is_err()
        );
        assert!(service.is_submitting());

        // A second submission is rejected without touching the backend
        let err = service.signup(request()).await.unwrap_err();
        assert!(matches!(err, AuthError::SubmissionInFlight));

        // Release the backend; the first submission completes and the
        // guard resets
        tx.send(()).unwrap();
        first.await.unwrap();
        assert!(!service.is_submitting());
    }
}
