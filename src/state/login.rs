#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::fmt;

use crate::net::auth::SubmitError;
use crate::net::types::LoginRequest;
use crate::util::validation::{ErrorMap, validate};

/// Shown for every submission failure; detail only goes to the log.
pub const FAILURE_MESSAGE: &str = "Login failed. Please try again.";

/// Login form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    Remember,
}

impl Field {
    /// Form control name, also used for element ids.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Remember => "remember",
        }
    }
}

/// Raw field values as typed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl FormState {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            remember: self.remember,
        }
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

/// What the status line shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub loading: bool,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Submission lifecycle: `Idle -> Submitting -> Settled`, and back to
/// `Submitting` on the next valid submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Settled(Outcome),
}

/// Everything the login page renders.
///
/// Transitions take `&self` and return the next state; the page keeps the
/// current value in a signal and re-renders from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub form: FormState,
    pub errors: ErrorMap,
    pub status: SubmissionStatus,
    pub phase: Phase,
}

impl LoginState {
    #[must_use]
    pub fn with_email(&self, email: impl Into<String>) -> Self {
        let mut next = self.edited(Field::Email);
        next.form.email = email.into();
        next
    }

    #[must_use]
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        let mut next = self.edited(Field::Password);
        next.form.password = password.into();
        next
    }

    #[must_use]
    pub fn with_remember(&self, remember: bool) -> Self {
        let mut next = self.edited(Field::Remember);
        next.form.remember = remember;
        next
    }

    // Editing a field clears only its own error; no revalidation.
    fn edited(&self, field: Field) -> Self {
        let mut next = self.clone();
        next.errors.clear(field);
        next
    }

    /// Validate and, if clean, enter `Submitting`.
    ///
    /// Returns the payload to send, or `None` when the form has errors or a
    /// submission is already in flight.
    #[must_use]
    pub fn begin_submit(&self) -> (Self, Option<LoginRequest>) {
        if self.phase == Phase::Submitting {
            return (self.clone(), None);
        }

        let mut next = self.clone();
        next.errors = validate(&self.form);
        if !next.errors.is_empty() {
            return (next, None);
        }

        next.phase = Phase::Submitting;
        next.status = SubmissionStatus { loading: true, message: String::new() };
        let request = next.form.to_request();
        (next, Some(request))
    }

    /// Apply the submission result. Ignored unless `Submitting`.
    #[must_use]
    pub fn settle(&self, result: Result<String, SubmitError>) -> Self {
        if self.phase != Phase::Submitting {
            return self.clone();
        }

        let mut next = self.clone();
        let (outcome, message) = match result {
            Ok(message) => (Outcome::Success, message),
            Err(_) => (Outcome::Failure, FAILURE_MESSAGE.to_owned()),
        };
        next.phase = Phase::Settled(outcome);
        next.status = SubmissionStatus { loading: false, message };
        next
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn submit_disabled(&self) -> bool {
        self.status.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.loading { "Signing in…" } else { "Sign in" }
    }
}
