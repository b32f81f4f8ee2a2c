//! Client-side login form validation.
//!
//! Pure functions over [`FormState`]; no I/O, no signals.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::state::login::{Field, FormState};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";

// local@domain.tld, no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, &'static str>);

impl ErrorMap {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Drop one entry, leaving the others in place.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Basic shape check; deliverability is the server's problem.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate every field and return a fresh error map.
///
/// Values are checked as typed: whitespace counts as present.
pub fn validate(form: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::default();
    if form.email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
    if form.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    }
    errors
}
