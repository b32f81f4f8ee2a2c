//! Networking modules for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the submission flow and the backend seam, `types` defines the
//! wire schema and transport errors.

pub mod auth;
pub mod types;
