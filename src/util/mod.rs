//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so pages stay thin and the logic is testable
//! without a browser.

pub mod validation;
