//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form pieces. They hold no state of
//! their own beyond what callers pass in.

pub mod field;
pub mod header;
