//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain values with transition methods. Pages hold them in
//! `RwSignal`s and render from the current value.

pub mod login;
