//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions so it can be tested without a
//! browser; pages wrap it in signals.

pub mod detail;
pub mod favorites;
