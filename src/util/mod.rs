//! Pure formatting helpers and browser export utilities.

pub mod export;
pub mod format;
