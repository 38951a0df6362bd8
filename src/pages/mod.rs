//! Routed pages, one per backend web route.

pub mod builder;
pub mod history;
pub mod stats;
