//! Network layer: wire types and REST helpers for the prompt API.

pub mod api;
pub mod types;
