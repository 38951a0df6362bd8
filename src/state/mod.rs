//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`form`, `prompt`, `notify`, `ui`) so individual
//! components can depend on small focused models. Each struct is plain data;
//! the app provides them as `RwSignal` contexts.

pub mod form;
pub mod notify;
pub mod prompt;
pub mod templates;
pub mod ui;
