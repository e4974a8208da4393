//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `feed`) so individual components
//! can depend on small focused models. Each is provided as an
//! `RwSignal` context by the app root.

pub mod feed;
pub mod session;
