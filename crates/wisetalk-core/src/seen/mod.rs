//! Persisted record of quotes already shown.

pub mod store;
