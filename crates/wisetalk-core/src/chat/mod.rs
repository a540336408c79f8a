//! Chat interaction: the view port, the per-run session context and the
//! controller that wires a trigger through the quote pipeline.

pub mod controller;
pub mod session;
pub mod view;
