//! Shared domain types for WiseTalk.
//!
//! This crate contains the core domain types used across the WiseTalk client:
//! Quote, SeenSet, transcript entries, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod quote;
pub mod seen;
pub mod storage;
pub mod transcript;
