//! Infrastructure layer for WiseTalk.
//!
//! Contains implementations of the ports defined in `wisetalk-core`:
//! SQLite key-value storage, the webhook quote fetcher, plus config loading
//! and data directory resolution.

pub mod config;
pub mod filesystem;
pub mod sqlite;
pub mod webhook;
