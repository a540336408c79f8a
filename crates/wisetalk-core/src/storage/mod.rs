//! Storage abstractions for WiseTalk.
//!
//! Implementations live in wisetalk-infra.

pub mod kv_store;
