//! Business logic and port definitions for WiseTalk.
//!
//! This crate defines the "ports" (storage, fetcher and view traits) that the
//! infrastructure and CLI layers implement. It depends only on
//! `wisetalk-types` -- never on `wisetalk-infra` or any database/IO crate.

pub mod chat;
pub mod quote;
pub mod seen;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
