//! Fetching quotes and avoiding repeats.

pub mod fetcher;
pub mod resolver;
