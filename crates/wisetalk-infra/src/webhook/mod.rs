//! Webhook-backed quote source.

pub mod client;

pub use client::WebhookQuoteFetcher;
