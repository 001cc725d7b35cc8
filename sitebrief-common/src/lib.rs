//! Common types shared across Sitebrief crates.
//!
//! This crate defines the shared error taxonomy and the observability helpers
//! used by every binary and integration test in the workspace. It is
//! intentionally lightweight so that all crates can depend on it without
//! introducing heavy transitive costs.
//!
//! # Overview
//!
//! - [`SitebriefError`] and [`Result`]: Shared error handling
//! - [`observability`]: Centralised tracing/logging initialisation
pub mod observability;

/// Error types used across the Sitebrief system.
///
/// Every error surfaces directly to the caller; nothing in the pipeline
/// retries or produces a partial result.
#[derive(thiserror::Error, Debug)]
pub enum SitebriefError {
    /// Network or HTTP failure while retrieving a page.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The HTML byte stream could not be parsed at all. Malformed but
    /// parseable markup degrades gracefully and never produces this.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A summarization backend returned a non-success status or an
    /// unusable response.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`SitebriefError`].
pub type Result<T> = std::result::Result<T, SitebriefError>;
