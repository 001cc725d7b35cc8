//! Web page acquisition and content extraction.
//!
//! - Page fetch trait and reqwest-backed implementation (`fetch`)
//! - HTML-to-text content extraction (`extract`)
//!
//! The fetcher hands raw bytes to the extractor unmodified; everything that
//! decides what "content" means lives in [`extract`].

pub mod extract;
pub mod fetch;
