//! # Userpay Types
//!
//! Shared types for the userpay demo API. This crate has ZERO external IO
//! dependencies - only the data structures that cross the API boundary.
//!
//! ## Architecture
//!
//! This crate is the innermost layer shared by the server, the client SDK,
//! and the CLI:
//! - `domain` - Identifiers captured from the URL
//! - `dto` - Query-string payloads

pub mod domain;
pub mod dto;

// Re-export commonly used types
pub use domain::UserId;
pub use dto::PaymentQuery;
