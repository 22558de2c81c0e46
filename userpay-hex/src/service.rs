//! Lookup Application Service
//!
//! Produces the response bodies for the demo endpoints. Contains NO
//! infrastructure logic - the HTTP adapter extracts the inputs and hands
//! them here.

use userpay_types::UserId;

/// Rendering of an absent `filter` query parameter.
///
/// The published contract shows a missing filter as the literal text
/// `undefined`, so clients see the same body shape either way.
const ABSENT_FILTER: &str = "undefined";

/// Application service for the demo lookups.
///
/// Stateless: every lookup is a pure function of its inputs, which keeps
/// all routes idempotent.
#[derive(Debug, Clone, Default)]
pub struct LookupService;

impl LookupService {
    /// Creates a new lookup service.
    pub fn new() -> Self {
        Self
    }

    /// Greeting served at the application root.
    pub fn greeting(&self) -> &'static str {
        "Hello World"
    }

    /// Index line served for the user collection.
    pub fn users_index(&self) -> &'static str {
        "Users index"
    }

    /// Describes a single user by echoing its identifier.
    pub fn user_summary(&self, id: &UserId) -> String {
        format!("User ID: {}", id)
    }

    /// Describes a payment lookup by echoing the user ID and filter.
    ///
    /// `filter` is unconstrained; an absent filter renders as the literal
    /// text `undefined`.
    pub fn payment_summary(&self, id: &UserId, filter: Option<&str>) -> String {
        format!(
            "User ID: {}, Filter: {}",
            id,
            filter.unwrap_or(ABSENT_FILTER)
        )
    }
}
