//! Transaction summary aggregation.
//!
//! This module provides pure business logic for deriving per-user analytics
//! from a transaction history:
//! - Income/expense totals and balance
//! - Per-category expense breakdown
//! - Monthly income/expense series (last 12 months)
//!
//! All output is derived and transient; nothing here persists.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::summarize;
pub use types::*;
