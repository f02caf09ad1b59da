//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, calculations, and document rendering live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing
//! - `summary` - Transaction aggregation (totals, category breakdown, monthly series)
//! - `export` - Spreadsheet and PDF document renderers

pub mod auth;
pub mod export;
pub mod summary;
