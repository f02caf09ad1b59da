//! Authentication primitives.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//!
//! Token handling lives in `fintrack-shared`; this module only covers the
//! credential material itself.

mod password;

pub use password::{PasswordError, hash_password, verify_password};
