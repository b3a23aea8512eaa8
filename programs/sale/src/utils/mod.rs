//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `assertions`: Common validation checks (ownership, signer, etc.)
//! - `authority`: Administrator validation
//! - `merkle`: Allowlist proof verification and tree construction

pub mod assertions;
pub mod authority;
pub mod merkle;

// Re-export the processor helpers for easy access
pub use assertions::*;
pub use authority::*;
