//! Shared utilities for tracking number derivation.

pub mod base36;
pub mod tracking_code;
