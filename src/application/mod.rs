//! Application layer: validation and tracking number issuance.

pub mod services;
