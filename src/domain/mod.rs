//! Domain layer containing the shipment model and time source.
//!
//! The domain layer has no dependencies on the HTTP or configuration
//! layers. It defines the raw and validated shipment parameter shapes
//! and the clock abstraction the generator draws wall-clock entropy from.
//!
//! - [`shipment`] - Raw request parameters and the validated value object
//! - [`clock`] - `Clock` trait and the system implementation

pub mod clock;
pub mod shipment;
