//! Ports consumed by the use cases
//!
//! Implementations live in the infrastructure layer.

pub mod notifier;
pub mod stores;
