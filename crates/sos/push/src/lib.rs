//! SOS Push Delivery
//!
//! Multicast push delivery for SOS notifications.

mod apns;
mod traits;

pub use apns::*;
pub use traits::*;
