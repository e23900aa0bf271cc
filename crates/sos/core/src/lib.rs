//! SOS Core Types
//!
//! Request, provider message, and result types for SOS push dispatch,
//! plus validation of untyped caller payloads.

mod error;
mod identity;
mod message;
mod request;
mod result;

pub use error::*;
pub use identity::*;
pub use message::*;
pub use request::*;
pub use result::*;
