//! SOS Service Layer
//!
//! Authorization, validation, multicast dispatch and result aggregation.

mod auth;
mod dispatcher;
mod log;
mod traits;

pub use auth::ApiKeyAuthorizer;
pub use dispatcher::{DEFAULT_PROVIDER_TIMEOUT, SosDispatcher};
pub use log::{OperatorLog, ParseSeverityError, Severity, TracingLog};
pub use traits::*;
