//! SOS Server
//!
//! Configuration for the SOS dispatch server binary.

pub mod config;

pub use config::{ApnsConfig, Config, ConfigError};
