//! Logger bootstrap for hosts that do not install their own `log` backend.
//!
//! The shim itself only talks to the `log` facade.

mod init;

pub use init::{ENV_LOG, LoggingConfig, init_logging};
