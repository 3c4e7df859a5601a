//! Logging setup.
//!
//! The crate itself only emits through the `log` facade; binaries and tests
//! that want to see those records call [`init_logging`] once.

mod init;

pub use init::{init_logging, LoggingConfig};
