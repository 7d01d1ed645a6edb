//! Shared utilities for the hatvote workspace.

pub mod logging;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
