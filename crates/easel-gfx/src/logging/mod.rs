//! Logging setup.
//!
//! The library itself only emits through the `log` facade:
//! - `debug`: image load requests and completions
//! - `trace`: draws skipped because an image is not ready yet
//! - `warn`: image loads that failed and will never complete
//! - `error`: a rotation scope that could not be restored
//!
//! Hosts that have no logger of their own can install `env_logger` here.

mod init;

pub use init::{init_logging, LoggingConfig};
