//! The validator node shell.
//!
//! Wraps the deterministic core with the operational pieces a deployment
//! needs: TOML configuration, structured logging, and the block-by-block
//! lifecycle. Consensus and transport integrate on top of
//! [`ValidatorCore`].

pub mod config;
pub mod error;
pub mod logging;
pub mod validator;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use validator::ValidatorCore;
