//! Utility modules
//!
//! Provides logging setup for the frontend and the helper.

pub mod logging;

pub use logging::{init_helper_logging, init_logging};
