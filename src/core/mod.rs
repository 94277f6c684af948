//! Core infrastructure module for cardinal-rust.
//!
//! - [`types`]: fundamental data types and policy enumerations
//! - [`constants`]: configuration defaults and environment variable names
//! - [`error`]: error type and `Result` alias
//! - [`traits`]: the `Pool` and `QueryStrategy` abstractions
//! - [`utils`]: logging setup and the random generator wrapper

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
pub mod utils;

pub use constants::*;
pub use error::{CardinalError, Result};
pub use traits::*;
pub use types::*;

/// Initialize the core module: install the logging backend.
pub(crate) fn initialize_core() -> Result<()> {
    if utils::log::init_logging() {
        log::debug!("cardinal-rust {} logging initialized", CARDINAL_RUST_VERSION);
    }
    Ok(())
}
