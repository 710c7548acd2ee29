//! opdispatch: higher-order dispatch of binary arithmetic operations (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod filter;
pub mod logging;
pub mod models;
pub mod ops;
pub mod output;

pub use models::{DispatchError, Number};
pub use ops::{Operation, add, execute, subtract};
