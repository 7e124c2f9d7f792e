//! Squared - a C-ABI squaring routine and its test harness.
//!
//! The crate exports `squared_`, which squares a double passed by reference
//! using the Fortran calling convention, so C, C++ and Fortran code can link
//! against it. A small CLI wraps the same routine.
//!
//! # Architecture
//!
//! - **squaring**: Safe Rust core
//! - **ffi**: The exported `squared_` symbol
//! - **operand**: Validated input values
//! - **report**: Serializable input/output records
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod config;
pub mod error;
pub mod ffi;
pub mod operand;
pub mod report;
pub mod squaring;

pub use config::{Config, OutputFormat};
pub use error::{ConfigError, InputError};
pub use ffi::{squared_, squared_by_ref};
pub use operand::Operand;
pub use report::SquareReport;
pub use squaring::{squared, squared_checked};
