//! Console demonstration of built-in sequence operations.
//!
//! Each operation runs against a freshly built input and the harness prints
//! the input before and after, the operation's result, and whether the input
//! was mutated.
//!
//! - **[`core`]**: Pure logic (value model, formatter, operations, capability
//!   probe). No I/O.
//! - **[`harness`]**: Runs one demo and writes its report to any `Write` sink.
//! - **[`script`]**: The demonstration sequence, section by section.
//! - **[`io`]**: Optional configuration file.

pub mod core;
pub mod exit_codes;
pub mod harness;
pub mod io;
pub mod logging;
pub mod script;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
