//! Deterministic, pure logic shared by the demo.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod capabilities;
pub mod format;
pub mod ops;
pub mod value;
