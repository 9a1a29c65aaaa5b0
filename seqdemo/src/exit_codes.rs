//! Stable exit codes for the demo binary.

/// Every demonstration ran to completion.
pub const OK: i32 = 0;
/// A demonstration faulted, or the config/arguments were invalid.
pub const FAULT: i32 = 1;
