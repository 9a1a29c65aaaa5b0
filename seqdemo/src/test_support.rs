//! Test-only helpers for capturing harness output.

use crate::harness::{DEFAULT_DIVIDER_WIDTH, Harness};

/// Harness writing into an in-memory buffer.
pub fn capture() -> Harness<Vec<u8>> {
    Harness::new(Vec::new(), DEFAULT_DIVIDER_WIDTH)
}

/// Everything the harness has written so far.
pub fn output_of(harness: Harness<Vec<u8>>) -> String {
    String::from_utf8(harness.into_inner()).expect("harness output is utf-8")
}
