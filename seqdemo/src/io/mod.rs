//! I/O helpers for the demo binary.

pub mod config;
