//! Runtime capability probing for copy-producing operations.
//!
//! The probe runs once at startup; the script consumes the resulting
//! [`Capabilities`] record instead of checking availability at each call site.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{Error, bail};
use serde::Deserialize;
use tracing::debug;

/// Copy-producing operations whose availability varies by runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CopyOp {
    ToSorted,
    ToReversed,
    ToSpliced,
    With,
}

impl CopyOp {
    pub const ALL: [CopyOp; 4] = [
        CopyOp::ToSorted,
        CopyOp::ToReversed,
        CopyOp::ToSpliced,
        CopyOp::With,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CopyOp::ToSorted => "toSorted",
            CopyOp::ToReversed => "toReversed",
            CopyOp::ToSpliced => "toSpliced",
            CopyOp::With => "with",
        }
    }
}

impl fmt::Display for CopyOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CopyOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match CopyOp::ALL.into_iter().find(|op| op.name() == s) {
            Some(op) => Ok(op),
            None => bail!(
                "unknown copy operation '{s}' (expected one of: toSorted, toReversed, toSpliced, with)"
            ),
        }
    }
}

/// The emulated runtime: which copy operations its standard library lacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeProfile {
    missing: BTreeSet<CopyOp>,
}

impl RuntimeProfile {
    /// A runtime lacking exactly `missing`.
    pub fn without<I: IntoIterator<Item = CopyOp>>(missing: I) -> Self {
        Self {
            missing: missing.into_iter().collect(),
        }
    }

    pub fn provides(&self, op: CopyOp) -> bool {
        !self.missing.contains(&op)
    }
}

/// Result of the startup probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub to_sorted: bool,
    pub to_reversed: bool,
    pub to_spliced: bool,
    pub with: bool,
}

impl Capabilities {
    pub fn probe(runtime: &RuntimeProfile) -> Self {
        let caps = Self {
            to_sorted: runtime.provides(CopyOp::ToSorted),
            to_reversed: runtime.provides(CopyOp::ToReversed),
            to_spliced: runtime.provides(CopyOp::ToSpliced),
            with: runtime.provides(CopyOp::With),
        };
        debug!(?caps, "probed runtime capabilities");
        caps
    }

    pub fn supports(&self, op: CopyOp) -> bool {
        match op {
            CopyOp::ToSorted => self.to_sorted,
            CopyOp::ToReversed => self.to_reversed,
            CopyOp::ToSpliced => self.to_spliced,
            CopyOp::With => self.with,
        }
    }

    /// `Runtime supports: toSorted=true, toReversed=true, ...`
    pub fn summary_line(&self) -> String {
        let parts: Vec<String> = CopyOp::ALL
            .iter()
            .map(|op| format!("{}={}", op, self.supports(*op)))
            .collect();
        format!("Runtime supports: {}", parts.join(", "))
    }
}
