//! Demo harness: run one operation against a fresh input and print a
//! before/after/result report.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::capabilities::CopyOp;
use crate::core::format::format_value;
use crate::core::value::Value;

/// Default width of the dashed section divider.
pub const DEFAULT_DIVIDER_WIDTH: usize = 80;

/// What a single demo observed.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub before: Value,
    pub after: Value,
    pub result: Value,
    /// `None` when the input is not a sequence (mutation not tracked).
    pub mutated: Option<bool>,
}

/// Writes demo reports and section chrome to `out`.
pub struct Harness<W: Write> {
    out: W,
    divider_width: usize,
}

impl<W: Write> Harness<W> {
    pub fn new(out: W, divider_width: usize) -> Self {
        Self { out, divider_width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn divider(&mut self) -> Result<()> {
        let rule = "-".repeat(self.divider_width);
        self.line(&rule)
    }

    /// Divider, title, divider.
    pub fn section(&mut self, title: &str) -> Result<()> {
        self.divider()?;
        self.line(title)?;
        self.divider()
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("write output line")
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out).context("write blank line")
    }

    /// Notice printed in place of a demo the runtime cannot run.
    pub fn unsupported(&mut self, op: CopyOp) -> Result<()> {
        debug!(op = %op, "skipping unsupported operation");
        self.line(&format!("{op} not supported in this runtime."))?;
        self.blank()
    }

    /// Build a fresh input, apply `operate`, print and return the report.
    ///
    /// Sequence inputs are snapshotted before the operation and compared by
    /// serialized form afterwards. For any other input the "before" line shows
    /// the input as it stands after the operation and no mutation flag is
    /// printed. Errors from `operate` propagate unchanged.
    pub fn run<M, F>(&mut self, label: &str, make_input: M, operate: F) -> Result<DemoReport>
    where
        M: FnOnce() -> Value,
        F: FnOnce(&mut Value) -> Result<Value>,
    {
        debug!(label, "running demo");
        let mut input = make_input();
        let snapshot = input.is_array().then(|| input.clone());

        let result = operate(&mut input)?;

        let mutated = snapshot
            .as_ref()
            .map(|before| before.serialize() != input.serialize());
        let before = snapshot.unwrap_or_else(|| input.clone());

        self.line(label)?;
        self.line(&format!("  before: {}", format_value(&before)))?;
        self.line(&format!("  after : {}", format_value(&input)))?;
        self.line(&format!("  result: {}", format_value(&result)))?;
        if let Some(mutated) = mutated {
            self.line(&format!("  mutated original? {mutated}"))?;
        }
        self.blank()?;

        Ok(DemoReport {
            before,
            after: input,
            result,
            mutated,
        })
    }

    /// [`Harness::run`] for sequence inputs.
    pub fn run_seq<M, F>(&mut self, label: &str, make_input: M, operate: F) -> Result<DemoReport>
    where
        M: FnOnce() -> Vec<Value>,
        F: FnOnce(&mut Vec<Value>) -> Result<Value>,
    {
        self.run(
            label,
            || Value::Array(make_input()),
            |input| {
                let items = input
                    .as_array_mut()
                    .context("sequence demo input is not a sequence")?;
                operate(items)
            },
        )
    }
}
