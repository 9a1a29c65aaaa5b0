//! The demonstration script: every operation, section by section.

use std::io::Write;

use anyhow::Result;

use crate::core::capabilities::{Capabilities, CopyOp};
use crate::core::ops;
use crate::core::value::{Value, strs};
use crate::harness::Harness;

fn len_of(value: &Value) -> usize {
    value.to_display_string().chars().count()
}

/// Run every section in order.
pub fn run_script<W: Write>(harness: &mut Harness<W>, caps: &Capabilities) -> Result<()> {
    mutating_section(harness)?;
    non_mutating_section(harness)?;
    copy_section(harness, caps)?;
    done_section(harness)
}

pub fn mutating_section<W: Write>(h: &mut Harness<W>) -> Result<()> {
    h.section("Mutating methods")?;

    h.run_seq(
        "push(...items)",
        || strs(&["a", "b"]),
        |a| Ok(ops::push(a, strs(&["c", "d"]))),
    )?;
    h.run_seq("pop()", || strs(&["a", "b", "c"]), |a| Ok(ops::pop(a)))?;

    h.run_seq(
        "unshift(...items)",
        || strs(&["c", "d"]),
        |a| Ok(ops::unshift(a, strs(&["a", "b"]))),
    )?;
    h.run_seq("shift()", || strs(&["a", "b", "c"]), |a| Ok(ops::shift(a)))?;

    h.run_seq(
        "splice(start, deleteCount, ...items)",
        || strs(&["a", "b", "c", "d"]),
        |a| Ok(ops::splice(a, 1, 2, strs(&["X"]))),
    )?;

    h.run_seq("reverse()", || strs(&["a", "b", "c"]), |a| Ok(ops::reverse(a)))?;

    h.run_seq(
        "sort(compareFn?) (default is string order)",
        || strs(&["b", "a", "c"]),
        |a| Ok(ops::sort(a)),
    )?;
    // Reverse alphabetical order; still sorts in place.
    h.run_seq(
        "sort(compareFn) (custom, still mutates)",
        || strs(&["a", "b", "c"]),
        |a| {
            Ok(ops::sort_by(a, |x, y| {
                y.to_display_string().cmp(&x.to_display_string())
            }))
        },
    )?;

    h.run_seq(
        "fill(value, start?, end?)",
        || strs(&["a", "b", "c", "d"]),
        |a| Ok(ops::fill(a, Value::from("_"), 1, Some(3))),
    )?;

    h.run_seq(
        "copyWithin(target, start?, end?)",
        || strs(&["a", "b", "c", "d", "e"]),
        |a| Ok(ops::copy_within(a, 0, 3, None)),
    )?;
    Ok(())
}

pub fn non_mutating_section<W: Write>(h: &mut Harness<W>) -> Result<()> {
    h.section("Non-mutating methods")?;

    // forEach returns nothing; report the side effect alongside it.
    h.run_seq(
        "forEach(callback)",
        || strs(&["a", "b", "c"]),
        |a| {
            let mut seen = Vec::new();
            let ret = ops::for_each(a, |item, index| {
                seen.push(Value::Array(vec![Value::from(index), item.clone()]));
            });
            Ok(Value::Object(vec![
                ("forEachReturnValue".to_string(), ret),
                ("sideEffect".to_string(), Value::Array(seen)),
            ]))
        },
    )?;

    h.run_seq(
        "map(callback)",
        || strs(&["a", "b", "c"]),
        |a| {
            Ok(ops::map(a, |s| {
                Value::from(s.to_display_string().to_uppercase())
            }))
        },
    )?;

    h.run_seq(
        "flat(depth?)",
        || {
            vec![
                Value::from("a"),
                Value::Array(vec![Value::from("b"), Value::Array(strs(&["c"]))]),
            ]
        },
        |a| Ok(ops::flat(a, 2)),
    )?;
    h.run_seq(
        "flatMap(callback)",
        || strs(&["a", "b", "c"]),
        |a| Ok(ops::flat_map(a, |x| Value::Array(vec![x.clone(), x.clone()]))),
    )?;

    h.run_seq(
        "filter(predicate)",
        || strs(&["a", "bb", "c", "dd"]),
        |a| Ok(ops::filter(a, |s| len_of(s) == 2)),
    )?;

    h.run_seq(
        "reduce(reducer, initialValue)",
        || strs(&["a", "b", "c"]),
        |a| Ok(ops::reduce(a, Value::from(""), append_str)),
    )?;
    h.run_seq(
        "reduceRight(reducer, initialValue)",
        || strs(&["a", "b", "c"]),
        |a| Ok(ops::reduce_right(a, Value::from(""), append_str)),
    )?;

    h.run_seq(
        "find(predicate)",
        || strs(&["a", "bb", "c", "dd"]),
        |a| Ok(ops::find(a, |x| len_of(x) == 2)),
    )?;
    h.run_seq(
        "findIndex(predicate)",
        || strs(&["a", "bb", "c"]),
        |a| Ok(ops::find_index(a, |x| len_of(x) == 2)),
    )?;

    h.run_seq(
        "includes(value)",
        || strs(&["a", "b", "c"]),
        |a| Ok(ops::includes(a, &Value::from("b"))),
    )?;
    h.run_seq(
        "indexOf(value)",
        || strs(&["a", "b", "c"]),
        |a| Ok(ops::index_of(a, &Value::from("b"))),
    )?;

    // includes uses same-value-zero and finds NaN; indexOf uses strict
    // equality and does not.
    h.run_seq(
        "includes(value) (SameValueZero, finds NaN)",
        || vec![Value::Number(f64::NAN)],
        |a| Ok(ops::includes(a, &Value::Number(f64::NAN))),
    )?;
    h.run_seq(
        "indexOf(value) (===, does not find NaN)",
        || vec![Value::Number(f64::NAN)],
        |a| Ok(ops::index_of(a, &Value::Number(f64::NAN))),
    )?;

    h.run_seq(
        "some(predicate)",
        || strs(&["a", "bb", "c"]),
        |a| Ok(ops::some(a, |x| len_of(x) == 2)),
    )?;
    h.run_seq(
        "every(predicate)",
        || strs(&["aa", "bb", "cc"]),
        |a| Ok(ops::every(a, |x| len_of(x) == 2)),
    )?;

    h.run_seq(
        "concat(...arraysOrValues)",
        || strs(&["a", "b"]),
        |a| {
            let args = vec![Value::Array(strs(&["c", "d"])), Value::from("e")];
            Ok(ops::concat(a, args))
        },
    )?;

    h.run_seq(
        "join(separator?)",
        || strs(&["a", "b", "c"]),
        |a| Ok(ops::join(a, "-")),
    )?;
    Ok(())
}

/// Copy-producing operations, each gated on the startup probe.
pub fn copy_section<W: Write>(h: &mut Harness<W>, caps: &Capabilities) -> Result<()> {
    h.section("Non-mutating copy methods (feature detected)")?;
    h.line(&caps.summary_line())?;
    h.blank()?;

    if caps.supports(CopyOp::ToSorted) {
        h.run_seq(
            "toSorted(compareFn?)",
            || strs(&["b", "a", "c"]),
            |a| Ok(ops::to_sorted(a)),
        )?;
    } else {
        h.unsupported(CopyOp::ToSorted)?;
    }

    if caps.supports(CopyOp::ToReversed) {
        h.run_seq(
            "toReversed()",
            || strs(&["a", "b", "c"]),
            |a| Ok(ops::to_reversed(a)),
        )?;
    } else {
        h.unsupported(CopyOp::ToReversed)?;
    }

    if caps.supports(CopyOp::ToSpliced) {
        h.run_seq(
            "toSpliced(start, deleteCount, ...items)",
            || strs(&["a", "b", "c", "d"]),
            |a| Ok(ops::to_spliced(a, 1, 2, strs(&["X"]))),
        )?;
    } else {
        h.unsupported(CopyOp::ToSpliced)?;
    }

    if caps.supports(CopyOp::With) {
        h.run_seq(
            "with(index, value)",
            || strs(&["a", "b", "c"]),
            |a| ops::with(a, 1, Value::from("B")),
        )?;
    } else {
        h.unsupported(CopyOp::With)?;
    }
    Ok(())
}

pub fn done_section<W: Write>(h: &mut Harness<W>) -> Result<()> {
    h.section("Done")?;
    h.line(
        "Tip: compare the 'before'/'after' lines to see which methods mutate the original sequence.",
    )
}

fn append_str(acc: Value, item: &Value) -> Value {
    Value::from(acc.to_display_string() + &item.to_display_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capabilities::RuntimeProfile;
    use crate::test_support::{capture, output_of};

    fn block(output: &str, label: &str) -> Vec<String> {
        let lines: Vec<&str> = output.lines().collect();
        let start = lines
            .iter()
            .position(|line| *line == label)
            .unwrap_or_else(|| panic!("missing block {label}"));
        lines[start..]
            .iter()
            .take_while(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect()
    }

    fn full_output(runtime: &RuntimeProfile) -> String {
        let mut harness = capture();
        run_script(&mut harness, &Capabilities::probe(runtime)).expect("script");
        output_of(harness)
    }

    #[test]
    fn sections_appear_in_order() {
        let output = full_output(&RuntimeProfile::default());
        let positions: Vec<usize> = [
            "Mutating methods",
            "Non-mutating methods",
            "Non-mutating copy methods (feature detected)",
            "Done",
        ]
        .iter()
        .map(|title| output.find(&format!("\n{title}\n")).expect(title))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(output.starts_with(&"-".repeat(80)));
        assert!(output.ends_with("mutate the original sequence.\n"));
    }

    #[test]
    fn splice_block_matches_expected_report() {
        let output = full_output(&RuntimeProfile::default());
        assert_eq!(
            block(&output, "splice(start, deleteCount, ...items)"),
            vec![
                "splice(start, deleteCount, ...items)",
                "  before: [\"a\",\"b\",\"c\",\"d\"]",
                "  after : [\"a\",\"X\",\"d\"]",
                "  result: [\"b\",\"c\"]",
                "  mutated original? true",
            ]
        );
    }

    #[test]
    fn for_each_reports_side_effect_record() {
        let output = full_output(&RuntimeProfile::default());
        let lines = block(&output, "forEach(callback)");
        assert_eq!(
            lines[3],
            "  result: {\"sideEffect\":[[0,\"a\"],[1,\"b\"],[2,\"c\"]]}"
        );
        assert_eq!(lines[4], "  mutated original? false");
    }

    #[test]
    fn nan_pair_shows_asymmetry() {
        let output = full_output(&RuntimeProfile::default());
        let includes = block(&output, "includes(value) (SameValueZero, finds NaN)");
        assert_eq!(includes[1], "  before: [null]");
        assert_eq!(includes[3], "  result: true");
        let index_of = block(&output, "indexOf(value) (===, does not find NaN)");
        assert_eq!(index_of[3], "  result: -1");
    }

    #[test]
    fn copy_methods_do_not_mutate() {
        let output = full_output(&RuntimeProfile::default());
        let with = block(&output, "with(index, value)");
        assert_eq!(with[3], "  result: [\"a\",\"B\",\"c\"]");
        assert_eq!(with[4], "  mutated original? false");
        let to_sorted = block(&output, "toSorted(compareFn?)");
        assert_eq!(to_sorted[2], "  after : [\"b\",\"a\",\"c\"]");
    }

    #[test]
    fn unsupported_copy_op_is_replaced_by_notice() {
        let runtime = RuntimeProfile::without([CopyOp::ToReversed]);
        let mut harness = capture();
        copy_section(&mut harness, &Capabilities::probe(&runtime)).expect("copy section");
        let output = output_of(harness);
        assert!(output.contains(
            "Runtime supports: toSorted=true, toReversed=false, toSpliced=true, with=true\n\n"
        ));
        assert!(output.contains("toReversed not supported in this runtime.\n\ntoSpliced("));
        assert!(!output.contains("toReversed()"));
    }

    #[test]
    fn runtime_without_copy_ops_still_completes() {
        let output = full_output(&RuntimeProfile::without(CopyOp::ALL));
        for op in CopyOp::ALL {
            assert_eq!(
                output.matches(&format!("{op} not supported in this runtime.")).count(),
                1
            );
        }
        assert!(output.contains("\nDone\n"));
    }
}
