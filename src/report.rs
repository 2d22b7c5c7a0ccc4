use std::fmt::Display;
use std::io::{self, Write};

use crate::bench::BenchmarkResult;

/// `"<prefix>: a b c"`, values separated by single spaces.
pub fn format_sequence<T: Display>(prefix: &str, values: &[T]) -> String {
    let joined = values
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("{prefix}: {joined}")
}

pub fn format_timing<T>(result: &BenchmarkResult<T>) -> String {
    format!(
        "Time to process a range of {} elements with {} : {:.5} us",
        result.len,
        result.label,
        result.elapsed_micros()
    )
}

/// Writes the full report. The `After:` line comes from `first`, `second` only contributes its
/// timing since both results hold the same values.
pub fn write_report<W: Write, T: Display>(
    out: &mut W,
    before: &[T],
    first: &BenchmarkResult<T>,
    second: &BenchmarkResult<T>,
) -> io::Result<()> {
    writeln!(out, "{}", format_sequence("Before", before))?;
    writeln!(out, "{}", format_sequence("After", &first.sorted))?;
    writeln!(out, "{}", format_timing(first))?;
    writeln!(out, "{}", format_timing(second))?;
    out.flush()
}
