//! Merge sort benchmark over interchangeable sequence containers.
//!
//! The same recursive merge sort runs once over a contiguous `Vec` and once over a ring-buffer
//! `VecDeque`, both accessed purely by index through [`sequence::Sequence`].

use std::collections::VecDeque;
use std::io::Write;

pub mod bench;
pub mod config;
pub mod error;
pub mod merge_sort;
pub mod patterns;
pub mod report;
pub mod sequence;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};
pub use sequence::Sequence;

/// Validates `args`, sorts them with both containers one after the other and writes the report.
///
/// Nothing is written to `out` unless validation succeeded and both containers agree.
pub fn run<I, S, W>(args: I, config: &Config, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let values = validate::parse_args(args)?;
    log::debug!("validated {} values", values.len());

    let vec_result = bench::run_benchmark::<Vec<i32>>(&values, config.cutover);
    let deque_result = bench::run_benchmark::<VecDeque<i32>>(&values, config.cutover);

    if vec_result.sorted != deque_result.sorted {
        return Err(Error::Mismatch);
    }

    report::write_report(out, &values, &vec_result, &deque_result)?;

    Ok(())
}
