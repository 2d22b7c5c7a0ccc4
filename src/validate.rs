use thiserror::Error;

/// Why a set of raw arguments was rejected.
///
/// The binary collapses all of these into a single generic failure line; the variants exist so
/// that callers and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no numbers given")]
    NoArguments,

    #[error("'{token}' is not a non-negative decimal integer")]
    InvalidNumber { token: String },

    #[error("'{token}' does not fit into a 32-bit signed integer")]
    OutOfRange { token: String },
}

/// Parses every argument into a non-negative integer, preserving order.
///
/// Fails on the first bad token, nothing is returned for the ones before it.
pub fn parse_args<I, S>(args: I) -> Result<Vec<i32>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values = args
        .into_iter()
        .map(|arg| parse_token(arg.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ValidationError::NoArguments);
    }

    Ok(values)
}

/// Accepts only ASCII digits. Signs, whitespace and the empty string are rejected.
pub fn parse_token(token: &str) -> Result<i32, ValidationError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidNumber {
            token: token.to_owned(),
        });
    }

    // Only digits are left, so the sole way for this to fail is overflow.
    token
        .parse::<i32>()
        .map_err(|_| ValidationError::OutOfRange {
            token: token.to_owned(),
        })
}
