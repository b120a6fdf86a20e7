//! Error types

/// Errors raised while setting up a visualization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range, nothing was constructed
    #[error("invalid configuration: `{field}` must be positive, got {value}")]
    InvalidConfiguration { field: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that `value` is positive, returning it as a `usize`
pub fn positive(field: &'static str, value: i64) -> Result<usize> {
    match usize::try_from(value) {
        Ok(result) if result > 0 => Ok(result),
        _ => Err(Error::InvalidConfiguration { field, value }),
    }
}
