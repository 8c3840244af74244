use thiserror::Error;

/// Record construction and parse errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A configuration step's value is outside the field's valid range.
    /// Recovered locally: the step is skipped and the record keeps the
    /// field's prior value.
    #[error("{field} value {value} is out of range 0..={max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    /// A byte parse was given a buffer that is not exactly one record long.
    #[error("expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },
}
