use thiserror::Error;

/// Reasons a [`GeneratorBuilder`](super::GeneratorBuilder) refuses to build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("count {count} is below the minimum of 1")]
    CountBelowMinimum { count: u64 },

    #[error("cannot generate without owner codes")]
    NoOwnerCodes,

    #[error(
        "count {count} exceeds the capacity of {capacity} unique numbers \
         ({owners} owner code(s) x {per_owner} serial numbers each)"
    )]
    CapacityExceeded {
        count: u64,
        owners: usize,
        per_owner: u64,
        capacity: u64,
    },

    #[error("{field} serial number {value} is outside 0..=999999")]
    SerialOutOfRange { field: &'static str, value: u32 },
}

/// Reasons a string is not a well-formed container number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 10 or 11 characters, got {len}")]
    Length { len: usize },

    #[error("owner code '{0}' must be exactly 3 uppercase letters")]
    OwnerCode(String),

    #[error("equipment category '{0}' must be one of U, J, Z")]
    Category(char),

    #[error("serial number '{0}' must be exactly 6 digits")]
    Serial(String),

    #[error("check digit '{0}' must be a single digit")]
    CheckDigit(char),

    #[error("check digit is missing")]
    MissingCheckDigit,
}
