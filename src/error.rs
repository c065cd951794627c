/*
    Errors
*/

use thiserror::Error;

/// Error returned when text cannot be parsed into a clamped number.
///
/// Well-formed numbers that fall outside the representable range are
/// not errors: they saturate to the type's boundary value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    /// The input was empty.
    #[error("cannot parse number from empty string")]
    Empty,
    /// The input contained something other than a number.
    #[error("invalid digit found in `{0}`")]
    InvalidDigit(String),
}

/// Error returned by [`BitReader`](crate::bits::BitReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitsError {
    /// The stream ended before a complete value could be read.
    #[error("unexpected end of bit stream: needed {needed} bits, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },
}
