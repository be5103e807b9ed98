//! Fixed-width field conversion
//!
//! CTAB fields are column slices that may be entirely blank, blank-padded or
//! right-aligned. Conversion trims before parsing; whether an all-blank field
//! reads as zero or as an error depends on the caller.

use crate::error::{IoError, IoResult};
use std::str::FromStr;

/// Parse a fixed-width decimal integer.
///
/// An all-whitespace field is 0 when `accept_spaces` is set and an error
/// otherwise; anything else is parsed after trimming.
pub fn to_int(field: &str, accept_spaces: bool) -> IoResult<i32> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return if accept_spaces {
            Ok(0)
        } else {
            Err(IoError::bad_field(field, "integer"))
        };
    }
    trimmed
        .parse()
        .map_err(|_| IoError::bad_field(field, "integer"))
}

/// Parse a fixed-width real number; same blank-field handling as [`to_int`].
pub fn to_double(field: &str, accept_spaces: bool) -> IoResult<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return if accept_spaces {
            Ok(0.0)
        } else {
            Err(IoError::bad_field(field, "real number"))
        };
    }
    trimmed
        .parse()
        .map_err(|_| IoError::bad_field(field, "real number"))
}

/// Trim both sides, then parse strictly; an all-whitespace field yields the
/// type's default (zero for numerics) only when `accept_spaces` is set.
pub fn strip_and_cast<T>(field: &str, accept_spaces: bool) -> IoResult<T>
where
    T: FromStr + Default,
{
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return if accept_spaces {
            Ok(T::default())
        } else {
            Err(IoError::bad_field(field, "number"))
        };
    }
    trimmed
        .parse()
        .map_err(|_| IoError::bad_field(field, "number"))
}
