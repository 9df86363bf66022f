//! Mastermind code representation
//!
//! A Code is an immutable, fixed-length sequence of symbols drawn from a `ValueRange`.

use super::CodeSpace;
use std::fmt;

/// An immutable Mastermind code
///
/// Equality, ordering and hashing all derive from the value sequence, so codes
/// compare lexicographically and can be used as set members or map keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    values: Box<[u8]>,
}

/// Error type for invalid codes and code spaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The code does not have the configured number of symbols
    InvalidLength { expected: usize, actual: usize },
    /// A symbol is outside the value range or is not a number at all
    InvalidSymbol { position: usize, symbol: String },
    /// The value range is empty and cannot be enumerated
    InvalidRange { start: u8, end: u8 },
    /// The configured code length is zero or too long to score
    UnsupportedCodeLength(usize),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} values, got {actual}")
            }
            Self::InvalidSymbol { position, symbol } => {
                write!(
                    f,
                    "Value '{symbol}' at position {} is not in the allowed range",
                    position + 1
                )
            }
            Self::InvalidRange { start, end } => {
                write!(f, "Value range {start}..={end} is empty")
            }
            Self::UnsupportedCodeLength(len) => {
                write!(
                    f,
                    "Code length must be between 1 and {}, got {len}",
                    super::MAX_CODE_LENGTH
                )
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code, validating it against a code space
    ///
    /// The values are copied, so later changes to the caller's buffer never
    /// reach the code.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The number of values differs from the space's code length
    /// - Any value lies outside the space's value range
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, CodeSpace};
    ///
    /// let space = CodeSpace::classic();
    /// let code = Code::new(&[0, 1, 2, 3], &space).unwrap();
    /// assert_eq!(code.values(), &[0, 1, 2, 3]);
    ///
    /// assert!(Code::new(&[0, 1, 2], &space).is_err());
    /// assert!(Code::new(&[0, 1, 2, 9], &space).is_err());
    /// ```
    pub fn new(values: &[u8], space: &CodeSpace) -> Result<Self, CodeError> {
        if values.len() != space.code_length() {
            return Err(CodeError::InvalidLength {
                expected: space.code_length(),
                actual: values.len(),
            });
        }

        if let Some((position, value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &value)| !space.value_range().contains(value))
        {
            return Err(CodeError::InvalidSymbol {
                position,
                symbol: value.to_string(),
            });
        }

        Ok(Self::from_trusted(values.to_vec()))
    }

    /// Build a code from values already known to be valid for its space
    pub(crate) fn from_trusted(values: Vec<u8>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }

    /// Get the values as a slice
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of symbols in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for validated codes; present for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn value_at(&self, position: usize) -> u8 {
        self.values[position]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Single digits read naturally packed together ("0011"); wider symbols need spacing
        let separator = if self.values.iter().all(|&v| v < 10) {
            ""
        } else {
            " "
        };

        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
