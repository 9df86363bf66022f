//! Code spaces: the symbol alphabet and code length every Code is checked against
//!
//! A `CodeSpace` also enumerates its universe of codes, which is what the
//! minimax strategy searches over.

use super::{Code, CodeError};
use rand::Rng;
use std::ops::RangeInclusive;

/// Longest supported code; feedback tracks consumed positions in a 64-bit mask
pub const MAX_CODE_LENGTH: usize = 64;

/// An inclusive, non-empty range of symbol values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    start: u8,
    end: u8,
}

impl ValueRange {
    /// Create a new range covering `start..=end`
    ///
    /// # Errors
    /// Returns `CodeError::InvalidRange` if `start > end`.
    pub const fn new(start: u8, end: u8) -> Result<Self, CodeError> {
        if start > end {
            return Err(CodeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range of `count` symbols starting at zero (e.g. six colours = `0..=5`)
    ///
    /// # Errors
    /// Returns `CodeError::InvalidRange` if `count` is zero.
    pub const fn with_symbols(count: u8) -> Result<Self, CodeError> {
        match count.checked_sub(1) {
            Some(end) => Self::new(0, end),
            None => Err(CodeError::InvalidRange { start: 0, end: 0 }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn start(self) -> u8 {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(self) -> u8 {
        self.end
    }

    /// Number of distinct symbols
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Always false; ranges are validated non-empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        value >= self.start && value <= self.end
    }

    /// The value following `value`, if it is still in range
    #[inline]
    #[must_use]
    pub fn successor(self, value: u8) -> Option<u8> {
        value.checked_add(1).filter(|&next| next <= self.end)
    }

    #[inline]
    #[must_use]
    pub const fn iter(self) -> RangeInclusive<u8> {
        self.start..=self.end
    }
}

impl Default for ValueRange {
    /// Six colours, as in classic Mastermind
    fn default() -> Self {
        Self { start: 0, end: 5 }
    }
}

impl TryFrom<RangeInclusive<u8>> for ValueRange {
    type Error = CodeError;

    fn try_from(range: RangeInclusive<u8>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

/// The shape shared by every code in a game: length plus symbol range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeSpace {
    code_length: usize,
    value_range: ValueRange,
}

impl CodeSpace {
    /// Create a new code space
    ///
    /// # Errors
    /// Returns `CodeError::UnsupportedCodeLength` if `code_length` is zero or
    /// exceeds `MAX_CODE_LENGTH`.
    pub const fn new(code_length: usize, value_range: ValueRange) -> Result<Self, CodeError> {
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(CodeError::UnsupportedCodeLength(code_length));
        }
        Ok(Self {
            code_length,
            value_range,
        })
    }

    /// Classic Mastermind: four positions, six colours
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            code_length: 4,
            value_range: ValueRange { start: 0, end: 5 },
        }
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn value_range(&self) -> ValueRange {
        self.value_range
    }

    /// Create a code in this space
    ///
    /// # Errors
    /// Returns `CodeError` if the values do not fit this space.
    pub fn code(&self, values: &[u8]) -> Result<Code, CodeError> {
        Code::new(values, self)
    }

    /// Check that a code built elsewhere fits this space
    ///
    /// # Errors
    /// Returns `CodeError` if the code's length or values do not fit.
    pub fn validate(&self, code: &Code) -> Result<(), CodeError> {
        Code::new(code.values(), self).map(|_| ())
    }

    /// Number of codes in the universe, or `None` if it overflows `usize`
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        let exponent = u32::try_from(self.code_length).ok()?;
        self.value_range.len().checked_pow(exponent)
    }

    /// Enumerate every code in the space in lexicographic order
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeSpace, ValueRange};
    ///
    /// let space = CodeSpace::new(2, ValueRange::new(0, 1).unwrap()).unwrap();
    /// let all: Vec<String> = space.all_codes().map(|c| c.to_string()).collect();
    /// assert_eq!(all, ["00", "01", "10", "11"]);
    /// ```
    #[must_use]
    pub fn all_codes(&self) -> AllCodes {
        AllCodes {
            value_range: self.value_range,
            next: Some(vec![self.value_range.start(); self.code_length]),
            remaining: self.size(),
        }
    }

    /// Draw a uniformly random code
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        let values = (0..self.code_length)
            .map(|_| rng.random_range(self.value_range.iter()))
            .collect();
        Code::from_trusted(values)
    }

    /// Parse a code typed by a player
    ///
    /// Accepts values separated by whitespace or commas (`"0 0 1 1"`,
    /// `"0,0,1,1"`), or a packed run of single digits (`"0011"`).
    ///
    /// # Errors
    /// Returns `CodeError::InvalidSymbol` for tokens that are not numbers, and
    /// the usual validation errors otherwise.
    pub fn parse_code(&self, text: &str) -> Result<Code, CodeError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let values: Vec<u8> = match tokens.as_slice() {
            [packed]
                if self.code_length > 1
                    && packed.len() == self.code_length
                    && packed.bytes().all(|b| b.is_ascii_digit()) =>
            {
                packed.bytes().map(|b| b - b'0').collect()
            }
            _ => tokens
                .iter()
                .enumerate()
                .map(|(position, token)| {
                    token.parse::<u8>().map_err(|_| CodeError::InvalidSymbol {
                        position,
                        symbol: (*token).to_string(),
                    })
                })
                .collect::<Result<_, _>>()?,
        };

        self.code(&values)
    }
}

impl Default for CodeSpace {
    fn default() -> Self {
        Self::classic()
    }
}

/// Iterator over every code of a space, odometer style
#[derive(Debug, Clone)]
pub struct AllCodes {
    value_range: ValueRange,
    next: Option<Vec<u8>>,
    remaining: Option<usize>,
}

impl Iterator for AllCodes {
    type Item = Code;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        // Advance the rightmost position that has not wrapped yet
        let mut successor = current.clone();
        for slot in successor.iter_mut().rev() {
            if let Some(value) = self.value_range.successor(*slot) {
                *slot = value;
                self.next = Some(successor);
                break;
            }
            *slot = self.value_range.start();
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }

        Some(Code::from_trusted(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}
