//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of exact matches (right value, right position) and
//! partial matches (right value, wrong position) produced by scoring a guess
//! against a secret.

use super::Code;
use std::fmt;
use std::str::FromStr;

/// Scored comparison of a guess against a secret
///
/// Two feedbacks are equal when their (exact, partial) counts are equal,
/// regardless of which codes produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact_matches: u8,
    partial_matches: u8,
}

/// Error type for feedback typed by a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackParseError(String);

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid feedback '{}': expected two numbers, exact then partial",
            self.0
        )
    }
}

impl std::error::Error for FeedbackParseError {}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact_matches: u8, partial_matches: u8) -> Self {
        Self {
            exact_matches,
            partial_matches,
        }
    }

    /// Feedback for a winning guess on codes of `code_length`
    #[inline]
    #[must_use]
    pub const fn perfect(code_length: usize) -> Self {
        Self::new(code_length as u8, 0)
    }

    #[inline]
    #[must_use]
    pub const fn exact_matches(self) -> u8 {
        self.exact_matches
    }

    #[inline]
    #[must_use]
    pub const fn partial_matches(self) -> u8 {
        self.partial_matches
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, code_length: usize) -> bool {
        self.exact_matches as usize == code_length
    }

    /// Check whether any secret could produce this feedback for codes of `code_length`
    ///
    /// Totals above the length are impossible, and so is "all but one exact,
    /// one partial": the last value can only be partial if it sits elsewhere,
    /// but every other position is already taken.
    #[must_use]
    pub const fn is_possible(self, code_length: usize) -> bool {
        let exact = self.exact_matches as usize;
        let total = exact + self.partial_matches as usize;
        total <= code_length && !(exact + 1 == code_length && self.partial_matches == 1)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: every position where the codes agree is an exact match;
    ///    both sides of that position are consumed
    /// 2. Second pass: each unconsumed secret value takes the first unconsumed
    ///    occurrence of the same value in the guess, counting a partial match
    ///
    /// Consuming on use means no value is ever counted twice, across exact and
    /// partial or across duplicate symbols.
    ///
    /// Both codes must come from the same code space.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeSpace, Feedback};
    ///
    /// let space = CodeSpace::classic();
    /// let secret = space.code(&[1, 1, 2, 3]).unwrap();
    /// let guess = space.code(&[1, 4, 1, 1]).unwrap();
    ///
    /// let feedback = Feedback::compute(&secret, &guess);
    /// assert_eq!(feedback.exact_matches(), 1);
    /// assert_eq!(feedback.partial_matches(), 1);
    /// ```
    #[must_use]
    pub fn compute(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "codes must share a length");

        let secret = secret.values();
        let guess = guess.values();

        // Bit i set = position i already used
        let mut secret_consumed = 0u64;
        let mut exact_matches = 0u8;

        // First pass: exact matches
        for (i, (s, g)) in secret.iter().zip(guess).enumerate() {
            if s == g {
                exact_matches += 1;
                secret_consumed |= 1 << i;
            }
        }

        // Exact positions are consumed on the guess side too
        let mut guess_consumed = secret_consumed;
        let mut partial_matches = 0u8;

        // Second pass: partial matches from the remaining pool
        for (i, value) in secret.iter().enumerate() {
            if secret_consumed & (1 << i) != 0 {
                continue;
            }

            let found = guess
                .iter()
                .enumerate()
                .find(|&(j, g)| guess_consumed & (1 << j) == 0 && g == value);

            if let Some((j, _)) = found {
                partial_matches += 1;
                guess_consumed |= 1 << j;
            }
        }

        Self::new(exact_matches, partial_matches)
    }

    /// Render as key pegs: `●` exact, `○` partial, `·` empty
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::new(2, 1).to_pegs(4), "●●○·");
    /// ```
    #[must_use]
    pub fn to_pegs(self, code_length: usize) -> String {
        let exact = self.exact_matches as usize;
        let partial = self.partial_matches as usize;
        let empty = code_length.saturating_sub(exact + partial);

        let mut pegs = String::with_capacity(code_length * 3);
        pegs.extend(std::iter::repeat_n('●', exact));
        pegs.extend(std::iter::repeat_n('○', partial));
        pegs.extend(std::iter::repeat_n('·', empty));
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} exact, {} partial",
            self.exact_matches, self.partial_matches
        )
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse feedback like "2 1", "2,1" or "2/1" (exact first)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts: Vec<u8> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| FeedbackParseError(s.to_string()))?;

        match counts.as_slice() {
            &[exact, partial] => Ok(Self::new(exact, partial)),
            _ => Err(FeedbackParseError(s.to_string())),
        }
    }
}
