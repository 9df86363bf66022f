//! Game configuration: code shape plus the turn limit

use crate::core::{CodeError, CodeSpace, ValueRange};
use std::fmt;

/// Classic Mastermind gives the code breaker twelve rows
pub const DEFAULT_MAX_TURNS: usize = 12;

/// Error type for invalid game configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The code length or value range is unusable
    Code(CodeError),
    /// A game needs at least one turn to be decided
    ZeroMaxTurns,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(err) => write!(f, "Invalid code settings: {err}"),
            Self::ZeroMaxTurns => write!(f, "Maximum turns must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Code(err) => Some(err),
            Self::ZeroMaxTurns => None,
        }
    }
}

impl From<CodeError> for ConfigError {
    fn from(err: CodeError) -> Self {
        Self::Code(err)
    }
}

/// Settings shared by everything taking part in one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    space: CodeSpace,
    max_turns: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the code length or value range is unusable, or
    /// if `max_turns` is zero.
    pub fn new(
        code_length: usize,
        value_range: ValueRange,
        max_turns: usize,
    ) -> Result<Self, ConfigError> {
        let space = CodeSpace::new(code_length, value_range)?;
        Self::with_space(space, max_turns)
    }

    /// Create a configuration from an existing code space
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroMaxTurns` if `max_turns` is zero.
    pub const fn with_space(space: CodeSpace, max_turns: usize) -> Result<Self, ConfigError> {
        if max_turns == 0 {
            return Err(ConfigError::ZeroMaxTurns);
        }
        Ok(Self { space, max_turns })
    }

    #[inline]
    #[must_use]
    pub const fn space(&self) -> CodeSpace {
        self.space
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.space.code_length()
    }

    #[inline]
    #[must_use]
    pub const fn value_range(&self) -> ValueRange {
        self.space.value_range()
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            space: CodeSpace::classic(),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}
