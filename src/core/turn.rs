//! A single turn of the game: one guess and the feedback it earned

use super::{Code, Feedback};

/// One guess paired with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    guess: Code,
    feedback: Feedback,
}

impl Turn {
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Score `guess` against `secret` and record the result
    #[must_use]
    pub fn scored(secret: &Code, guess: Code) -> Self {
        let feedback = Feedback::compute(secret, &guess);
        Self::new(guess, feedback)
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}
