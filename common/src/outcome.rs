use std::fmt;

use crate::error::StepError;

/// How a step that did not fail ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The step did what it set out to do.
    Completed(String),
    /// The step ran to the end but something along the way did not work.
    Degraded(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Completed(msg) | Outcome::Degraded(msg) => msg,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub type StepResult = Result<Outcome, StepError>;
