//! Per-call analysis state machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ModelError;

/// Stage of one analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    /// Nothing done yet.
    Idle,
    /// Inputs found and aligned on common dates.
    DataAligned,
    /// Factor table built.
    FactorsBuilt,
    /// Regression fitted.
    Regressed,
    /// Result interpreted.
    Interpreted,
    /// Report assembled.
    Done,
    /// Failed precondition or computation.
    Error,
}

impl AnalysisStage {
    /// The stage following `self` on the success path.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Idle => Self::DataAligned,
            Self::DataAligned => Self::FactorsBuilt,
            Self::FactorsBuilt => Self::Regressed,
            Self::Regressed => Self::Interpreted,
            Self::Interpreted | Self::Done => Self::Done,
            Self::Error => Self::Error,
        }
    }

    /// Check if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Tracks and logs the stage of one analysis.
#[derive(Debug)]
pub(crate) struct StageTracker {
    subject: String,
    stage: AnalysisStage,
}

impl StageTracker {
    pub(crate) fn new(subject: impl Into<String>) -> Self {
        Self { subject: subject.into(), stage: AnalysisStage::Idle }
    }

    pub(crate) const fn stage(&self) -> AnalysisStage {
        self.stage
    }

    /// Move to the next success stage.
    pub(crate) fn advance(&mut self) {
        let next = self.stage.next();
        debug!(subject = %self.subject, from = %self.stage, to = %next, "analysis stage");
        self.stage = next;
    }

    /// Terminate in the error stage.
    pub(crate) fn fail(&mut self, err: &ModelError) {
        warn!(subject = %self.subject, stage = %self.stage, error = %err, "analysis failed");
        self.stage = AnalysisStage::Error;
    }
}
