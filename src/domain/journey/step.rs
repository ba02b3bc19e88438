//! Step and Checkpoint value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LifecycleState, ValidationError};
use super::HasLifecycle;

/// One unit of a linear process, such as a payment stage.
///
/// Title is the stable key within a sequence; there is no other identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    title: String,
    description: String,
    state: LifecycleState,
}

impl Step {
    /// Creates a new Step. The title must be non-empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        state: LifecycleState,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            title,
            description: description.into(),
            state,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }
}

impl HasLifecycle for Step {
    fn state(&self) -> LifecycleState {
        self.state
    }

    fn with_state(&self, state: LifecycleState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}

/// One unit of a dated timeline, such as a delivery milestone.
///
/// A Checkpoint is a Step specialized with a mandatory display date. The
/// date is a display-formatted string (e.g. "May 6, 2024 · 10:30 AM"),
/// not guaranteed machine-parseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    title: String,
    description: String,
    date: String,
    state: LifecycleState,
}

impl Checkpoint {
    /// Creates a new Checkpoint. The title must be non-empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        state: LifecycleState,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            title,
            description: description.into(),
            date: date.into(),
            state,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }
}

impl HasLifecycle for Checkpoint {
    fn state(&self) -> LifecycleState {
        self.state
    }

    fn with_state(&self, state: LifecycleState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}
