use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    #[default]
    Questions,
    Mcq,
}

impl TaskKind {
    pub const ALL: [TaskKind; 2] = [TaskKind::Questions, TaskKind::Mcq];

    /// Value submitted by the form selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Questions => "questions",
            TaskKind::Mcq => "mcq",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Questions => "Generate Only Questions",
            TaskKind::Mcq => "Generate MCQ Quiz",
        }
    }

    pub fn empty_response_message(&self) -> &'static str {
        match self {
            TaskKind::Questions => "No questions generated. Please check the input text.",
            TaskKind::Mcq => "No MCQs generated. Please check the input text.",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TaskKind::ALL
            .into_iter()
            .find(|task| task.as_str().eq_ignore_ascii_case(s) || task.label() == s)
            .ok_or_else(|| AppError::ValidationError(format!("Unsupported task: {}", s)))
    }
}
