use std::{fmt, num::IntErrorKind};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const MIN_QUESTIONS: i64 = 1;
pub const MAX_QUESTIONS: i64 = 30;

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a valid number.";
pub const OUT_OF_RANGE_MESSAGE: &str = "Please enter a number between 1 and 30.";

/// Number of questions to request, always within `MIN_QUESTIONS..=MAX_QUESTIONS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub fn new(value: i64) -> AppResult<Self> {
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&value) {
            return Err(AppError::ValidationError(OUT_OF_RANGE_MESSAGE.to_string()));
        }
        Ok(Self(value as u8))
    }

    /// Parses the free-text count field. Overflowing integers are out of range,
    /// not invalid.
    pub fn parse(input: &str) -> AppResult<Self> {
        match input.trim().parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(AppError::ValidationError(OUT_OF_RANGE_MESSAGE.to_string()))
                }
                _ => Err(AppError::ValidationError(INVALID_NUMBER_MESSAGE.to_string())),
            },
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for QuestionCount {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionCount> for i64 {
    fn from(count: QuestionCount) -> Self {
        count.0 as i64
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
