//! Line grammar for model output.
//!
//! Both parsers trim the whole response and split it on `\n`.
//!
//! Questions: every line that is non-empty after trimming is one question,
//! numbered from 1 in order of appearance.
//!
//! Quiz:
//! - a line containing `Correct answer:` is an item; text before the first
//!   marker is the question, text after it is the answer (both trimmed)
//! - a line shaped like `A) text`, `b. text` or `(C) text` is an option for
//!   the next item
//! - every other line is ignored
//!
//! An item takes the options seen since the previous item only when they are
//! exactly A, B, C, D in order. Otherwise it falls back to the placeholder set.
//!
//! Every outcome carries [`GRAMMAR_VERSION`] so clients can tell which rules
//! produced its items.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::prompts::{CORRECT_ANSWER_MARKER, PLACEHOLDER_OPTIONS},
    models::domain::{GeneratedItems, GeneratedQuestion, McqItem, OptionsSource, TaskKind},
};

pub const GRAMMAR_VERSION: u32 = 1;

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*]\s*)?\(?([A-Da-d])[).:]\s+(\S.*)$")
        .expect("OPTION_LINE is a valid regex pattern")
});

pub trait ResponseParser: Send + Sync {
    fn parse(&self, raw: &str) -> GeneratedItems;
}

pub struct QuestionListParser;

impl ResponseParser for QuestionListParser {
    fn parse(&self, raw: &str) -> GeneratedItems {
        let questions = raw
            .trim()
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| GeneratedQuestion {
                number: idx + 1,
                text: line.to_string(),
            })
            .collect();

        GeneratedItems::Questions(questions)
    }
}

pub struct McqParser;

impl McqParser {
    fn option_line(line: &str) -> Option<(char, String)> {
        let caps = OPTION_LINE.captures(line)?;
        let letter = caps.get(1)?.as_str().chars().next()?.to_ascii_uppercase();
        Some((letter, caps.get(2)?.as_str().trim().to_string()))
    }

    fn take_options(pending: &mut Vec<(char, String)>) -> (Vec<String>, OptionsSource) {
        let letters: Vec<char> = pending.iter().map(|(letter, _)| *letter).collect();
        let result = if letters == ['A', 'B', 'C', 'D'] {
            (
                pending.iter().map(|(_, text)| text.clone()).collect(),
                OptionsSource::Parsed,
            )
        } else {
            (
                PLACEHOLDER_OPTIONS.iter().map(|o| o.to_string()).collect(),
                OptionsSource::Placeholder,
            )
        };
        pending.clear();
        result
    }
}

impl ResponseParser for McqParser {
    fn parse(&self, raw: &str) -> GeneratedItems {
        let mut items: Vec<McqItem> = Vec::new();
        let mut pending = Vec::new();

        for line in raw.trim().split('\n') {
            if let Some((question, answer)) = line.split_once(CORRECT_ANSWER_MARKER) {
                let (options, options_source) = Self::take_options(&mut pending);
                items.push(McqItem {
                    number: items.len() + 1,
                    question: question.trim().to_string(),
                    options,
                    correct_answer: answer.trim().to_string(),
                    options_source,
                });
            } else if let Some(option) = Self::option_line(line) {
                pending.push(option);
            }
        }

        GeneratedItems::Quiz(items)
    }
}

pub fn parser_for(task: TaskKind) -> &'static dyn ResponseParser {
    match task {
        TaskKind::Questions => &QuestionListParser,
        TaskKind::Mcq => &McqParser,
    }
}
