/// Trailing instruction on the MCQ prompt; the quiz parser relies on the
/// model following it with [`CORRECT_ANSWER_MARKER`].
pub const MCQ_ANSWER_INSTRUCTION: &str = "Indicate the correct answer after each question.";

pub const CORRECT_ANSWER_MARKER: &str = "Correct answer:";

pub const PLACEHOLDER_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];
