pub mod document;
pub mod generation;
pub mod language;
pub mod question_count;
pub mod task;

pub use document::UploadedDocument;
pub use generation::{
    GeneratedItems, GeneratedQuestion, GenerationOutcome, GenerationRequest, McqItem,
    OptionsSource,
};
pub use language::Language;
pub use question_count::QuestionCount;
pub use task::TaskKind;
