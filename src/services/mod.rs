pub mod generation_service;
pub mod http_helpers;
pub mod model_service;
pub mod prompt_builder;
pub mod response_parser;

pub use generation_service::GenerationService;
pub use model_service::{GeminiModelService, TextGenerator};
pub use response_parser::{parser_for, McqParser, QuestionListParser, ResponseParser};
