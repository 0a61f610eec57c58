use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{GenerationRequest, Language, QuestionCount, TaskKind, UploadedDocument},
};

pub const MISSING_FILE_MESSAGE: &str = "Please upload a text file.";
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Only .txt files are supported.";

/// JSON body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequestDto {
    pub task: TaskKind,
    pub language: Language,

    /// Bounds are checked by `QuestionCount::new`.
    pub question_count: i64,

    #[validate(length(min = 1, message = "Please provide the text to generate from."))]
    pub text: String,
}

impl TryFrom<GenerateRequestDto> for GenerationRequest {
    type Error = AppError;

    fn try_from(dto: GenerateRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        Ok(GenerationRequest::new(
            dto.task,
            dto.language,
            QuestionCount::new(dto.question_count)?,
            dto.text,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Browsers send an empty, unnamed part when no file was chosen.
    pub fn is_blank(&self) -> bool {
        self.bytes.is_empty() && self.file_name.as_deref().map_or(true, str::is_empty)
    }

    pub fn has_txt_extension(&self) -> bool {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_ascii_lowercase().ends_with(".txt"),
            _ => true,
        }
    }
}

/// Fields of the multipart form posted to `/generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateForm {
    pub task: Option<String>,
    pub language: Option<String>,
    pub num_questions: Option<String>,
    pub file: Option<FileUpload>,
}

impl GenerateForm {
    /// Validates the form in the order the page presents it: selectors, file,
    /// then the count.
    ///
    /// `ValidationError`s are shown inline. A `DecodeError` fails the request.
    pub fn into_generation_request(self) -> AppResult<(UploadedDocument, GenerationRequest)> {
        let task: TaskKind = self.task.as_deref().unwrap_or_default().parse()?;
        let language: Language = self.language.as_deref().unwrap_or_default().parse()?;

        let file = self
            .file
            .filter(|file| !file.is_blank())
            .ok_or_else(|| AppError::ValidationError(MISSING_FILE_MESSAGE.to_string()))?;
        if !file.has_txt_extension() {
            return Err(AppError::ValidationError(
                UNSUPPORTED_FILE_MESSAGE.to_string(),
            ));
        }
        let document = UploadedDocument::from_upload(file.file_name, file.bytes)?;

        let question_count =
            QuestionCount::parse(self.num_questions.as_deref().unwrap_or_default())?;

        let request = GenerationRequest::new(task, language, question_count, document.text.clone());
        Ok((document, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(num_questions: &str, file: Option<FileUpload>) -> GenerateForm {
        GenerateForm {
            task: Some("questions".to_string()),
            language: Some("English".to_string()),
            num_questions: Some(num_questions.to_string()),
            file,
        }
    }

    fn txt(content: &[u8]) -> Option<FileUpload> {
        Some(FileUpload {
            file_name: Some("notes.txt".to_string()),
            bytes: content.to_vec(),
        })
    }

    #[test]
    fn valid_form_builds_request() {
        let (document, request) = form("3", txt(b"The sky is blue."))
            .into_generation_request()
            .unwrap();

        assert_eq!(document.file_name.as_deref(), Some("notes.txt"));
        assert_eq!(request.source_text, "The sky is blue.");
        assert_eq!(request.question_count.get(), 3);
    }

    #[test]
    fn missing_or_blank_file_is_inline_error() {
        let err = form("3", None).into_generation_request().unwrap_err();
        assert_eq!(err.to_string(), MISSING_FILE_MESSAGE);

        let blank = Some(FileUpload {
            file_name: Some(String::new()),
            bytes: vec![],
        });
        let err = form("3", blank).into_generation_request().unwrap_err();
        assert!(err.is_inline());
    }

    #[test]
    fn non_txt_file_is_rejected() {
        let pdf = Some(FileUpload {
            file_name: Some("paper.pdf".to_string()),
            bytes: b"%PDF".to_vec(),
        });
        let err = form("3", pdf).into_generation_request().unwrap_err();
        assert_eq!(err.to_string(), UNSUPPORTED_FILE_MESSAGE);
    }

    #[test]
    fn invalid_utf8_is_a_hard_failure() {
        let err = form("3", txt(&[0xff, 0x00])).into_generation_request().unwrap_err();
        assert!(matches!(err, AppError::DecodeError(_)));
    }

    #[test]
    fn bad_count_messages_pass_through() {
        let err = form("31", txt(b"x")).into_generation_request().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a number between 1 and 30.");

        let err = form("abc", txt(b"x")).into_generation_request().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input. Please enter a valid number.");
    }

    #[test]
    fn json_dto_validates_range() {
        let dto: GenerateRequestDto = serde_json::from_str(
            r#"{"task":"mcq","language":"French","question_count":0,"text":"t"}"#,
        )
        .unwrap();
        let err = GenerationRequest::try_from(dto).unwrap_err();
        assert!(err.is_inline());
        assert_eq!(err.to_string(), "Please enter a number between 1 and 30.");

        let dto: GenerateRequestDto = serde_json::from_str(
            r#"{"task":"mcq","language":"French","question_count":31,"text":"t"}"#,
        )
        .unwrap();
        let err = GenerationRequest::try_from(dto).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a number between 1 and 30.");
    }

    #[test]
    fn json_dto_requires_text() {
        let dto: GenerateRequestDto = serde_json::from_str(
            r#"{"task":"questions","language":"English","question_count":3,"text":""}"#,
        )
        .unwrap();
        let err = GenerationRequest::try_from(dto).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.to_string(), "Please provide the text to generate from.");
    }
}
