use actix_multipart::Multipart;
use futures::TryStreamExt;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::{FileUpload, GenerateForm},
};

/// Collects the generate form from a multipart stream. Any single part larger
/// than `max_upload_bytes` aborts with `PayloadTooLarge`.
pub async fn read_generate_form(
    mut payload: Multipart,
    max_upload_bytes: usize,
) -> AppResult<GenerateForm> {
    let mut form = GenerateForm::default();

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > max_upload_bytes {
                return Err(AppError::PayloadTooLarge(max_upload_bytes));
            }
            bytes.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "file" => form.file = Some(FileUpload { file_name, bytes }),
            "task" => form.task = Some(text_field(&name, bytes)?),
            "language" => form.language = Some(text_field(&name, bytes)?),
            "num_questions" => form.num_questions = Some(text_field(&name, bytes)?),
            other => log::debug!("Ignoring unexpected form field '{}'", other),
        }
    }

    Ok(form)
}

fn text_field(name: &str, bytes: Vec<u8>) -> AppResult<String> {
    String::from_utf8(bytes)
        .map_err(|_| AppError::BadRequest(format!("Form field '{}' is not valid UTF-8", name)))
}
