use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::multipart_form::read_generate_form,
    middleware::request_id,
    models::{
        domain::GenerationRequest,
        dto::{request::GenerateRequestDto, response::GenerateResponse},
    },
    services::http_helpers::{html_page, success_json},
    views::{FormState, PageView},
};

#[get("/")]
pub async fn index() -> HttpResponse {
    html_page(&PageView::default())
}

#[post("/generate")]
pub async fn generate_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let request_id = request_id(&req);
    let form = read_generate_form(payload, state.config.max_upload_bytes).await?;
    let form_state = FormState::from(&form);

    let (document, request) = match form.into_generation_request() {
        Ok(parsed) => parsed,
        Err(err) if err.is_inline() => {
            log::info!("[{}] Form rejected: {}", request_id, err);
            return Ok(html_page(&PageView::with_error(form_state, err.to_string())));
        }
        Err(err) => return Err(err),
    };

    let file_name = document
        .file_name
        .clone()
        .unwrap_or_else(|| "uploaded file".to_string());
    log::info!(
        "[{}] Extracted {} bytes of text from {}",
        request_id,
        document.bytes.len(),
        file_name
    );

    let mut view = PageView {
        form: form_state,
        extracted_file: Some(file_name),
        ..Default::default()
    };

    match state.generation_service.generate(&request_id, &request).await {
        Ok(outcome) => view.outcome = Some(outcome),
        Err(err) if err.is_inline() => {
            view.prompt = Some(request.prompt());
            view.error = Some(err.to_string());
        }
        Err(err) => return Err(err),
    }

    Ok(html_page(&view))
}

#[post("/api/generate")]
pub async fn generate_api(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<GenerateRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = GenerationRequest::try_from(body.into_inner())?;
    let outcome = state
        .generation_service
        .generate(&request_id(&req), &request)
        .await?;
    Ok(success_json(GenerateResponse::from(outcome)))
}
