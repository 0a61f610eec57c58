use actix_web::{http::header::ContentType, HttpResponse};

use crate::views::{render_page, PageView};

/// Renders the form page with a 200 status; inline errors are part of the page.
pub fn html_page(view: &PageView) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(view))
}

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}
