pub mod generator_handler;
pub mod health_handler;
pub mod multipart_form;

use actix_web::web;

pub use generator_handler::{generate_api, generate_page, index};
pub use health_handler::{health_check, health_check_live};

use crate::errors::AppError;

/// Registers every route along with the JSON extractor error mapping.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(index)
    .service(generate_page)
    .service(generate_api)
    .service(health_check)
    .service(health_check_live);
}
