use actix_web::{error, web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::Database;
use crate::handlers::docs_handler::ApiDoc;
use crate::message::ErrorBody;
use crate::utils::password::PasswordScheme;

mod album;
mod folder;
mod photo;
mod photographer;

/// Shared state, body limits and every route of the API.
///
/// Returned as a closure so `HttpServer` can build one per worker.
pub fn configure(
    db: web::Data<Database>,
    scheme: PasswordScheme,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(db)
            .app_data(web::Data::new(scheme))
            .app_data(json_config())
            .app_data(form_config());

        photographer::config(cfg);
        folder::config(cfg);
        album::config(cfg);
        photo::config(cfg);
        cfg.service(
            SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorBody {
            error: err.to_string(),
        };
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        let body = ErrorBody {
            error: err.to_string(),
        };
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
