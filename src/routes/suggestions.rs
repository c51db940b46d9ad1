use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use validator::Validate;
use crate::models::{SuggestionsQuery, SuggestionsResponse, HealthResponse, ErrorResponse};
use crate::core::{Matcher, MatchError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<Matcher>,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }
}

/// Configure all suggestion-related routes
///
/// Only GET is served; other methods fall through to `unsupported`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/health")
                .route(web::get().to(health_check))
                .default_service(web::route().to(unsupported)),
        )
        .service(
            web::resource("/suggestions")
                .route(web::get().to(suggestions))
                .default_service(web::route().to(unsupported)),
        );
}

impl error::ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidLocation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: "invalid_location".to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Handle query string errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    let message = format!("Invalid query: {}", err);
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_query".to_string(),
            message,
            status_code: 400,
        }),
    )
    .into()
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        places: state.matcher.dataset().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Suggestions endpoint
///
/// GET /suggestions?q=Wok&latitude=43.70011&longitude=-79.4163
///
/// Response body:
/// ```json
/// {
///   "suggestions": [
///     { "name": "Wokingham", "latitude": "51.41120", "longitude": "-0.83565", "score": 0.9222222222222222 }
///   ]
/// }
/// ```
async fn suggestions(
    state: web::Data<AppState>,
    query: web::Query<SuggestionsQuery>,
) -> Result<HttpResponse, MatchError> {
    tracing::info!(
        "Serving request with params q={:?} lat={:?} lon={:?}",
        query.q,
        query.latitude,
        query.longitude
    );

    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for suggestions request: field_errors={:?}", errors);
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    let suggestions = state
        .matcher
        .suggest_with_params(&query.q, &query.latitude, &query.longitude)
        .map_err(|e| {
            tracing::info!("Failed to find suggestions: {}", e);
            e
        })?;

    tracing::debug!("Returning {} suggestions for {:?}", suggestions.len(), query.q);

    Ok(HttpResponse::Ok().json(SuggestionsResponse { suggestions }))
}

/// Fallback for unknown paths and methods
pub async fn unsupported(req: HttpRequest) -> impl Responder {
    tracing::info!("Unsupported request method={} path={}", req.method(), req.path());
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "unsupported".to_string(),
        message: format!("Unsupported request: {} {}", req.method(), req.path()),
        status_code: 400,
    })
}
