use axum::http::{header::CONTENT_TYPE, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::exchange::error::ApiError;

// Documentation content is embedded at build time; there is no runtime
// file dependency to go missing in a container image.
static INDEX_HTML: &str = include_str!("../../static/index.html");
static SWAGGER_JSON: &str = include_str!("../../docs/swagger.json");
static SWAGGER_YAML: &str = include_str!("../../docs/swagger.yaml");

pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

pub async fn swagger_json() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], SWAGGER_JSON)
}

pub async fn swagger_yaml() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/yaml")], SWAGGER_YAML)
}

pub async fn method_not_allowed() -> Response {
    ApiError::method_not_allowed().into_response()
}

/// GET on an unknown path is a plain 404; any other verb anywhere is 405.
pub async fn unknown_path(method: Method) -> Response {
    if method == Method::GET {
        (StatusCode::NOT_FOUND, "not found").into_response()
    } else {
        ApiError::method_not_allowed().into_response()
    }
}
