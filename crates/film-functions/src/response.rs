use lambda_http::http::{header, HeaderMap, HeaderValue, StatusCode};
use lambda_http::{Body, Response};
use serde::Serialize;
use shared::AppError;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// レスポンスヘッダーを組み立てる
///
/// `Access-Control-Allow-Origin: *` は常に付与し、`Content-Type` は空でないときだけ付ける。
pub fn response_headers(content_type: Option<&'static str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    if let Some(content_type) = content_type.filter(|ct| !ct.trim().is_empty()) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    headers
}

pub fn film_response(
    status: StatusCode,
    body: Body,
    content_type: Option<&'static str>,
) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = response_headers(content_type);
    response
}

/// 200 + JSON ボディ
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response<Body>, AppError> {
    let json = serde_json::to_string(value).map_err(|e| AppError::Serialization(e.to_string()))?;
    Ok(film_response(
        StatusCode::OK,
        Body::from(json),
        Some(CONTENT_TYPE_JSON),
    ))
}

pub fn text_response(status: StatusCode, text: String) -> Response<Body> {
    film_response(status, Body::from(text), Some(CONTENT_TYPE_TEXT))
}

/// ボディなし（Content-Type も付けない）
pub fn empty_response(status: StatusCode) -> Response<Body> {
    film_response(status, Body::Empty, None)
}

/// クライアントエラーをプレーンテキストのレスポンスに変換
pub fn error_response(error: &AppError) -> Response<Body> {
    let status =
        StatusCode::from_u16(error.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    text_response(status, error.to_string())
}

/// CORS プリフライトへの応答
pub fn preflight_response() -> Response<Body> {
    let mut response = empty_response(StatusCode::OK);
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

pub fn method_not_allowed_response() -> Response<Body> {
    let mut response = empty_response(StatusCode::METHOD_NOT_ALLOWED);
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_always_allow_any_origin() {
        let headers = response_headers(None);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_headers_include_content_type_when_given() {
        let headers = response_headers(Some(CONTENT_TYPE_JSON));
        assert_eq!(headers["Content-Type"], "application/json");
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_headers_skip_blank_content_type() {
        for content_type in ["", "   "] {
            let headers = response_headers(Some(content_type));
            assert!(!headers.contains_key(header::CONTENT_TYPE));
        }
    }

    #[test]
    fn test_json_response() {
        let response = json_response(&Vec::<String>::new()).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.body(), &Body::Text("[]".to_string()));
    }

    #[test]
    fn test_error_response_for_missing_parameter() {
        let response = error_response(&AppError::missing_parameter("Id"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["Content-Type"], "text/plain");
        assert_eq!(
            response.body(),
            &Body::Text("Missing required parameter Id".to_string())
        );
    }

    #[test]
    fn test_empty_response_has_no_content_type() {
        let response = empty_response(StatusCode::NOT_FOUND);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), &Body::Empty);
        assert!(!response.headers().contains_key(header::CONTENT_TYPE));
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[test]
    fn test_preflight_and_method_not_allowed() {
        let response = preflight_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["Access-Control-Allow-Methods"],
            ALLOWED_METHODS
        );

        let response = method_not_allowed_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["Allow"], ALLOWED_METHODS);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    }
}
