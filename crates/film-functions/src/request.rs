use domain::FilmInput;
use lambda_http::{Body, Request, RequestExt};
use shared::AppError;

/// 映画IDを渡すパラメータ名
pub const ID_PARAMETER_NAME: &str = "Id";

/// リクエストから映画IDを取り出す
///
/// パスパラメータに `Id` があればその値を使い、なければクエリパラメータを見る。
/// 空文字は未指定として扱う。
pub fn film_id_from_request(request: &Request) -> Option<String> {
    raw_film_id(request)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// パスかクエリに `Id` キーがあるか（値が空でも true）
pub fn has_film_id_parameter(request: &Request) -> bool {
    raw_film_id(request).is_some()
}

fn raw_film_id(request: &Request) -> Option<&str> {
    match request
        .path_parameters_ref()
        .and_then(|params| params.first(ID_PARAMETER_NAME))
    {
        Some(id) => Some(id),
        None => request
            .query_string_parameters_ref()
            .and_then(|params| params.first(ID_PARAMETER_NAME)),
    }
}

/// 映画IDが必須のハンドラー用
pub fn require_film_id(request: &Request) -> Result<String, AppError> {
    film_id_from_request(request).ok_or_else(|| AppError::missing_parameter(ID_PARAMETER_NAME))
}

/// リクエストボディを文字列として取り出す
pub fn request_body(request: &Request) -> Result<&str, AppError> {
    match request.body() {
        Body::Text(text) => Ok(text.as_str()),
        Body::Binary(bytes) => {
            std::str::from_utf8(bytes).map_err(|e| AppError::Deserialization(e.to_string()))
        }
        Body::Empty => Err(AppError::Deserialization("body is required".to_string())),
    }
}

/// リクエストボディを映画の入力値としてパース
pub fn film_input_from_request(request: &Request) -> Result<FilmInput, AppError> {
    let body = request_body(request)?;
    FilmInput::from_json(body).map_err(|e| AppError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn create_test_request(body: Body) -> Request {
        http::Request::builder()
            .method("GET")
            .uri("/films")
            .body(body)
            .unwrap()
    }

    #[test]
    fn test_film_id_from_path_parameters() {
        let request = create_test_request(Body::Empty)
            .with_path_parameters(params(&[("Id", "from-path")]))
            .with_query_string_parameters(params(&[("Id", "from-query")]));

        assert_eq!(
            film_id_from_request(&request),
            Some("from-path".to_string())
        );
    }

    #[test]
    fn test_film_id_falls_back_to_query_parameters() {
        let request = create_test_request(Body::Empty)
            .with_path_parameters(params(&[("other", "x")]))
            .with_query_string_parameters(params(&[("Id", "from-query")]));

        assert_eq!(
            film_id_from_request(&request),
            Some("from-query".to_string())
        );
    }

    #[test]
    fn test_film_id_missing() {
        let request = create_test_request(Body::Empty);
        assert_eq!(film_id_from_request(&request), None);

        let request = create_test_request(Body::Empty)
            .with_query_string_parameters(params(&[("id", "lowercase-key")]));
        assert_eq!(film_id_from_request(&request), None);
    }

    #[test]
    fn test_empty_path_id_does_not_fall_back() {
        let request = create_test_request(Body::Empty)
            .with_path_parameters(params(&[("Id", "")]))
            .with_query_string_parameters(params(&[("Id", "from-query")]));

        assert_eq!(film_id_from_request(&request), None);
        assert!(has_film_id_parameter(&request));
        let error = require_film_id(&request).unwrap_err();
        assert_eq!(error.to_string(), "Missing required parameter Id");
    }

    #[test]
    fn test_has_film_id_parameter_with_empty_query_value() {
        let request = create_test_request(Body::Empty)
            .with_query_string_parameters(params(&[("Id", "")]));
        assert!(has_film_id_parameter(&request));
        assert_eq!(film_id_from_request(&request), None);

        let request = create_test_request(Body::Empty);
        assert!(!has_film_id_parameter(&request));
    }

    #[test]
    fn test_request_body_variants() {
        let request = create_test_request(Body::from("{}".to_string()));
        assert_eq!(request_body(&request).unwrap(), "{}");

        let request = create_test_request(Body::from(b"{\"Rating\":1}".to_vec()));
        assert_eq!(request_body(&request).unwrap(), "{\"Rating\":1}");

        let request = create_test_request(Body::Empty);
        assert!(matches!(
            request_body(&request),
            Err(AppError::Deserialization(_))
        ));
    }

    #[test]
    fn test_film_input_from_request() {
        let request = create_test_request(Body::from(
            r#"{"Title":"Inception","Director":"Nolan","Rating":9}"#.to_string(),
        ));
        let input = film_input_from_request(&request).unwrap();
        assert_eq!(input.title, "Inception");
        assert_eq!(input.rating, 9);

        let request = create_test_request(Body::from("{\"Title\":".to_string()));
        assert!(matches!(
            film_input_from_request(&request),
            Err(AppError::Deserialization(_))
        ));
    }
}
