use crate::AppError;
use std::env;

/// 映画テーブル名を指定する環境変数
pub const FILM_TABLE_ENV: &str = "FilmTable";

/// テーブル名が未設定のときに使うテーブル
pub const DEFAULT_FILM_TABLE: &str = "Film";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub film_table: String,
    pub environment: String,
    pub aws_region: Option<String>,
    /// DynamoDB Local などの接続先（未設定なら AWS の既定エンドポイント）
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索から設定を組み立てる（空文字は未設定扱い）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let dynamodb_endpoint = get("DYNAMODB_ENDPOINT");
        if let Some(endpoint) = &dynamodb_endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(AppError::Configuration(format!(
                    "DYNAMODB_ENDPOINT must be an http(s) URL: {endpoint}"
                )));
            }
        }

        Ok(Config {
            film_table: get(FILM_TABLE_ENV).unwrap_or_else(|| DEFAULT_FILM_TABLE.to_string()),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            aws_region: get("AWS_REGION"),
            dynamodb_endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.film_table, "Film");
        assert_eq!(config.environment, "dev");
        assert_eq!(config.aws_region, None);
        assert_eq!(config.dynamodb_endpoint, None);
    }

    #[test]
    fn test_film_table_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("FilmTable", "FilmApp-FilmTable-1ABC"),
            ("ENVIRONMENT", "prod"),
            ("AWS_REGION", "us-east-1"),
        ]))
        .unwrap();

        assert_eq!(config.film_table, "FilmApp-FilmTable-1ABC");
        assert_eq!(config.environment, "prod");
        assert_eq!(config.aws_region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let env = lookup(&[("FilmTable", ""), ("AWS_REGION", "  ")]);
        let config = Config::from_lookup(env).unwrap();

        assert_eq!(config.film_table, DEFAULT_FILM_TABLE);
        assert_eq!(config.aws_region, None);
    }

    #[test]
    fn test_dynamodb_endpoint_must_be_url() {
        let config =
            Config::from_lookup(lookup(&[("DYNAMODB_ENDPOINT", "http://localhost:8000")])).unwrap();
        assert_eq!(
            config.dynamodb_endpoint.as_deref(),
            Some("http://localhost:8000")
        );

        let result = Config::from_lookup(lookup(&[("DYNAMODB_ENDPOINT", "localhost:8000")]));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
