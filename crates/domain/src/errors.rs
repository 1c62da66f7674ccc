use thiserror::Error;

/// 映画レコードの永続化で発生するエラー
#[derive(Debug, Clone, Error)]
pub enum FilmError {
    #[error("DynamoDB error: {0}")]
    DynamoDb(String),

    #[error("Item conversion error: {0}")]
    ItemConversion(String),
}

impl FilmError {
    pub fn dynamodb(error: impl std::fmt::Display) -> Self {
        Self::DynamoDb(error.to_string())
    }

    pub fn item_conversion(error: impl std::fmt::Display) -> Self {
        Self::ItemConversion(error.to_string())
    }
}
