use domain::FilmError;
use thiserror::Error;

/// ハンドラー層で扱うエラー型
#[derive(Debug, Clone, Error)]
pub enum AppError {
    // 永続化エラー
    #[error("Domain error: {0}")]
    Domain(#[from] FilmError),

    // リクエストエラー
    #[error("Missing required parameter {0}")]
    MissingParameter(String),

    #[error("Invalid request body: {0}")]
    Deserialization(String),

    // システムエラー
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// エラーの分類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼び出し側が修正できるエラー（4xx相当）
    Client,
    /// 呼び出しを失敗させるエラー
    Server,
}

/// エラーの重要度
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

/// エラーメタデータ
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
}

impl AppError {
    pub fn missing_parameter(name: &str) -> Self {
        Self::MissingParameter(name.to_string())
    }

    /// エラーメタデータを取得
    pub fn metadata(&self) -> ErrorMetadata {
        match self {
            AppError::Domain(FilmError::DynamoDb(_)) => ErrorMetadata {
                code: "DYNAMODB_ERROR",
                category: ErrorCategory::Server,
                severity: ErrorSeverity::Error,
            },
            AppError::Domain(FilmError::ItemConversion(_)) => ErrorMetadata {
                code: "ITEM_CONVERSION_ERROR",
                category: ErrorCategory::Server,
                severity: ErrorSeverity::Error,
            },
            AppError::MissingParameter(_) => ErrorMetadata {
                code: "MISSING_PARAMETER",
                category: ErrorCategory::Client,
                severity: ErrorSeverity::Warning,
            },
            AppError::Deserialization(_) => ErrorMetadata {
                code: "INVALID_REQUEST_BODY",
                category: ErrorCategory::Client,
                severity: ErrorSeverity::Warning,
            },
            AppError::Serialization(_) => ErrorMetadata {
                code: "SERIALIZATION_ERROR",
                category: ErrorCategory::Server,
                severity: ErrorSeverity::Error,
            },
            AppError::Configuration(_) => ErrorMetadata {
                code: "CONFIGURATION_ERROR",
                category: ErrorCategory::Server,
                severity: ErrorSeverity::Critical,
            },
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.metadata().category == ErrorCategory::Client
    }

    /// HTTPステータスコードを取得
    pub fn http_status_code(&self) -> u16 {
        match self.metadata().category {
            ErrorCategory::Client => 400,
            ErrorCategory::Server => 500,
        }
    }
}
