use lambda_runtime::Context;
use std::future::Future;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// Lambda 関数のトレーシング情報
#[derive(Debug)]
pub struct LambdaTraceContext {
    pub function_name: String,
    pub function_version: String,
    pub request_id: String,
    pub trace_id: Option<String>,
}

impl LambdaTraceContext {
    /// Lambda Context からトレーシング情報を抽出
    pub fn from_lambda_context(context: &Context) -> Self {
        Self {
            function_name: context.env_config.function_name.clone(),
            function_version: context.env_config.version.clone(),
            request_id: context.request_id.clone(),
            trace_id: context
                .xray_trace_id
                .clone()
                .or_else(|| std::env::var("_X_AMZN_TRACE_ID").ok()),
        }
    }
}

/// Lambda 関数用のスパンを作成
pub fn create_lambda_span(handler_name: &str, trace_context: &LambdaTraceContext) -> tracing::Span {
    tracing::span!(
        tracing::Level::INFO,
        "lambda_handler",
        handler = handler_name,
        function_name = %trace_context.function_name,
        function_version = %trace_context.function_version,
        request_id = %trace_context.request_id,
        trace_id = %trace_context.trace_id.as_deref().unwrap_or("none")
    )
}

/// DynamoDB 操作をトレース
#[instrument(skip(operation))]
pub async fn trace_dynamodb_operation<T, E, F, Fut>(
    table_name: &str,
    operation_name: &str,
    operation: F,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let start_time = Instant::now();
    let result = operation().await;
    let duration = start_time.elapsed();

    match &result {
        Ok(_) => {
            info!(
                table = table_name,
                operation = operation_name,
                duration_ms = duration.as_millis() as u64,
                "DynamoDB operation completed successfully"
            );
        }
        Err(e) => {
            error!(
                table = table_name,
                operation = operation_name,
                duration_ms = duration.as_millis() as u64,
                error = %e,
                "DynamoDB operation failed"
            );
        }
    }

    result
}

/// HTTP レスポンスを記録
pub fn trace_http_response(method: &str, path: &str, status_code: u16) {
    if status_code >= 400 {
        warn!(
            method = method,
            path = path,
            status_code = status_code,
            "HTTP request failed"
        );
    } else {
        info!(
            method = method,
            path = path,
            status_code = status_code,
            "HTTP request completed"
        );
    }
}
