use crate::response::error_response;
use async_trait::async_trait;
use lambda_http::{Body, Request, RequestExt, Response};
use lambda_runtime::Context;
use shared::telemetry::{create_lambda_span, trace_http_response, LambdaTraceContext};
use shared::{AppError, ErrorSeverity};
use tracing::{error, warn, Instrument};

/// API Gateway から呼ばれる映画ハンドラー
#[async_trait]
pub trait FilmFunction: Send + Sync {
    /// ログとスパンに出すハンドラー名
    fn name(&self) -> &'static str;

    /// リクエストを処理してレスポンスを返す
    ///
    /// `Id` の欠落やボディの不正などクライアント起因のエラーは `Err` で返す。
    /// それを 400 レスポンスに変換するのは [`invoke`] の役目で、ハンドラーは直接扱わない。
    async fn perform(&self, request: Request, ctx: Context) -> Result<Response<Body>, AppError>;
}

/// Lambda から受け取ったリクエストをハンドラーに渡す
///
/// クライアントエラーは HTTP レスポンスに変換し、それ以外のエラーは
/// 呼び出し失敗として Lambda ランタイムに返す。
pub async fn invoke<F>(function: &F, request: Request) -> Result<Response<Body>, AppError>
where
    F: FilmFunction + ?Sized,
{
    let context = request.lambda_context_ref().cloned().unwrap_or_default();
    let trace_context = LambdaTraceContext::from_lambda_context(&context);
    let span = create_lambda_span(function.name(), &trace_context);

    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    let result = function
        .perform(request, context)
        .instrument(span.clone())
        .await;

    span.in_scope(|| match result {
        Ok(response) => {
            trace_http_response(&method, &path, response.status().as_u16());
            Ok(response)
        }
        Err(e) if e.is_client_error() => {
            let metadata = e.metadata();
            match metadata.severity {
                ErrorSeverity::Warning => {
                    warn!(error = %e, code = metadata.code, "Request rejected")
                }
                _ => error!(error = %e, code = metadata.code, "Request rejected"),
            }

            let response = error_response(&e);
            trace_http_response(&method, &path, response.status().as_u16());
            Ok(response)
        }
        Err(e) => {
            error!(
                error = %e,
                code = e.metadata().code,
                handler = function.name(),
                "Handler failed"
            );
            Err(e)
        }
    })
}
