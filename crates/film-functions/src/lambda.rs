use crate::{invoke, FilmFunction};
use infrastructure::{DynamoDbClient, DynamoFilmRepository, FilmRepository};
use lambda_http::{run, service_fn, Error, Request};
use shared::{init_tracing, Config};
use std::sync::Arc;
use tracing::info;

/// Lambda ランタイムを起動する
///
/// DynamoDB クライアントはインスタンスごとに1度だけ作成し、呼び出し間で使い回す。
pub async fn start<F, B>(build: B) -> Result<(), Error>
where
    F: FilmFunction,
    B: FnOnce(Arc<dyn FilmRepository>) -> F,
{
    init_tracing()?;

    let config = Config::from_env()?;
    let db = DynamoDbClient::new(&config).await;
    let repository = DynamoFilmRepository::new(db);
    let table = repository.table_name().to_string();

    let repository: Arc<dyn FilmRepository> = Arc::new(repository);
    let function = build(repository);
    info!(
        handler = function.name(),
        table = %table,
        environment = %config.environment,
        "Lambda function initialized"
    );

    let function = &function;
    run(service_fn(move |request: Request| async move {
        invoke(function, request).await
    }))
    .await
}
