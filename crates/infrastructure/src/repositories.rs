use crate::DynamoDbClient;
use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue};
use domain::{Film, FilmError};
use shared::telemetry::trace_dynamodb_operation;
use std::collections::HashMap;
use std::future::Future;
use tracing::debug;

/// 映画テーブルのハッシュキー
pub const ID_ATTRIBUTE: &str = "Id";

/// Scan の `ExclusiveStartKey` / `LastEvaluatedKey`
pub type ScanKey = HashMap<String, AttributeValue>;

/// 映画レコードの永続化を抽象化するリポジトリ
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// 保存されている全ての映画を取得する（順序はストレージのスキャン順）
    async fn list(&self) -> Result<Vec<Film>, FilmError>;

    /// ID で映画を取得する。存在しなければ `None`
    async fn get_by_id(&self, id: &str) -> Result<Option<Film>, FilmError>;

    /// 新しい映画を保存する。ID と作成日時は呼び出し側で設定済み
    async fn add(&self, film: Film) -> Result<Film, FilmError>;

    /// 同じ ID のレコードを上書きする（存在しなくてもエラーにしない）
    async fn update(&self, film: &Film) -> Result<(), FilmError>;

    /// ID のレコードを削除する（存在しなくてもエラーにしない）
    async fn delete(&self, id: &str) -> Result<(), FilmError>;
}

/// DynamoDB テーブルをバックエンドとする映画リポジトリ
#[derive(Debug, Clone)]
pub struct DynamoFilmRepository {
    db: DynamoDbClient,
    page_limit: Option<i32>,
}

impl DynamoFilmRepository {
    pub fn new(db: DynamoDbClient) -> Self {
        Self {
            db,
            page_limit: None,
        }
    }

    /// Scan 1回あたりの最大件数を指定する（未指定なら DynamoDB の 1MB 上限まで）
    pub fn with_page_limit(mut self, limit: i32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn table_name(&self) -> &str {
        self.db.table_name()
    }

    async fn put_film(&self, film: &Film, operation: &str) -> Result<(), FilmError> {
        let item: HashMap<String, AttributeValue> =
            serde_dynamo::to_item(film).map_err(FilmError::item_conversion)?;
        let client = self.db.client();
        let table_name = self.db.table_name();

        trace_dynamodb_operation(table_name, operation, || async move {
            client
                .put_item()
                .table_name(table_name)
                .set_item(Some(item))
                .send()
                .await
                .map_err(dynamodb_error)
        })
        .await?;

        Ok(())
    }
}

#[async_trait]
impl FilmRepository for DynamoFilmRepository {
    async fn list(&self) -> Result<Vec<Film>, FilmError> {
        let client = self.db.client();
        let table_name = self.db.table_name();
        let page_limit = self.page_limit;

        let films = collect_pages(|start_key| async move {
            let output = trace_dynamodb_operation(table_name, "scan", || async move {
                client
                    .scan()
                    .table_name(table_name)
                    .set_exclusive_start_key(start_key)
                    .set_limit(page_limit)
                    .send()
                    .await
                    .map_err(dynamodb_error)
            })
            .await?;

            let page: Vec<Film> = serde_dynamo::from_items(output.items.unwrap_or_default())
                .map_err(FilmError::item_conversion)?;
            Ok((page, output.last_evaluated_key))
        })
        .await?;

        debug!("映画スキャン完了: {} 件", films.len());
        Ok(films)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Film>, FilmError> {
        let client = self.db.client();
        let table_name = self.db.table_name();
        let key = AttributeValue::S(id.to_string());

        let output = trace_dynamodb_operation(table_name, "get_item", || async move {
            client
                .get_item()
                .table_name(table_name)
                .key(ID_ATTRIBUTE, key)
                .send()
                .await
                .map_err(dynamodb_error)
        })
        .await?;

        let Some(item) = output.item else {
            return Ok(None);
        };
        let film = serde_dynamo::from_item(item).map_err(FilmError::item_conversion)?;
        Ok(Some(film))
    }

    async fn add(&self, film: Film) -> Result<Film, FilmError> {
        self.put_film(&film, "put_item").await?;
        Ok(film)
    }

    async fn update(&self, film: &Film) -> Result<(), FilmError> {
        self.put_film(film, "put_item").await
    }

    async fn delete(&self, id: &str) -> Result<(), FilmError> {
        let client = self.db.client();
        let table_name = self.db.table_name();
        let key = AttributeValue::S(id.to_string());

        trace_dynamodb_operation(table_name, "delete_item", || async move {
            client
                .delete_item()
                .table_name(table_name)
                .key(ID_ATTRIBUTE, key)
                .send()
                .await
                .map_err(dynamodb_error)
        })
        .await?;

        Ok(())
    }
}

/// `LastEvaluatedKey` が返らなくなるまでページを読み進め、結果をつなげる
///
/// `fetch_page` は開始キーを受け取り、そのページの要素と次の開始キーを返す。
/// 空のキーは最終ページとして扱う。
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, FilmError>
where
    F: FnMut(Option<ScanKey>) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<ScanKey>), FilmError>>,
{
    let mut items = Vec::new();
    let mut start_key = None;

    loop {
        let (page, last_key) = fetch_page(start_key.take()).await?;
        items.extend(page);

        match last_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => return Ok(items),
        }
    }
}

fn dynamodb_error(error: impl std::error::Error) -> FilmError {
    FilmError::dynamodb(DisplayErrorContext(error))
}
