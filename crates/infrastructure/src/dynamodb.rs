use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{config::Region, Client};
use shared::Config;
use tracing::info;

/// DynamoDB クライアントと対象テーブル名の組
#[derive(Debug, Clone)]
pub struct DynamoDbClient {
    client: Client,
    table_name: String,
}

impl DynamoDbClient {
    pub async fn new(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.dynamodb_endpoint {
            info!(endpoint = %endpoint, "DynamoDBエンドポイントを上書きします");
            loader = loader.endpoint_url(endpoint);
        }
        let aws_config = loader.load().await;

        Self::from_client(Client::new(&aws_config), config.film_table.clone())
    }

    /// 構築済みのクライアントを使う（DynamoDB Local やテスト用）
    pub fn from_client(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}
