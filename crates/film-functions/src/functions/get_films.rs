use crate::response::json_response;
use crate::FilmFunction;
use async_trait::async_trait;
use infrastructure::FilmRepository;
use lambda_http::{Body, Request, Response};
use lambda_runtime::Context;
use shared::AppError;
use std::sync::Arc;
use tracing::info;

/// 映画一覧を返すハンドラー
pub struct GetFilms {
    repository: Arc<dyn FilmRepository>,
}

impl GetFilms {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FilmFunction for GetFilms {
    fn name(&self) -> &'static str {
        "GetFilms"
    }

    async fn perform(
        &self,
        _request: Request,
        _context: Context,
    ) -> Result<Response<Body>, AppError> {
        info!("映画一覧を取得");

        let films = self.repository.list().await?;
        info!("映画が {} 件見つかりました", films.len());

        json_response(&films)
    }
}
