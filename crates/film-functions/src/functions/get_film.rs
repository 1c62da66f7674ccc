use crate::request::require_film_id;
use crate::response::{empty_response, json_response};
use crate::FilmFunction;
use async_trait::async_trait;
use infrastructure::FilmRepository;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use lambda_runtime::Context;
use shared::AppError;
use std::sync::Arc;
use tracing::info;

/// ID を指定して映画を1件返すハンドラー
pub struct GetFilm {
    repository: Arc<dyn FilmRepository>,
}

impl GetFilm {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FilmFunction for GetFilm {
    fn name(&self) -> &'static str {
        "GetFilm"
    }

    async fn perform(
        &self,
        request: Request,
        _context: Context,
    ) -> Result<Response<Body>, AppError> {
        let film_id = require_film_id(&request)?;
        info!("映画を取得: {}", film_id);

        match self.repository.get_by_id(&film_id).await? {
            Some(film) => {
                info!("映画が見つかりました: {}", film_id);
                json_response(&film)
            }
            None => {
                info!("映画が見つかりません: {}", film_id);
                Ok(empty_response(StatusCode::NOT_FOUND))
            }
        }
    }
}
