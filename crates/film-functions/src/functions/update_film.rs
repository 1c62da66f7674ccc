use crate::request::{film_input_from_request, require_film_id};
use crate::response::empty_response;
use crate::FilmFunction;
use async_trait::async_trait;
use infrastructure::FilmRepository;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use lambda_runtime::Context;
use shared::AppError;
use std::sync::Arc;
use tracing::info;

/// 既存の映画の編集可能な項目を上書きするハンドラー
///
/// Id と CreatedTimestamp はリクエストボディに含まれていても変更しない。
pub struct UpdateFilm {
    repository: Arc<dyn FilmRepository>,
}

impl UpdateFilm {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FilmFunction for UpdateFilm {
    fn name(&self) -> &'static str {
        "UpdateFilm"
    }

    async fn perform(
        &self,
        request: Request,
        _context: Context,
    ) -> Result<Response<Body>, AppError> {
        let film_id = require_film_id(&request)?;
        let input = film_input_from_request(&request)?;

        let Some(mut film) = self.repository.get_by_id(&film_id).await? else {
            info!("更新対象の映画が見つかりません: {}", film_id);
            return Ok(empty_response(StatusCode::NOT_FOUND));
        };

        info!("映画を更新: {}", film_id);
        film.apply(input);
        self.repository.update(&film).await?;

        Ok(empty_response(StatusCode::OK))
    }
}
