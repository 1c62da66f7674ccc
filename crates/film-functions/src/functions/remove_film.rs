use crate::request::require_film_id;
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

/// 映画を削除するハンドラー（存在しない ID でも 200）
pub struct RemoveFilm {
    repository: Arc<dyn FilmRepository>,
}

impl RemoveFilm {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FilmFunction for RemoveFilm {
    fn name(&self) -> &'static str {
        "RemoveFilm"
    }

    async fn perform(
        &self,
        request: Request,
        _context: Context,
    ) -> Result<Response<Body>, AppError> {
        let film_id = require_film_id(&request)?;
        info!("映画を削除: {}", film_id);

        self.repository.delete(&film_id).await?;

        Ok(empty_response(StatusCode::OK))
    }
}
