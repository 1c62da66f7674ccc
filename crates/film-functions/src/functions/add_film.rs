use crate::request::film_input_from_request;
use crate::response::text_response;
use crate::FilmFunction;
use async_trait::async_trait;
use chrono::Utc;
use domain::Film;
use infrastructure::FilmRepository;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use lambda_runtime::Context;
use shared::AppError;
use std::sync::Arc;
use tracing::info;

/// 映画を登録し、採番した ID を返すハンドラー
pub struct AddFilm {
    repository: Arc<dyn FilmRepository>,
}

impl AddFilm {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FilmFunction for AddFilm {
    fn name(&self) -> &'static str {
        "AddFilm"
    }

    async fn perform(
        &self,
        request: Request,
        _context: Context,
    ) -> Result<Response<Body>, AppError> {
        let input = film_input_from_request(&request)?;

        // ID と作成日時はサーバー側で決める
        let film = Film::create(input, Utc::now());
        info!("映画を登録: {}", film.id);

        let film = self.repository.add(film).await?;

        Ok(text_response(StatusCode::OK, film.id.to_string()))
    }
}
