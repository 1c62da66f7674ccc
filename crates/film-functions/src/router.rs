use crate::request::has_film_id_parameter;
use crate::response::{method_not_allowed_response, preflight_response};
use crate::{AddFilm, FilmFunction, GetFilm, GetFilms, RemoveFilm, UpdateFilm};
use async_trait::async_trait;
use infrastructure::FilmRepository;
use lambda_http::http::Method;
use lambda_http::{Body, Request, Response};
use lambda_runtime::Context;
use shared::AppError;
use std::sync::Arc;
use tracing::info;

/// 5つの映画ハンドラーを1つの Lambda にまとめるルーター
///
/// | メソッド | 条件 | 振り分け先 |
/// |---|---|---|
/// | GET | Id キーあり（空でも） | [`GetFilm`] |
/// | GET | Id キーなし | [`GetFilms`] |
/// | POST | | [`AddFilm`] |
/// | PUT | | [`UpdateFilm`] |
/// | DELETE | | [`RemoveFilm`] |
/// | OPTIONS | | CORS プリフライト |
pub struct FilmRouter {
    get_films: GetFilms,
    get_film: GetFilm,
    add_film: AddFilm,
    update_film: UpdateFilm,
    remove_film: RemoveFilm,
}

impl FilmRouter {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self {
            get_films: GetFilms::new(repository.clone()),
            get_film: GetFilm::new(repository.clone()),
            add_film: AddFilm::new(repository.clone()),
            update_film: UpdateFilm::new(repository.clone()),
            remove_film: RemoveFilm::new(repository),
        }
    }

    fn route(&self, request: &Request) -> Option<&dyn FilmFunction> {
        let function: &dyn FilmFunction = match *request.method() {
            Method::GET if has_film_id_parameter(request) => &self.get_film,
            Method::GET => &self.get_films,
            Method::POST => &self.add_film,
            Method::PUT => &self.update_film,
            Method::DELETE => &self.remove_film,
            _ => return None,
        };
        Some(function)
    }
}

#[async_trait]
impl FilmFunction for FilmRouter {
    fn name(&self) -> &'static str {
        "FilmApi"
    }

    async fn perform(
        &self,
        request: Request,
        context: Context,
    ) -> Result<Response<Body>, AppError> {
        if request.method() == Method::OPTIONS {
            return Ok(preflight_response());
        }

        match self.route(&request) {
            Some(function) => {
                info!(
                    method = %request.method(),
                    handler = function.name(),
                    "リクエストを振り分け"
                );
                function.perform(request, context).await
            }
            None => {
                info!(method = %request.method(), "未対応のメソッド");
                Ok(method_not_allowed_response())
            }
        }
    }
}
