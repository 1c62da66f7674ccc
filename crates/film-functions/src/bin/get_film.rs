use film_functions::{lambda, GetFilm};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::start(GetFilm::new).await
}
