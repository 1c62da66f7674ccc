use film_functions::{lambda, RemoveFilm};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::start(RemoveFilm::new).await
}
