use film_functions::{lambda, UpdateFilm};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::start(UpdateFilm::new).await
}
