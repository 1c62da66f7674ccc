use film_functions::{lambda, FilmRouter};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::start(FilmRouter::new).await
}
