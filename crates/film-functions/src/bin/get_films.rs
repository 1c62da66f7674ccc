use film_functions::{lambda, GetFilms};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::start(GetFilms::new).await
}
