use film_functions::{lambda, AddFilm};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda::start(AddFilm::new).await
}
