pub mod errors;
pub mod film;

pub use errors::*;
pub use film::*;
