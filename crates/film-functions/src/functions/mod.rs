mod add_film;
mod get_film;
mod get_films;
mod remove_film;
mod update_film;

pub use add_film::AddFilm;
pub use get_film::GetFilm;
pub use get_films::GetFilms;
pub use remove_film::RemoveFilm;
pub use update_film::UpdateFilm;
