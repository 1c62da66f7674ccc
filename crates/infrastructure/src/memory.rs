use crate::FilmRepository;
use async_trait::async_trait;
use domain::{Film, FilmError};
use tokio::sync::RwLock;

/// メモリ上で動く映画リポジトリ（開発/テスト用）
///
/// 一覧は保存順に返す。
#[derive(Debug, Default)]
pub struct InMemoryFilmRepository {
    films: RwLock<Vec<Film>>,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_films(films: Vec<Film>) -> Self {
        Self {
            films: RwLock::new(films),
        }
    }

    pub async fn len(&self) -> usize {
        self.films.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.films.read().await.is_empty()
    }

    async fn put(&self, film: Film) {
        let mut films = self.films.write().await;
        match films.iter_mut().find(|stored| stored.id == film.id) {
            Some(stored) => *stored = film,
            None => films.push(film),
        }
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn list(&self) -> Result<Vec<Film>, FilmError> {
        Ok(self.films.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Film>, FilmError> {
        let films = self.films.read().await;
        Ok(films.iter().find(|film| film.id.as_str() == id).cloned())
    }

    async fn add(&self, film: Film) -> Result<Film, FilmError> {
        self.put(film.clone()).await;
        Ok(film)
    }

    async fn update(&self, film: &Film) -> Result<(), FilmError> {
        self.put(film.clone()).await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), FilmError> {
        self.films
            .write()
            .await
            .retain(|film| film.id.as_str() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::FilmInput;

    fn film(title: &str) -> Film {
        Film::create(
            FilmInput {
                title: title.to_string(),
                director: "Nolan".to_string(),
                release_date: None,
                rating: 8,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_add_then_get_by_id() {
        let repository = InMemoryFilmRepository::new();
        let added = repository.add(film("Memento")).await.unwrap();

        let found = repository.get_by_id(added.id.as_str()).await.unwrap();
        assert_eq!(found, Some(added));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let repository = InMemoryFilmRepository::new();
        assert_eq!(repository.get_by_id("nonexistent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repository = InMemoryFilmRepository::new();
        assert!(repository.list().await.unwrap().is_empty());

        for title in ["Following", "Memento", "Insomnia"] {
            repository.add(film(title)).await.unwrap();
        }

        let titles: Vec<String> = repository
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|film| film.title)
            .collect();
        assert_eq!(titles, vec!["Following", "Memento", "Insomnia"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_and_upserts() {
        let repository = InMemoryFilmRepository::new();
        let mut stored = repository.add(film("Tenet")).await.unwrap();

        stored.rating = 6;
        repository.update(&stored).await.unwrap();
        assert_eq!(repository.len().await, 1);
        let updated = repository.get_by_id(stored.id.as_str()).await.unwrap();
        assert_eq!(updated.map(|film| film.rating), Some(6));

        let unseen = film("Oppenheimer");
        repository.update(&unseen).await.unwrap();
        assert_eq!(repository.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repository = InMemoryFilmRepository::with_films(vec![film("Dunkirk")]);
        let id = repository.list().await.unwrap()[0].id.clone();

        repository.delete(id.as_str()).await.unwrap();
        assert!(repository.is_empty().await);

        repository.delete(id.as_str()).await.unwrap();
        repository.delete("never-existed").await.unwrap();
        assert!(repository.is_empty().await);
    }
}
