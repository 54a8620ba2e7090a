use super::Filmorate;
use crate::{
    error::AppResult,
    models::{EntityId, Film},
    ranking, validation,
};

impl Filmorate {
    pub fn create_film(&mut self, film: Film) -> AppResult<Film> {
        validation::validate_film(&film)?;

        let film = self.films.create(film);
        tracing::info!(film_id = film.id, name = %film.name, "Film created");
        Ok(film)
    }

    pub fn update_film(&mut self, film: Film) -> AppResult<Film> {
        validation::validate_id(film.id)?;
        self.films.get(film.id)?;
        validation::validate_film(&film)?;

        let film = self.films.update(film)?;
        tracing::info!(film_id = film.id, "Film updated");
        Ok(film)
    }

    pub fn get_film(&self, film_id: EntityId) -> AppResult<&Film> {
        self.films.get(film_id)
    }

    pub fn all_films(&self) -> Vec<&Film> {
        self.films.all()
    }

    /// Removes the film together with its likes
    pub fn delete_film(&mut self, film_id: EntityId) -> AppResult<Film> {
        let film = self.films.delete(film_id)?;
        self.graph.forget_film(film_id);
        tracing::info!(film_id, "Film deleted");
        Ok(film)
    }

    pub fn add_like(&mut self, film_id: EntityId, user_id: EntityId) -> AppResult<()> {
        self.ensure_like_parties(film_id, user_id)?;
        self.graph.add_like(film_id, user_id)?;
        tracing::info!(film_id, user_id, "Like added");
        Ok(())
    }

    pub fn remove_like(&mut self, film_id: EntityId, user_id: EntityId) -> AppResult<()> {
        self.ensure_like_parties(film_id, user_id)?;
        self.graph.remove_like(film_id, user_id)?;
        tracing::info!(film_id, user_id, "Like removed");
        Ok(())
    }

    /// Ids of users who liked the film
    pub fn likes_of(&self, film_id: EntityId) -> Vec<EntityId> {
        self.graph.likes_of(film_id)
    }

    /// Up to `count` films, most liked first
    pub fn popular_films(&self, count: i64) -> AppResult<Vec<&Film>> {
        let limit = validation::validate_limit(count)?;
        Ok(ranking::popular_films(self.films.all(), &self.graph, limit))
    }

    fn ensure_like_parties(&self, film_id: EntityId, user_id: EntityId) -> AppResult<()> {
        validation::validate_id(film_id)?;
        validation::validate_id(user_id)?;
        self.films.get(film_id)?;
        self.users.get(user_id)?;
        Ok(())
    }
}
