use std::collections::BTreeMap;

use super::EntityStorage;
use crate::{
    error::{AppError, AppResult},
    models::{Entity, EntityId},
    validation,
};

/// Map-backed store, ordered by id so iteration follows insertion order
#[derive(Debug, Clone)]
pub struct InMemoryStorage<T> {
    records: BTreeMap<EntityId, T>,
}

impl<T> Default for InMemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryStorage<T> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Entity> InMemoryStorage<T> {
    fn next_id(&self) -> EntityId {
        self.records.keys().next_back().map_or(1, |max| max + 1)
    }

    fn not_found(id: EntityId) -> AppError {
        AppError::not_found(format!("{} with id={} not found", T::KIND, id))
    }
}

impl<T: Entity> EntityStorage<T> for InMemoryStorage<T> {
    fn create(&mut self, mut entity: T) -> T {
        let id = self.next_id();
        entity.set_id(id);
        self.records.insert(id, entity.clone());
        entity
    }

    fn update(&mut self, entity: T) -> AppResult<T> {
        let id = entity.id();
        validation::validate_id(id)?;

        let stored = self.records.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        stored.overwrite_from(entity);
        Ok(stored.clone())
    }

    fn get(&self, id: EntityId) -> AppResult<&T> {
        self.records.get(&id).ok_or_else(|| Self::not_found(id))
    }

    fn all(&self) -> Vec<&T> {
        self.records.values().collect()
    }

    fn delete(&mut self, id: EntityId) -> AppResult<T> {
        validation::validate_id(id)?;
        self.records.remove(&id).ok_or_else(|| Self::not_found(id))
    }

    fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::Film;

    fn film(name: &str) -> Film {
        Film::new(name, "d", NaiveDate::from_ymd_opt(2000, 10, 10).unwrap(), 120)
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = InMemoryStorage::new();
        let first = store.create(film("Film1"));
        let second = store.create(film("Film2"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_ignores_client_supplied_id() {
        let mut store = InMemoryStorage::new();
        let mut incoming = film("Film1");
        incoming.id = 42;

        assert_eq!(store.create(incoming).id, 1);
    }

    #[test]
    fn test_next_id_follows_max_existing_id() {
        let mut store = InMemoryStorage::new();
        store.create(film("Film1"));
        store.create(film("Film2"));
        store.create(film("Film3"));
        store.delete(2).unwrap();

        assert_eq!(store.create(film("Film4")).id, 4);
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut store = InMemoryStorage::new();
        let created = store.create(film("Film1"));

        let mut changed = created.clone();
        changed.name = "Renamed".to_string();
        let updated = store.update(changed).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(created.id).unwrap().name, "Renamed");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_round_trip_is_identity() {
        let mut store = InMemoryStorage::new();
        let created = store.create(film("Film1"));

        assert_eq!(store.update(created.clone()).unwrap(), created);
    }

    #[test]
    fn test_update_rejects_invalid_id() {
        let mut store: InMemoryStorage<Film> = InMemoryStorage::new();
        let err = store.update(film("Film1")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = InMemoryStorage::new();
        let mut unknown = film("Film1");
        unknown.id = 9;

        assert!(matches!(
            store.update(unknown),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store: InMemoryStorage<Film> = InMemoryStorage::new();
        let err = store.get(3).unwrap_err();
        assert_eq!(err, AppError::not_found("Film with id=3 not found"));
    }

    #[test]
    fn test_all_in_id_order() {
        let mut store = InMemoryStorage::new();
        store.create(film("A"));
        store.create(film("B"));
        store.create(film("C"));

        let names: Vec<&str> = store.all().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_delete() {
        let mut store = InMemoryStorage::new();
        store.create(film("A"));

        assert_eq!(store.delete(1).unwrap().name, "A");
        assert!(store.is_empty());
        assert!(matches!(store.delete(1), Err(AppError::NotFound(_))));
        assert!(matches!(store.delete(0), Err(AppError::Validation(_))));
    }
}
