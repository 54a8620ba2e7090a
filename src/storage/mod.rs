//! Entity storage
//!
//! The service layer talks to films and users through [`EntityStorage`], so the
//! in-memory maps here can be replaced by a persistent backend without
//! touching call sites.

mod memory;

pub use memory::InMemoryStorage;

use crate::{
    error::AppResult,
    models::{Entity, EntityId},
};

/// Storage contract for one entity type
pub trait EntityStorage<T: Entity>: Send + Sync {
    /// Assigns the next identifier, stores the entity and returns the stored copy
    fn create(&mut self, entity: T) -> T;

    /// Overwrites the mutable fields of the record with `entity.id`
    ///
    /// Fails with a validation error for ids below 1 and with not-found when
    /// no such record exists.
    fn update(&mut self, entity: T) -> AppResult<T>;

    /// Looks a record up by id
    fn get(&self, id: EntityId) -> AppResult<&T>;

    /// All records in ascending id order
    fn all(&self) -> Vec<&T>;

    /// Removes the record and returns it
    fn delete(&mut self, id: EntityId) -> AppResult<T>;

    fn contains(&self, id: EntityId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
