//! Service layer
//!
//! [`Filmorate`] owns both entity stores and the relationship graph and is
//! the only place where they are mutated together. Callers are expected to
//! hold it behind a single lock (see `api::AppState`) so that two-sided
//! updates such as friendships are never observed half-applied.

mod films;
mod users;

use chrono::{NaiveDate, Utc};

use crate::{
    graph::RelationshipGraph,
    models::{Film, User},
    storage::{EntityStorage, InMemoryStorage},
};

pub struct Filmorate {
    films: Box<dyn EntityStorage<Film>>,
    users: Box<dyn EntityStorage<User>>,
    graph: RelationshipGraph,
}

impl Default for Filmorate {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Filmorate {
    /// Creates a service over the given stores with an empty relationship graph
    pub fn new(films: Box<dyn EntityStorage<Film>>, users: Box<dyn EntityStorage<User>>) -> Self {
        Self {
            films,
            users,
            graph: RelationshipGraph::new(),
        }
    }

    /// Creates a service backed by empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(InMemoryStorage::<Film>::new()),
            Box::new(InMemoryStorage::<User>::new()),
        )
    }

    pub fn graph(&self) -> &RelationshipGraph {
        &self.graph
    }
}

/// Current date used for birthday checks
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
