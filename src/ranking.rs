use std::cmp::Reverse;

use crate::{graph::RelationshipGraph, models::Film};

/// Number of films returned when the caller does not ask for a count
pub const DEFAULT_POPULAR_COUNT: i64 = 10;

/// Orders films by descending like count and keeps the first `limit`
///
/// The sort is stable, so films with equal counts keep the order they were
/// passed in (ascending id when fed straight from the store).
pub fn popular_films<'a>(
    films: Vec<&'a Film>,
    graph: &RelationshipGraph,
    limit: usize,
) -> Vec<&'a Film> {
    let mut ranked = films;
    ranked.sort_by_key(|film| Reverse(graph.like_count(film.id)));
    ranked.truncate(limit);
    ranked
}
