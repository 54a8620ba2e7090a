//! Likes and friendships between stored entities.
//!
//! The graph only tracks identifiers. Whether an id refers to a live film or
//! user is the service layer's concern; the graph reports errors about the
//! relationships themselves (already liked, not liked, already friends).

use std::collections::{BTreeSet, HashMap};

use crate::{
    error::{AppError, AppResult},
    models::EntityId,
};

#[derive(Debug, Default, Clone)]
pub struct RelationshipGraph {
    /// film id -> ids of users who liked it
    likes: HashMap<EntityId, BTreeSet<EntityId>>,
    /// user id -> ids of that user's friends, kept symmetric
    friends: HashMap<EntityId, BTreeSet<EntityId>>,
}

impl RelationshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_like(&mut self, film_id: EntityId, user_id: EntityId) -> AppResult<()> {
        let likes = self.likes.entry(film_id).or_default();
        if !likes.insert(user_id) {
            return Err(AppError::duplicate(format!(
                "User with id={} already liked film with id={}",
                user_id, film_id
            )));
        }
        Ok(())
    }

    pub fn remove_like(&mut self, film_id: EntityId, user_id: EntityId) -> AppResult<()> {
        let removed = self
            .likes
            .get_mut(&film_id)
            .is_some_and(|likes| likes.remove(&user_id));
        if !removed {
            return Err(AppError::not_found(format!(
                "User with id={} has not liked film with id={}",
                user_id, film_id
            )));
        }
        Ok(())
    }

    pub fn like_count(&self, film_id: EntityId) -> usize {
        self.likes.get(&film_id).map_or(0, BTreeSet::len)
    }

    /// Ids of users who liked the film, ascending
    pub fn likes_of(&self, film_id: EntityId) -> Vec<EntityId> {
        self.likes
            .get(&film_id)
            .map(|likes| likes.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Records a friendship in both directions
    ///
    /// Both sets are checked before either is touched, so a failed call leaves
    /// the graph unchanged.
    pub fn add_friendship(&mut self, user_id: EntityId, friend_id: EntityId) -> AppResult<()> {
        if user_id == friend_id {
            return Err(AppError::validation(format!(
                "User with id={} cannot befriend themselves",
                user_id
            )));
        }
        if self.are_friends(user_id, friend_id) {
            return Err(AppError::duplicate(format!(
                "User with id={} is already a friend of user with id={}",
                friend_id, user_id
            )));
        }

        self.friends.entry(user_id).or_default().insert(friend_id);
        self.friends.entry(friend_id).or_default().insert(user_id);
        Ok(())
    }

    /// Drops a friendship in both directions, returns whether one existed
    pub fn remove_friendship(&mut self, user_id: EntityId, friend_id: EntityId) -> bool {
        let forward = self
            .friends
            .get_mut(&user_id)
            .is_some_and(|friends| friends.remove(&friend_id));
        let backward = self
            .friends
            .get_mut(&friend_id)
            .is_some_and(|friends| friends.remove(&user_id));
        debug_assert_eq!(forward, backward, "friendship must be symmetric");
        forward
    }

    pub fn are_friends(&self, user_id: EntityId, friend_id: EntityId) -> bool {
        self.friends
            .get(&user_id)
            .is_some_and(|friends| friends.contains(&friend_id))
    }

    /// Ids of the user's friends, ascending
    pub fn friends_of(&self, user_id: EntityId) -> Vec<EntityId> {
        self.friends
            .get(&user_id)
            .map(|friends| friends.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Ids present in both users' friend sets, ascending
    pub fn common_friends(&self, user_id: EntityId, other_id: EntityId) -> Vec<EntityId> {
        match (self.friends.get(&user_id), self.friends.get(&other_id)) {
            (Some(left), Some(right)) => left.intersection(right).copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Drops every like recorded for a deleted film
    pub fn forget_film(&mut self, film_id: EntityId) {
        self.likes.remove(&film_id);
    }

    /// Removes a deleted user from all friend and like sets
    pub fn forget_user(&mut self, user_id: EntityId) {
        if let Some(friends) = self.friends.remove(&user_id) {
            for friend_id in friends {
                if let Some(theirs) = self.friends.get_mut(&friend_id) {
                    theirs.remove(&user_id);
                }
            }
        }
        for likes in self.likes.values_mut() {
            likes.remove(&user_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_and_count() {
        let mut graph = RelationshipGraph::new();
        graph.add_like(1, 10).unwrap();
        graph.add_like(1, 11).unwrap();

        assert_eq!(graph.like_count(1), 2);
        assert_eq!(graph.like_count(2), 0);
        assert_eq!(graph.likes_of(1), vec![10, 11]);
    }

    #[test]
    fn test_duplicate_like_leaves_set_unchanged() {
        let mut graph = RelationshipGraph::new();
        graph.add_like(1, 10).unwrap();

        let err = graph.add_like(1, 10).unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
        assert_eq!(graph.like_count(1), 1);
    }

    #[test]
    fn test_remove_missing_like_is_not_found() {
        let mut graph = RelationshipGraph::new();
        assert!(matches!(graph.remove_like(1, 10), Err(AppError::NotFound(_))));

        graph.add_like(1, 10).unwrap();
        graph.remove_like(1, 10).unwrap();
        assert_eq!(graph.like_count(1), 0);
        assert!(matches!(graph.remove_like(1, 10), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_likes_are_not_symmetric() {
        let mut graph = RelationshipGraph::new();
        graph.add_like(1, 2).unwrap();

        assert_eq!(graph.like_count(2), 0);
        assert!(graph.friends_of(2).is_empty());
        assert!(graph.friends_of(1).is_empty());
    }

    #[test]
    fn test_friendship_is_symmetric() {
        let mut graph = RelationshipGraph::new();
        graph.add_friendship(1, 2).unwrap();

        assert_eq!(graph.friends_of(1), vec![2]);
        assert_eq!(graph.friends_of(2), vec![1]);

        assert!(graph.remove_friendship(2, 1));
        assert!(graph.friends_of(1).is_empty());
        assert!(graph.friends_of(2).is_empty());
    }

    #[test]
    fn test_duplicate_friendship_either_direction() {
        let mut graph = RelationshipGraph::new();
        graph.add_friendship(1, 2).unwrap();

        assert!(matches!(graph.add_friendship(1, 2), Err(AppError::Duplicate(_))));
        assert!(matches!(graph.add_friendship(2, 1), Err(AppError::Duplicate(_))));
        assert_eq!(graph.friends_of(1), vec![2]);
    }

    #[test]
    fn test_self_friendship_rejected() {
        let mut graph = RelationshipGraph::new();
        assert!(matches!(graph.add_friendship(3, 3), Err(AppError::Validation(_))));
        assert!(graph.friends_of(3).is_empty());
    }

    #[test]
    fn test_remove_absent_friendship_is_noop() {
        let mut graph = RelationshipGraph::new();
        assert!(!graph.remove_friendship(1, 2));
    }

    #[test]
    fn test_common_friends() {
        let mut graph = RelationshipGraph::new();
        graph.add_friendship(1, 3).unwrap();
        graph.add_friendship(1, 4).unwrap();
        graph.add_friendship(2, 4).unwrap();
        graph.add_friendship(2, 3).unwrap();
        graph.add_friendship(2, 5).unwrap();

        assert_eq!(graph.common_friends(1, 2), vec![3, 4]);
        assert!(graph.common_friends(1, 9).is_empty());
    }

    #[test]
    fn test_forget_user_cascades() {
        let mut graph = RelationshipGraph::new();
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(3, 2).unwrap();
        graph.add_like(7, 2).unwrap();
        graph.add_like(7, 1).unwrap();

        graph.forget_user(2);

        assert!(graph.friends_of(1).is_empty());
        assert!(graph.friends_of(3).is_empty());
        assert!(graph.friends_of(2).is_empty());
        assert_eq!(graph.likes_of(7), vec![1]);
    }

    #[test]
    fn test_forget_film() {
        let mut graph = RelationshipGraph::new();
        graph.add_like(7, 1).unwrap();
        graph.forget_film(7);
        assert_eq!(graph.like_count(7), 0);
    }
}
