use super::{today, Filmorate};
use crate::{
    error::{AppError, AppResult},
    models::{EntityId, User},
    validation,
};

impl Filmorate {
    pub fn create_user(&mut self, mut user: User) -> AppResult<User> {
        validation::validate_user(&user, today())?;
        validation::validate_email_unique(&user.email, None, self.users.all())?;
        fill_display_name(&mut user);

        let user = self.users.create(user);
        tracing::info!(user_id = user.id, login = %user.login, "User created");
        Ok(user)
    }

    pub fn update_user(&mut self, mut user: User) -> AppResult<User> {
        validation::validate_id(user.id)?;
        self.users.get(user.id)?;
        validation::validate_user(&user, today())?;
        validation::validate_email_unique(&user.email, Some(user.id), self.users.all())?;
        fill_display_name(&mut user);

        let user = self.users.update(user)?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    pub fn get_user(&self, user_id: EntityId) -> AppResult<&User> {
        self.users.get(user_id)
    }

    pub fn all_users(&self) -> Vec<&User> {
        self.users.all()
    }

    /// Removes the user along with their friendships and likes
    pub fn delete_user(&mut self, user_id: EntityId) -> AppResult<User> {
        let user = self.users.delete(user_id)?;
        self.graph.forget_user(user_id);
        tracing::info!(user_id, "User deleted");
        Ok(user)
    }

    pub fn add_friend(&mut self, user_id: EntityId, friend_id: EntityId) -> AppResult<()> {
        self.ensure_user(user_id)?;
        self.ensure_user(friend_id)?;
        self.graph.add_friendship(user_id, friend_id)?;
        tracing::info!(user_id, friend_id, "Friend added");
        Ok(())
    }

    /// Ends a friendship; removing a friendship that does not exist is a no-op
    pub fn remove_friend(&mut self, user_id: EntityId, friend_id: EntityId) -> AppResult<()> {
        self.ensure_user(user_id)?;
        self.ensure_user(friend_id)?;
        if self.graph.remove_friendship(user_id, friend_id) {
            tracing::info!(user_id, friend_id, "Friend removed");
        } else {
            tracing::debug!(user_id, friend_id, "Users were not friends");
        }
        Ok(())
    }

    /// Ids of the user's friends
    pub fn friend_ids(&self, user_id: EntityId) -> Vec<EntityId> {
        self.graph.friends_of(user_id)
    }

    pub fn friends_of(&self, user_id: EntityId) -> AppResult<Vec<&User>> {
        self.ensure_user(user_id)?;
        self.resolve_users(self.graph.friends_of(user_id))
    }

    /// Friends shared by both users; an empty intersection is reported as not found
    pub fn common_friends(&self, user_id: EntityId, other_id: EntityId) -> AppResult<Vec<&User>> {
        self.ensure_user(user_id)?;
        self.ensure_user(other_id)?;

        let common = self.graph.common_friends(user_id, other_id);
        if common.is_empty() {
            return Err(AppError::not_found(format!(
                "Users with id={} and id={} have no common friends",
                user_id, other_id
            )));
        }
        self.resolve_users(common)
    }

    fn ensure_user(&self, user_id: EntityId) -> AppResult<()> {
        validation::validate_id(user_id)?;
        self.users.get(user_id).map(|_| ())
    }

    fn resolve_users(&self, ids: Vec<EntityId>) -> AppResult<Vec<&User>> {
        ids.into_iter().map(|id| self.users.get(id)).collect()
    }
}

/// Uses the login as display name when none was given
fn fill_display_name(user: &mut User) {
    if user.name.trim().is_empty() {
        tracing::debug!(login = %user.login, "Blank display name replaced with login");
        user.name = user.login.clone();
    }
}
