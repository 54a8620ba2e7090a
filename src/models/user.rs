use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};
use crate::error::AppError;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Assigned by the store on creation
    pub id: EntityId,
    /// Unique across all users
    pub email: String,
    pub login: String,
    /// Display name, falls back to the login when left blank
    pub name: String,
    pub birthday: NaiveDate,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        login: impl Into<String>,
        name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            email: email.into(),
            login: login.into(),
            name: name.into(),
            birthday,
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn overwrite_from(&mut self, other: Self) {
        self.email = other.email;
        self.login = other.login;
        self.name = other.name;
        self.birthday = other.birthday;
    }
}

/// User body accepted by `POST /users` and `PUT /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    pub id: Option<EntityId>,
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl TryFrom<UserRequest> for User {
    type Error = AppError;

    fn try_from(request: UserRequest) -> Result<Self, Self::Error> {
        let birthday = request
            .birthday
            .ok_or_else(|| AppError::validation("User birthday must be provided"))?;

        Ok(User {
            id: request.id.unwrap_or(0),
            email: request.email.unwrap_or_default(),
            login: request.login.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            birthday,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_name_leaves_it_blank() {
        let request: UserRequest = serde_json::from_str(
            r#"{"email": "example@ex.ru", "login": "user1", "birthday": "2000-10-10"}"#,
        )
        .unwrap();

        let user = User::try_from(request).unwrap();
        assert_eq!(user.id, 0);
        assert!(user.name.is_empty());
    }

    #[test]
    fn test_request_without_birthday_is_invalid() {
        let request: UserRequest =
            serde_json::from_str(r#"{"email": "example@ex.ru", "login": "user1"}"#).unwrap();

        assert!(matches!(
            User::try_from(request),
            Err(AppError::Validation(_))
        ));
    }
}
