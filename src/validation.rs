//! Field checks run before any store or graph mutation.
//!
//! Every function here is pure: it inspects its arguments and either returns
//! `Ok(())` or a validation error carrying a message meant for the client.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{
    error::{AppError, AppResult},
    models::{EntityId, Film, User},
};

/// Longest description a film may carry, in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Date of the first public film screening
pub static EARLIEST_RELEASE_DATE: LazyLock<NaiveDate> = LazyLock::new(|| {
    NaiveDate::from_ymd_opt(1895, 12, 28).expect("earliest release date is valid")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .expect("email pattern is valid")
});

pub fn validate_id(id: EntityId) -> AppResult<()> {
    if id < 1 {
        return Err(AppError::validation(format!("Invalid id={}", id)));
    }
    Ok(())
}

pub fn validate_film_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Film name must not be empty"));
    }
    Ok(())
}

pub fn validate_film_description(description: &str) -> AppResult<()> {
    let len = description.chars().count();
    if len == 0 || len > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation(format!(
            "Film description must be between 1 and {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(())
}

pub fn validate_release_date(release_date: NaiveDate) -> AppResult<()> {
    if release_date < *EARLIEST_RELEASE_DATE {
        return Err(AppError::validation(format!(
            "Film release date must not be earlier than {}",
            *EARLIEST_RELEASE_DATE
        )));
    }
    Ok(())
}

pub fn validate_duration(duration: i64) -> AppResult<()> {
    if duration <= 0 {
        return Err(AppError::validation("Film duration must be positive"));
    }
    Ok(())
}

/// Runs every film field check
pub fn validate_film(film: &Film) -> AppResult<()> {
    validate_film_name(&film.name)?;
    validate_film_description(&film.description)?;
    validate_release_date(film.release_date)?;
    validate_duration(film.duration)
}

pub fn validate_email_format(email: &str) -> AppResult<()> {
    if email.trim().is_empty() {
        return Err(AppError::validation("User email must not be empty"));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(AppError::validation(format!("Invalid email: {}", email)));
    }
    Ok(())
}

/// Fails when a user other than `owner` already holds `email`
///
/// `owner` is `None` for a user that has not been stored yet.
pub fn validate_email_unique<'a>(
    email: &str,
    owner: Option<EntityId>,
    existing: impl IntoIterator<Item = &'a User>,
) -> AppResult<()> {
    let taken = existing
        .into_iter()
        .any(|user| user.email == email && Some(user.id) != owner);
    if taken {
        return Err(AppError::validation(format!(
            "Email {} is already in use",
            email
        )));
    }
    Ok(())
}

pub fn validate_login(login: &str) -> AppResult<()> {
    if login.is_empty() || login.chars().any(char::is_whitespace) {
        return Err(AppError::validation(
            "User login must not be empty or contain whitespace",
        ));
    }
    Ok(())
}

pub fn validate_birthday(birthday: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if birthday > today {
        return Err(AppError::validation("User birthday must not be in the future"));
    }
    Ok(())
}

/// Runs the per-field user checks; email uniqueness needs the store and is checked separately
pub fn validate_user(user: &User, today: NaiveDate) -> AppResult<()> {
    validate_email_format(&user.email)?;
    validate_login(&user.login)?;
    validate_birthday(user.birthday, today)
}

/// Validates a requested ranking size
pub fn validate_limit(limit: i64) -> AppResult<usize> {
    usize::try_from(limit)
        .map_err(|_| AppError::validation(format!("Count must not be negative, got {}", limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user(id: EntityId, email: &str) -> User {
        let mut user = User::new(email, "login", "", date(2000, 10, 10));
        user.id = id;
        user
    }

    #[test]
    fn test_film_name() {
        assert!(validate_film_name("Film1").is_ok());
        assert!(validate_film_name("").is_err());
        assert!(validate_film_name("   ").is_err());
    }

    #[test]
    fn test_description_bounds_count_characters() {
        assert!(validate_film_description("d").is_ok());
        assert!(validate_film_description(&"a".repeat(200)).is_ok());
        assert!(validate_film_description(&"a".repeat(201)).is_err());
        assert!(validate_film_description("").is_err());
        // 200 two-byte characters still fit
        assert!(validate_film_description(&"ф".repeat(200)).is_ok());
    }

    #[test]
    fn test_release_date_boundary() {
        assert!(validate_release_date(date(1895, 12, 28)).is_ok());
        assert!(validate_release_date(date(1895, 12, 27)).is_err());
        assert!(validate_release_date(date(1800, 10, 10)).is_err());
    }

    #[test]
    fn test_duration() {
        assert!(validate_duration(1).is_ok());
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(-5).is_err());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email_format("example@ex.ru").is_ok());
        assert!(validate_email_format("first.last-1@mail.example.com").is_ok());
        assert!(validate_email_format("example.ex@ru").is_err());
        assert!(validate_email_format("no-at-sign.ru").is_err());
        assert!(validate_email_format("").is_err());
    }

    #[test]
    fn test_email_format_is_ascii_only() {
        assert!(validate_email_format("юзер@почта.рф").is_err());
        assert!(validate_email_format("юзер@mail.ru").is_err());
        assert!(validate_email_format("user@почта.ru").is_err());
    }

    #[test]
    fn test_email_unique_allows_owner() {
        let existing = vec![user(1, "a@ex.ru"), user(2, "b@ex.ru")];

        assert!(validate_email_unique("a@ex.ru", Some(1), &existing).is_ok());
        assert!(validate_email_unique("a@ex.ru", Some(2), &existing).is_err());
        assert!(validate_email_unique("a@ex.ru", None, &existing).is_err());
        assert!(validate_email_unique("c@ex.ru", None, &existing).is_ok());
    }

    #[test]
    fn test_login() {
        assert!(validate_login("user1").is_ok());
        assert!(validate_login("").is_err());
        assert!(validate_login("us er").is_err());
        assert!(validate_login("user\t1").is_err());
    }

    #[test]
    fn test_birthday_today_is_allowed() {
        let today = date(2024, 5, 1);
        assert!(validate_birthday(today, today).is_ok());
        assert!(validate_birthday(date(2024, 5, 2), today).is_err());
    }

    #[test]
    fn test_limit() {
        assert_eq!(validate_limit(10).unwrap(), 10);
        assert_eq!(validate_limit(0).unwrap(), 0);
        assert!(matches!(validate_limit(-1), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_id() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(0).is_err());
        assert!(validate_id(-3).is_err());
    }
}
