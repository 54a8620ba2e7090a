use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    models::{EntityId, Film, FilmRequest, User, UserRequest},
    ranking::DEFAULT_POPULAR_COUNT,
    services::Filmorate,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub likes: Vec<EntityId>,
}

impl FilmResponse {
    fn new(film: &Film, service: &Filmorate) -> Self {
        Self {
            id: film.id,
            name: film.name.clone(),
            description: film.description.clone(),
            release_date: film.release_date,
            duration: film.duration,
            likes: service.likes_of(film.id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: EntityId,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: Vec<EntityId>,
}

impl UserResponse {
    fn new(user: &User, service: &Filmorate) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            login: user.login.clone(),
            name: user.name.clone(),
            birthday: user.birthday,
            friends: service.friend_ids(user.id),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}

fn film_list(films: Vec<&Film>, service: &Filmorate) -> Vec<FilmResponse> {
    films
        .into_iter()
        .map(|film| FilmResponse::new(film, service))
        .collect()
}

fn user_list(users: Vec<&User>, service: &Filmorate) -> Vec<UserResponse> {
    users
        .into_iter()
        .map(|user| UserResponse::new(user, service))
        .collect()
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get all films
pub async fn get_films(State(state): State<AppState>) -> Json<Vec<FilmResponse>> {
    let service = state.inner.read().await;
    Json(film_list(service.all_films(), &service))
}

/// Create a new film
pub async fn create_film(
    State(state): State<AppState>,
    body: Result<Json<FilmRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<FilmResponse>)> {
    let Json(request) = body?;
    let film = Film::try_from(request)?;

    let mut service = state.inner.write().await;
    let created = service.create_film(film)?;

    Ok((StatusCode::CREATED, Json(FilmResponse::new(&created, &service))))
}

/// Update an existing film
pub async fn update_film(
    State(state): State<AppState>,
    body: Result<Json<FilmRequest>, JsonRejection>,
) -> AppResult<Json<FilmResponse>> {
    let Json(request) = body?;
    let film = Film::try_from(request)?;

    let mut service = state.inner.write().await;
    let updated = service.update_film(film)?;

    Ok(Json(FilmResponse::new(&updated, &service)))
}

/// Get a film by id
pub async fn get_film(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> AppResult<Json<FilmResponse>> {
    let Path(film_id) = path?;
    let service = state.inner.read().await;
    let film = service.get_film(film_id)?;
    Ok(Json(FilmResponse::new(film, &service)))
}

/// Delete a film and its likes
pub async fn delete_film(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(film_id) = path?;
    state.inner.write().await.delete_film(film_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Like a film on behalf of a user
pub async fn add_like(
    State(state): State<AppState>,
    path: Result<Path<(EntityId, EntityId)>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path((film_id, user_id)) = path?;
    state.inner.write().await.add_like(film_id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Withdraw a user's like
pub async fn remove_like(
    State(state): State<AppState>,
    path: Result<Path<(EntityId, EntityId)>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path((film_id, user_id)) = path?;
    state.inner.write().await.remove_like(film_id, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Most liked films, `count` defaults to 10
pub async fn popular_films(
    State(state): State<AppState>,
    query: Result<Query<PopularQuery>, QueryRejection>,
) -> AppResult<Json<Vec<FilmResponse>>> {
    let Query(query) = query?;
    let count = query.count.unwrap_or(DEFAULT_POPULAR_COUNT);

    let service = state.inner.read().await;
    let films = service.popular_films(count)?;
    Ok(Json(film_list(films, &service)))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let service = state.inner.read().await;
    Json(user_list(service.all_users(), &service))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let Json(request) = body?;
    let user = User::try_from(request)?;

    let mut service = state.inner.write().await;
    let created = service.create_user(user)?;

    Ok((StatusCode::CREATED, Json(UserResponse::new(&created, &service))))
}

/// Update an existing user
pub async fn update_user(
    State(state): State<AppState>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> AppResult<Json<UserResponse>> {
    let Json(request) = body?;
    let user = User::try_from(request)?;

    let mut service = state.inner.write().await;
    let updated = service.update_user(user)?;

    Ok(Json(UserResponse::new(&updated, &service)))
}

/// Get a user by id
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> AppResult<Json<UserResponse>> {
    let Path(user_id) = path?;
    let service = state.inner.read().await;
    let user = service.get_user(user_id)?;
    Ok(Json(UserResponse::new(user, &service)))
}

/// Delete a user together with their friendships and likes
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(user_id) = path?;
    state.inner.write().await.delete_user(user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_friend(
    State(state): State<AppState>,
    path: Result<Path<(EntityId, EntityId)>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path((user_id, friend_id)) = path?;
    state.inner.write().await.add_friend(user_id, friend_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_friend(
    State(state): State<AppState>,
    path: Result<Path<(EntityId, EntityId)>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path((user_id, friend_id)) = path?;
    state.inner.write().await.remove_friend(user_id, friend_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a user's friends
pub async fn get_friends(
    State(state): State<AppState>,
    path: Result<Path<EntityId>, PathRejection>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let Path(user_id) = path?;
    let service = state.inner.read().await;
    let friends = service.friends_of(user_id)?;
    Ok(Json(user_list(friends, &service)))
}

/// Friends shared by two users
pub async fn get_common_friends(
    State(state): State<AppState>,
    path: Result<Path<(EntityId, EntityId)>, PathRejection>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let Path((user_id, other_id)) = path?;
    let service = state.inner.read().await;
    let common = service.common_friends(user_id, other_id)?;
    Ok(Json(user_list(common, &service)))
}
