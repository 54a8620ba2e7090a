use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};
use crate::error::AppError;

/// A film tracked by the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// Assigned by the store on creation
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    /// Running time in minutes
    pub duration: i64,
}

impl Film {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        release_date: NaiveDate,
        duration: i64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            release_date,
            duration,
        }
    }
}

impl Entity for Film {
    const KIND: &'static str = "Film";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn overwrite_from(&mut self, other: Self) {
        self.name = other.name;
        self.description = other.description;
        self.release_date = other.release_date;
        self.duration = other.duration;
    }
}

/// Film body accepted by `POST /films` and `PUT /films`
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
/// A `likes` array sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmRequest {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i64>,
}

impl TryFrom<FilmRequest> for Film {
    type Error = AppError;

    fn try_from(request: FilmRequest) -> Result<Self, Self::Error> {
        let release_date = request
            .release_date
            .ok_or_else(|| AppError::validation("Film release date must be provided"))?;
        let duration = request
            .duration
            .ok_or_else(|| AppError::validation("Film duration must be provided"))?;

        Ok(Film {
            id: request.id.unwrap_or(0),
            name: request.name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            release_date,
            duration,
        })
    }
}
