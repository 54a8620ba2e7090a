mod film;
mod user;

pub use film::{Film, FilmRequest};
pub use user::{User, UserRequest};

/// Identifier shared by films and users
pub type EntityId = i64;

/// A record kept in an entity store
///
/// The store owns identifier assignment; everything else about the record
/// is opaque to it apart from the fields an update is allowed to overwrite.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable kind used in error messages ("Film", "User")
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    /// Overwrites every mutable field with the values from `other`, keeping `self.id`
    fn overwrite_from(&mut self, other: Self);
}
