use common::EntityId;

/// What an identity-keyed store needs from the records it holds.
///
/// Entities carry their own typed id; the store stamps a fresh one on
/// [`save`](crate::EntityStore::save) via `with_id`.
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// The typed identifier for this entity.
    type Id: EntityId;

    /// Entity name used in error messages.
    const KIND: &'static str;

    /// Returns the entity's id.
    fn id(&self) -> Self::Id;

    /// Returns the entity carrying the given id.
    fn with_id(self, id: Self::Id) -> Self;
}
