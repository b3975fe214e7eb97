use async_trait::async_trait;
use common::{EntityId, GuestId};
use store::EntityStore;

use super::{Gender, Guest, GuestError};

/// Existence and lookup capabilities the booking core consumes.
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    /// True iff a guest with that id is present. Never fails.
    async fn exists_by_id(&self, id: GuestId) -> bool;

    /// Snapshot of the guest with the given id.
    async fn get_by_id(&self, id: GuestId) -> Result<Guest, GuestError>;
}

/// Validation and lookup facade over the guest store.
///
/// Reads hand out copies; the only way to change a stored guest is
/// [`update`](GuestService::update).
pub struct GuestService<S> {
    store: S,
}

impl<S: EntityStore<Guest>> GuestService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a guest; the store assigns the id.
    #[tracing::instrument(skip(self))]
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        gender: Gender,
    ) -> Result<Guest, GuestError> {
        let guest = Guest::new(GuestId::default(), first_name, last_name, gender)?;
        Ok(self.store.save(guest).await?)
    }

    /// Registers several guests at once. Validation failures abort the whole
    /// batch before anything is stored.
    pub async fn create_all(
        &self,
        entries: Vec<(String, String, Gender)>,
    ) -> Result<Vec<Guest>, GuestError> {
        let mut guests = Vec::with_capacity(entries.len());
        for (first_name, last_name, gender) in entries {
            guests.push(Guest::new(GuestId::default(), first_name, last_name, gender)?);
        }
        Ok(self.store.save_all(guests).await?)
    }

    /// Returns a copy of the guest with the given id. Unassigned and unknown
    /// ids both resolve to `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: GuestId) -> Result<Guest, GuestError> {
        if !id.is_valid() {
            return Err(GuestError::NotFound { id });
        }
        self.store
            .find_by_id(id)
            .await
            .map_err(|_| GuestError::NotFound { id })
    }

    /// Rewrites the guest's names and gender, returning the updated copy.
    #[tracing::instrument(skip(self))]
    pub async fn update(
        &self,
        id: GuestId,
        first_name: &str,
        last_name: &str,
        gender: Gender,
    ) -> Result<Guest, GuestError> {
        let mut guest = self.get_by_id(id).await?;
        guest.rename(first_name, last_name)?;
        guest.set_gender(gender);
        self.store
            .update(guest)
            .await
            .map_err(|_| GuestError::NotFound { id })
    }

    /// Removes a guest. A missing guest is an error, not a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: GuestId) -> Result<(), GuestError> {
        if !id.is_valid() || !self.store.delete_by_id(id).await {
            return Err(GuestError::NotFound { id });
        }
        Ok(())
    }

    pub async fn exists_by_id(&self, id: GuestId) -> bool {
        id.is_valid() && self.store.exists_by_id(id).await
    }

    /// Snapshot of every registered guest.
    pub async fn list(&self) -> Vec<Guest> {
        self.store.find_all().await
    }

    pub async fn count(&self) -> usize {
        self.store.count().await
    }
}

#[async_trait]
impl<S: EntityStore<Guest>> GuestDirectory for GuestService<S> {
    async fn exists_by_id(&self, id: GuestId) -> bool {
        GuestService::exists_by_id(self, id).await
    }

    async fn get_by_id(&self, id: GuestId) -> Result<Guest, GuestError> {
        GuestService::get_by_id(self, id).await
    }
}
