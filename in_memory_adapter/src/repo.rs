use thiserror::Error;

pub type EntityId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("tried to remove non-existing entity with id={id}")]
    EntityNotFound { id: EntityId },
}

/// A record whose identifier is assigned by the repository on first save.
pub trait Entity {
    /// `None` until the entity has been saved.
    fn id(&self) -> Option<EntityId>;
    fn set_id(&mut self, id: EntityId);
}

pub trait CrudRepository<T: Entity> {
    /// Get the entity stored at `id`, if any
    fn find_one(&self, id: EntityId) -> Option<T>;
    /// Snapshot of every stored entity, in insertion order
    fn find_all(&self) -> Vec<T>;
    /// Insert or overwrite an entity, minting an id first if it has none.
    /// Returns the stored entity.
    fn save(&mut self, entity: T) -> T;
    /// Remove the entity stored at `id`
    /// # Errors
    /// - Returns `RepoError::EntityNotFound` if nothing is stored at `id`
    fn remove(&mut self, id: EntityId) -> Result<(), RepoError>;

    fn count(&self) -> usize {
        self.find_all().len()
    }

    fn exists(&self, id: EntityId) -> bool {
        self.find_one(id).is_some()
    }
}
