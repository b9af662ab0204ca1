pub mod repo;

use std::{
    any::type_name,
    collections::{BTreeMap, HashMap},
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};

pub use repo::{CrudRepository, Entity, EntityId, RepoError};

struct Slot<T> {
    /// Key into `order`, so removal does not scan it
    position: u64,
    item: T,
}

/// Map-backed repository with incremental id assignment.
///
/// Iteration follows first-insertion order. Only id minting is atomic, the
/// storage itself needs `&mut self` to change.
pub struct InMemoryRepo<T> {
    storage: HashMap<EntityId, Slot<T>>,
    order: BTreeMap<u64, EntityId>,
    next_position: u64,
    sequence: AtomicU64,
}

impl<T> InMemoryRepo<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: HashMap::new(),
            order: BTreeMap::new(),
            next_position: 0,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.storage.get(&id).map(|slot| &slot.item)
    }

    /// Stored entities with their ids, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.order
            .values()
            .filter_map(|id| self.storage.get(id).map(|slot| (*id, &slot.item)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The id the next save of an unsaved entity will receive
    #[must_use]
    pub fn next_id(&self) -> EntityId {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Ids stay unique below `EntityId::MAX`; the sequence must not wrap.
    fn mint_id(&self) -> EntityId {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst);
        debug_assert_ne!(id, EntityId::MAX, "entity id sequence exhausted");
        id
    }

    fn store(&mut self, id: EntityId, item: T) {
        if let Some(slot) = self.storage.get_mut(&id) {
            slot.item = item;
            debug!(id, "Overwrote entity");
            return;
        }

        let position = self.next_position;
        self.next_position += 1;
        self.order.insert(position, id);
        self.storage.insert(id, Slot { position, item });
        debug!(id, position, "Stored new entity");
    }
}

impl<T> CrudRepository<T> for InMemoryRepo<T>
where
    T: Entity + Clone,
{
    fn find_one(&self, id: EntityId) -> Option<T> {
        self.get(id).cloned()
    }

    fn find_all(&self) -> Vec<T> {
        self.iter().map(|(_, item)| item.clone()).collect()
    }

    fn save(&mut self, mut entity: T) -> T {
        let id = if let Some(id) = entity.id() {
            id
        } else {
            let id = self.mint_id();
            debug!(id, entity = type_name::<T>(), "Minted entity id");
            entity.set_id(id);
            id
        };

        self.store(id, entity.clone());
        entity
    }

    fn remove(&mut self, id: EntityId) -> Result<(), RepoError> {
        let Some(slot) = self.storage.remove(&id) else {
            warn!(id, "Tried to remove non-existing entity");
            return Err(RepoError::EntityNotFound { id });
        };

        self.order.remove(&slot.position);
        debug!(id, "Removed entity");
        Ok(())
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn exists(&self, id: EntityId) -> bool {
        self.storage.contains_key(&id)
    }
}

impl<T> Default for InMemoryRepo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InMemoryRepo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRepo")
            .field("sequence", &self.next_id())
            .field("len", &self.len())
            .field("type", &type_name::<T>())
            .finish_non_exhaustive()
    }
}
