pub mod person;

pub use in_memory_adapter::{CrudRepository, Entity, EntityId, InMemoryRepo, RepoError};
