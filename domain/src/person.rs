use in_memory_adapter::{CrudRepository, Entity, EntityId, InMemoryRepo};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonError {
    #[error("tried to rename non-existing person with id={id}")]
    NotFound { id: EntityId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<EntityId>,
    pub name: String,
}

impl Person {
    /// An unsaved person, without id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Person {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

pub type PersonRepo = InMemoryRepo<Person>;

pub trait PersonRepoExt {
    /// Saves a new person and returns it with its assigned id
    fn create_person(&mut self, name: String) -> Person;

    /// Gets the first person with this name, in insertion order
    fn find_by_name(&self, name: &str) -> Option<&Person>;

    /// Renames an existing person
    /// # Errors
    /// - Returns `PersonError::NotFound` if no person has this id
    fn rename_person(&mut self, id: EntityId, name: String) -> Result<Person, PersonError>;
}

impl PersonRepoExt for PersonRepo {
    fn create_person(&mut self, name: String) -> Person {
        let person = self.save(Person::new(name));
        info!(id = ?person.id, name = %person.name, "Created person");
        person
    }

    fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.iter()
            .map(|(_, person)| person)
            .find(|person| person.name == name)
    }

    fn rename_person(&mut self, id: EntityId, name: String) -> Result<Person, PersonError> {
        let mut person = self.find_one(id).ok_or(PersonError::NotFound { id })?;
        person.name = name;
        Ok(self.save(person))
    }
}
