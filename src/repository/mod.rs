//! Repository contract.
//!
//! The availability engine reaches its stores through a single capability
//! parameterized by entity type: list everything, add one. There is no
//! query, filtering, ordering, or transactional guarantee beyond "stable
//! for the duration of one call".
//!
//! Backends (in-memory, database, test doubles) implement
//! [`Repository`] directly. Shared handles (`&R`, `Box<R>`, `Arc<R>`)
//! forward to the inner repository.

use std::sync::Arc;

use thiserror::Error;

mod in_memory;

pub use in_memory::InMemoryRepository;

/// Failure reported by a repository backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached or read.
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
    /// The store refused to persist an entity.
    #[error("Repository rejected entity: {0}")]
    Rejected(String),
}

/// A store of entities of type `T`.
pub trait Repository<T> {
    /// Snapshot of every stored entity, in store order.
    fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Persists a new entity. Duplicate identifiers are not detected.
    fn add(&self, entity: T) -> Result<(), RepositoryError>;
}

impl<T, R: Repository<T> + ?Sized> Repository<T> for &R {
    fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        (**self).get_all()
    }

    fn add(&self, entity: T) -> Result<(), RepositoryError> {
        (**self).add(entity)
    }
}

impl<T, R: Repository<T> + ?Sized> Repository<T> for Box<R> {
    fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        (**self).get_all()
    }

    fn add(&self, entity: T) -> Result<(), RepositoryError> {
        (**self).add(entity)
    }
}

impl<T, R: Repository<T> + ?Sized> Repository<T> for Arc<R> {
    fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        (**self).get_all()
    }

    fn add(&self, entity: T) -> Result<(), RepositoryError> {
        (**self).add(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Room;

    fn count_rooms(repo: &dyn Repository<Room>) -> usize {
        repo.get_all().map(|rooms| rooms.len()).unwrap_or(0)
    }

    #[test]
    fn test_shared_handles_forward() {
        let repo = Arc::new(InMemoryRepository::from(vec![Room::new(1)]));
        let handle = Arc::clone(&repo);
        handle.add(Room::new(2)).unwrap();

        assert_eq!(count_rooms(&repo), 2);
        assert_eq!(count_rooms(&&*repo), 2);

        let boxed: Box<dyn Repository<Room>> = Box::new(InMemoryRepository::new());
        boxed.add(Room::new(9)).unwrap();
        assert_eq!(count_rooms(&boxed), 1);
    }

    #[test]
    fn test_error_display() {
        let err = RepositoryError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "Repository unavailable: connection refused");
    }
}
