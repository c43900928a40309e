//! Vector-backed repository.

use parking_lot::RwLock;

use super::{Repository, RepositoryError};

/// Keeps entities in insertion order behind a read-write lock.
///
/// Individual calls are thread-safe. A read followed by an add is not
/// atomic; callers that book concurrently must serialize externally.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    entities: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    /// Whether the repository holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }

    /// Consumes the repository, returning its contents.
    pub fn into_inner(self) -> Vec<T> {
        self.entities.into_inner()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for InMemoryRepository<T> {
    fn from(entities: Vec<T>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }
}

impl<T> FromIterator<T> for InMemoryRepository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone> Repository<T> for InMemoryRepository<T> {
    fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.entities.read().clone())
    }

    fn add(&self, entity: T) -> Result<(), RepositoryError> {
        self.entities.write().push(entity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Room;

    #[test]
    fn test_add_preserves_order() {
        let repo: InMemoryRepository<Room> = InMemoryRepository::new();
        assert!(repo.is_empty());

        repo.add(Room::new(3)).unwrap();
        repo.add(Room::new(1)).unwrap();
        repo.add(Room::new(2)).unwrap();

        let ids: Vec<_> = repo.get_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let repo: InMemoryRepository<Room> = [Room::new(1), Room::new(1)].into_iter().collect();
        repo.add(Room::new(1)).unwrap();
        assert_eq!(repo.into_inner().len(), 3);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let repo = InMemoryRepository::from(vec![Room::new(1)]);
        let snapshot = repo.get_all().unwrap();
        repo.add(Room::new(2)).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.len(), 2);
    }
}
