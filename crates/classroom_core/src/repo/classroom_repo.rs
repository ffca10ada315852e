//! Classroom repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the mapping from classroom name to `Classroom`.
//! - Keep listing order deterministic (insertion order).
//!
//! # Invariants
//! - At most one classroom per name.
//! - Removal keeps the relative order of remaining classrooms.

use crate::model::classroom::Classroom;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic errors for classroom storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    AlreadyExists(String),
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists(name) => write!(f, "classroom already stored: {name}"),
            Self::NotFound(name) => write!(f, "classroom not stored: {name}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for classroom records.
pub trait ClassroomRepository {
    fn insert_classroom(&mut self, classroom: Classroom) -> RepoResult<()>;
    fn remove_classroom(&mut self, name: &str) -> RepoResult<Classroom>;
    fn get_classroom(&self, name: &str) -> Option<&Classroom>;
    fn get_classroom_mut(&mut self, name: &str) -> Option<&mut Classroom>;
    fn list_classroom_names(&self) -> Vec<String>;
}

/// Insertion-ordered in-memory classroom storage.
///
/// Rosters are small, so lookups scan a `Vec` instead of paying for a
/// separate index.
#[derive(Debug, Default)]
pub struct InMemoryClassroomRepository {
    classrooms: Vec<Classroom>,
}

impl InMemoryClassroomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.classrooms
            .iter()
            .position(|classroom| classroom.name() == name)
    }
}

impl ClassroomRepository for InMemoryClassroomRepository {
    fn insert_classroom(&mut self, classroom: Classroom) -> RepoResult<()> {
        if self.position(classroom.name()).is_some() {
            return Err(RepoError::AlreadyExists(classroom.name().to_string()));
        }
        self.classrooms.push(classroom);
        Ok(())
    }

    fn remove_classroom(&mut self, name: &str) -> RepoResult<Classroom> {
        let index = self
            .position(name)
            .ok_or_else(|| RepoError::NotFound(name.to_string()))?;
        Ok(self.classrooms.remove(index))
    }

    fn get_classroom(&self, name: &str) -> Option<&Classroom> {
        self.classrooms
            .iter()
            .find(|classroom| classroom.name() == name)
    }

    fn get_classroom_mut(&mut self, name: &str) -> Option<&mut Classroom> {
        self.classrooms
            .iter_mut()
            .find(|classroom| classroom.name() == name)
    }

    fn list_classroom_names(&self) -> Vec<String> {
        self.classrooms
            .iter()
            .map(|classroom| classroom.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassroomRepository, InMemoryClassroomRepository, RepoError};
    use crate::model::classroom::Classroom;

    #[test]
    fn insert_rejects_duplicate_name() {
        let mut repo = InMemoryClassroomRepository::new();
        repo.insert_classroom(Classroom::new("Math")).unwrap();

        let err = repo.insert_classroom(Classroom::new("Math")).unwrap_err();
        assert_eq!(err, RepoError::AlreadyExists("Math".to_string()));
        assert_eq!(repo.list_classroom_names(), vec!["Math".to_string()]);
    }

    #[test]
    fn remove_keeps_relative_order_and_reinsert_appends() {
        let mut repo = InMemoryClassroomRepository::new();
        for name in ["Math", "Physics", "History"] {
            repo.insert_classroom(Classroom::new(name)).unwrap();
        }

        let removed = repo.remove_classroom("Math").unwrap();
        assert_eq!(removed.name(), "Math");
        assert_eq!(repo.list_classroom_names(), vec!["Physics", "History"]);

        repo.insert_classroom(Classroom::new("Math")).unwrap();
        assert_eq!(
            repo.list_classroom_names(),
            vec!["Physics", "History", "Math"]
        );
    }

    #[test]
    fn remove_missing_returns_not_found() {
        let mut repo = InMemoryClassroomRepository::new();
        let err = repo.remove_classroom("Art").unwrap_err();
        assert!(matches!(err, RepoError::NotFound(name) if name == "Art"));
    }

    #[test]
    fn get_classroom_mut_mutates_stored_record() {
        let mut repo = InMemoryClassroomRepository::new();
        repo.insert_classroom(Classroom::new("Math")).unwrap();

        repo.get_classroom_mut("Math").unwrap().add_student("S1");

        let stored = repo.get_classroom("Math").unwrap();
        assert_eq!(stored.students(), ["S1"]);
        assert!(repo.get_classroom("Physics").is_none());
    }
}
