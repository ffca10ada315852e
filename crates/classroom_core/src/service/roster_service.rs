//! Roster use-case service.
//!
//! # Responsibility
//! - Provide create/remove/enroll/schedule/submit/list entry points.
//! - Enforce classroom, enrollment and assignment existence invariants.
//!
//! # Invariants
//! - Every operation naming a classroom fails with `NotFound` when absent.
//! - Failure paths never mutate roster state.
//! - Submissions are validated but not recorded.

use crate::model::classroom::Classroom;
use crate::repo::classroom_repo::{
    ClassroomRepository, InMemoryClassroomRepository, RepoError,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Errors from roster service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A classroom with this name is already present.
    AlreadyExists(String),
    /// Target classroom does not exist.
    NotFound(String),
    /// Student id is not in the classroom's enrollment sequence.
    StudentNotEnrolled {
        student_id: String,
        class_name: String,
    },
    /// Assignment description was never scheduled in the classroom.
    AssignmentNotFound {
        class_name: String,
        description: String,
    },
}

impl RosterError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "already_exists",
            Self::NotFound(_) => "not_found",
            Self::StudentNotEnrolled { .. } => "student_not_enrolled",
            Self::AssignmentNotFound { .. } => "assignment_not_found",
        }
    }
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists(name) => write!(f, "Classroom already exists: {name}"),
            Self::NotFound(name) => write!(f, "Classroom not found: {name}"),
            Self::StudentNotEnrolled {
                student_id,
                class_name,
            } => write!(
                f,
                "Student {student_id} is not enrolled in classroom {class_name}"
            ),
            Self::AssignmentNotFound {
                class_name,
                description,
            } => write!(
                f,
                "Assignment not found for classroom {class_name}: {description}"
            ),
        }
    }
}

impl Error for RosterError {}

impl From<RepoError> for RosterError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::AlreadyExists(name) => Self::AlreadyExists(name),
            RepoError::NotFound(name) => Self::NotFound(name),
        }
    }
}

/// Roster service facade.
pub struct RosterService<R: ClassroomRepository> {
    repo: R,
}

impl RosterService<InMemoryClassroomRepository> {
    /// Creates a service over an empty in-memory roster.
    pub fn in_memory() -> Self {
        Self::new(InMemoryClassroomRepository::new())
    }
}

impl<R: ClassroomRepository> RosterService<R> {
    /// Creates service from repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one empty classroom.
    ///
    /// # Errors
    /// - `AlreadyExists` when the name is taken.
    pub fn create_classroom(&mut self, name: &str) -> RosterResult<()> {
        let result = self
            .repo
            .insert_classroom(Classroom::new(name))
            .map_err(RosterError::from);
        log_outcome("classroom_create", &result);
        result?;
        info!(
            "event=classroom_create module=roster status=ok classroom_count={}",
            self.repo.list_classroom_names().len()
        );
        Ok(())
    }

    /// Removes one classroom with all its enrollment and assignment state.
    pub fn remove_classroom(&mut self, name: &str) -> RosterResult<()> {
        let result = self
            .repo
            .remove_classroom(name)
            .map_err(RosterError::from);
        log_outcome("classroom_remove", &result);
        let removed = result?;
        info!(
            "event=classroom_remove module=roster status=ok dropped_students={} dropped_assignments={}",
            removed.students().len(),
            removed.assignments().len()
        );
        Ok(())
    }

    /// Appends a student id to the classroom's enrollment.
    ///
    /// Repeated enrollment appends again; no dedup is applied.
    pub fn enroll_student(&mut self, student_id: &str, class_name: &str) -> RosterResult<()> {
        let result = self.classroom_mut(class_name);
        log_outcome("student_enroll", &result);
        let classroom = result?;
        classroom.add_student(student_id);
        info!(
            "event=student_enroll module=roster status=ok student_count={}",
            classroom.students().len()
        );
        Ok(())
    }

    /// Appends an assignment description to the classroom's schedule.
    ///
    /// Repeated scheduling appends again; no dedup is applied.
    pub fn schedule_assignment(
        &mut self,
        class_name: &str,
        description: &str,
    ) -> RosterResult<()> {
        let result = self.classroom_mut(class_name);
        log_outcome("assignment_schedule", &result);
        let classroom = result?;
        classroom.add_assignment(description);
        info!(
            "event=assignment_schedule module=roster status=ok assignment_count={}",
            classroom.assignments().len()
        );
        Ok(())
    }

    /// Validates one submission against enrollment and schedule.
    ///
    /// # Contract
    /// - Checks classroom, then student, then assignment.
    /// - Success records nothing.
    pub fn submit_assignment(
        &self,
        student_id: &str,
        class_name: &str,
        description: &str,
    ) -> RosterResult<()> {
        let result = self.classroom(class_name).and_then(|classroom| {
            if !classroom.has_student(student_id) {
                return Err(RosterError::StudentNotEnrolled {
                    student_id: student_id.to_string(),
                    class_name: class_name.to_string(),
                });
            }
            if !classroom.has_assignment(description) {
                return Err(RosterError::AssignmentNotFound {
                    class_name: class_name.to_string(),
                    description: description.to_string(),
                });
            }
            Ok(())
        });
        log_outcome("assignment_submit", &result);
        if result.is_ok() {
            info!("event=assignment_submit module=roster status=ok");
        }
        result
    }

    /// Lists classroom names in creation order.
    pub fn list_classrooms(&self) -> Vec<String> {
        self.repo.list_classroom_names()
    }

    /// Returns the classroom's student ids, duplicates included.
    pub fn list_students(&self, class_name: &str) -> RosterResult<Vec<String>> {
        self.classroom(class_name)
            .map(|classroom| classroom.students().to_vec())
    }

    /// Returns the classroom's assignment descriptions, duplicates included.
    pub fn list_assignments(&self, class_name: &str) -> RosterResult<Vec<String>> {
        self.classroom(class_name)
            .map(|classroom| classroom.assignments().to_vec())
    }

    /// Returns an owned snapshot of one classroom.
    pub fn get_classroom(&self, class_name: &str) -> RosterResult<Classroom> {
        self.classroom(class_name).cloned()
    }

    fn classroom(&self, class_name: &str) -> RosterResult<&Classroom> {
        self.repo
            .get_classroom(class_name)
            .ok_or_else(|| RosterError::NotFound(class_name.to_string()))
    }

    fn classroom_mut(&mut self, class_name: &str) -> RosterResult<&mut Classroom> {
        self.repo
            .get_classroom_mut(class_name)
            .ok_or_else(|| RosterError::NotFound(class_name.to_string()))
    }
}

fn log_outcome<T>(event: &str, result: &RosterResult<T>) {
    if let Err(err) = result {
        warn!(
            "event={} module=roster status=error error_code={}",
            event,
            err.code()
        );
    }
}
