//! Classroom domain model.
//!
//! # Responsibility
//! - Hold one classroom's enrolled students and scheduled assignments.
//!
//! # Invariants
//! - `name` is the roster key and never changes after creation.
//! - `students` and `assignments` keep insertion order and allow duplicates.

use serde::{Deserialize, Serialize};

/// Named container of enrolled students and scheduled assignments.
///
/// Sequences are kept as-is: enrolling the same student twice or scheduling
/// the same description twice appends a second entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    name: String,
    students: Vec<String>,
    assignments: Vec<String>,
}

impl Classroom {
    /// Creates an empty classroom.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Roster key for this classroom.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends one student id to the enrollment sequence.
    pub fn add_student(&mut self, student_id: impl Into<String>) {
        self.students.push(student_id.into());
    }

    /// Appends one assignment description to the schedule.
    pub fn add_assignment(&mut self, description: impl Into<String>) {
        self.assignments.push(description.into());
    }

    /// Enrolled student ids in enrollment order.
    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// Scheduled assignment descriptions in scheduling order.
    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.students.iter().any(|value| value == student_id)
    }

    pub fn has_assignment(&self, description: &str) -> bool {
        self.assignments.iter().any(|value| value == description)
    }
}

#[cfg(test)]
mod tests {
    use super::Classroom;

    #[test]
    fn new_classroom_starts_empty() {
        let classroom = Classroom::new("Math");
        assert_eq!(classroom.name(), "Math");
        assert!(classroom.students().is_empty());
        assert!(classroom.assignments().is_empty());
    }

    #[test]
    fn add_student_keeps_order_and_duplicates() {
        let mut classroom = Classroom::new("Math");
        classroom.add_student("S1");
        classroom.add_student("S2");
        classroom.add_student("S1");

        assert_eq!(classroom.students(), ["S1", "S2", "S1"]);
        assert!(classroom.has_student("S2"));
        assert!(!classroom.has_student("S3"));
    }

    #[test]
    fn has_assignment_matches_exact_description() {
        let mut classroom = Classroom::new("Math");
        classroom.add_assignment("HW1");

        assert!(classroom.has_assignment("HW1"));
        assert!(!classroom.has_assignment("hw1"));
        assert!(!classroom.has_assignment("HW1 "));
    }
}
