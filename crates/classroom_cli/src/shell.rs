//! Interactive text menu over the roster service.
//!
//! # Responsibility
//! - Read menu choices and operands line by line.
//! - Translate roster results into operator-facing messages.
//!
//! # Invariants
//! - Roster errors are printed and never end the loop.
//! - Invalid menu input never touches roster state.
//! - End of input ends the loop like the exit choice.

use classroom_core::{ClassroomRepository, RosterResult, RosterService};
use log::info;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nVirtual Classroom Manager
1. Add Classroom
2. Remove Classroom
3. Add Student
4. Schedule Assignment
5. Submit Assignment
6. List Classrooms
7. List Students in Classroom
8. Exit
";

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddClassroom,
    RemoveClassroom,
    AddStudent,
    ScheduleAssignment,
    SubmitAssignment,
    ListClassrooms,
    ListStudents,
    Exit,
}

impl MenuChoice {
    fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::AddClassroom),
            2 => Some(Self::RemoveClassroom),
            3 => Some(Self::AddStudent),
            4 => Some(Self::ScheduleAssignment),
            5 => Some(Self::SubmitAssignment),
            6 => Some(Self::ListClassrooms),
            7 => Some(Self::ListStudents),
            8 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Line-oriented menu shell bound to one roster and one pair of I/O handles.
pub struct Shell<'a, R: ClassroomRepository, I: BufRead, O: Write> {
    service: &'a mut RosterService<R>,
    input: I,
    output: O,
}

impl<'a, R: ClassroomRepository, I: BufRead, O: Write> Shell<'a, R, I, O> {
    pub fn new(service: &'a mut RosterService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// # Errors
    /// - Returns I/O errors from reading input or writing output.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let choice = match line.trim().parse::<i64>() {
                Ok(number) => MenuChoice::from_number(number),
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            let keep_running = match choice {
                Some(MenuChoice::Exit) => false,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            if !keep_running {
                info!("event=menu_exit module=cli status=ok");
                return Ok(());
            }
        }
    }

    /// Executes one non-exit choice. Returns `false` when input ran out.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::AddClassroom => {
                let Some(name) = self.prompt("Enter classroom name: ")? else {
                    return Ok(false);
                };
                let result = self.service.create_classroom(&name);
                self.report(result, || format!("Classroom {name} has been created."))?;
            }
            MenuChoice::RemoveClassroom => {
                let Some(name) = self.prompt("Enter classroom name to remove: ")? else {
                    return Ok(false);
                };
                let result = self.service.remove_classroom(&name);
                self.report(result, || format!("Classroom {name} has been removed."))?;
            }
            MenuChoice::AddStudent => {
                let Some(student_id) = self.prompt("Enter student ID: ")? else {
                    return Ok(false);
                };
                let Some(class_name) = self.prompt("Enter classroom name: ")? else {
                    return Ok(false);
                };
                let result = self.service.enroll_student(&student_id, &class_name);
                self.report(result, || {
                    format!("Student {student_id} has been enrolled in {class_name}")
                })?;
            }
            MenuChoice::ScheduleAssignment => {
                let Some(class_name) = self.prompt("Enter classroom name: ")? else {
                    return Ok(false);
                };
                let Some(details) = self.prompt("Enter assignment details: ")? else {
                    return Ok(false);
                };
                let result = self.service.schedule_assignment(&class_name, &details);
                self.report(result, || {
                    format!("Assignment for {class_name} has been scheduled.")
                })?;
            }
            MenuChoice::SubmitAssignment => {
                let Some(student_id) = self.prompt("Enter student ID: ")? else {
                    return Ok(false);
                };
                let Some(class_name) = self.prompt("Enter classroom name: ")? else {
                    return Ok(false);
                };
                let Some(details) = self.prompt("Enter assignment details: ")? else {
                    return Ok(false);
                };
                let result = self
                    .service
                    .submit_assignment(&student_id, &class_name, &details);
                self.report(result, || {
                    format!("Assignment submitted by Student {student_id} in {class_name}")
                })?;
            }
            MenuChoice::ListClassrooms => {
                let classrooms = self.service.list_classrooms();
                if classrooms.is_empty() {
                    writeln!(self.output, "No classrooms available.")?;
                } else {
                    writeln!(self.output, "Classrooms:")?;
                    self.write_items(&classrooms)?;
                }
            }
            MenuChoice::ListStudents => {
                let Some(class_name) = self.prompt("Enter classroom name: ")? else {
                    return Ok(false);
                };
                match self.service.list_students(&class_name) {
                    Ok(students) if students.is_empty() => {
                        writeln!(self.output, "No students in {class_name}")?;
                    }
                    Ok(students) => {
                        writeln!(self.output, "Students in {class_name}:")?;
                        self.write_items(&students)?;
                    }
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Writes a prompt and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn report(
        &mut self,
        result: RosterResult<()>,
        success: impl FnOnce() -> String,
    ) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{}", success()),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn write_items(&mut self, items: &[String]) -> io::Result<()> {
        for item in items {
            writeln!(self.output, "- {item}")?;
        }
        Ok(())
    }
}
