//! The student variant of the person capability set.
//!
//! A [`Student`] extends [`Person`] with academic fields and holds a seat in
//! the [`Census`] it was built against. The id is fixed at construction;
//! course and gpa change only through their explicit setters, and the title
//! only through [`Student::promote_credential`].

use crate::census::{Census, Seat};
use crate::error::GraduationFault;
use crate::graduation::{GraduationRequirements, Transcript, attempt_graduation};
use crate::person::{Person, Persona, name_line};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Title set by [`Student::promote_credential`].
pub const DOCTORAL_TITLE: &str = "Dr.";

/// Constructor arguments for the parameterized path.
///
/// Deserializable so cohorts can be described in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub gpa: f32,
    #[serde(default)]
    pub current_course: String,
    #[serde(default)]
    pub student_id: String,
}

/// A person enrolled in a course, counted by a [`Census`].
#[derive(Serialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    gpa: f32,
    current_course: String,
    student_id: String,
    #[serde(skip)]
    seat: Seat,
}

impl Student {
    /// Blank student: empty fields, id drawn from the census' blank id policy.
    pub fn blank(census: &Census) -> Self {
        let student_id = census.next_blank_id();
        Self {
            person: Person::default(),
            gpa: 0.0,
            current_course: String::new(),
            student_id,
            seat: census.take_seat(),
        }
    }

    /// Parameterized student. Inputs are taken as-is; nothing is validated.
    pub fn new(
        census: &Census,
        person: Person,
        gpa: f32,
        current_course: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Self {
        Self {
            person,
            gpa,
            current_course: current_course.into(),
            student_id: student_id.into(),
            seat: census.take_seat(),
        }
    }

    /// Parameterized student from an [`Admission`].
    pub fn admit(census: &Census, admission: Admission) -> Self {
        let Admission {
            person,
            gpa,
            current_course,
            student_id,
        } = admission;
        Self::new(census, person, gpa, current_course, student_id)
    }

    /// Arguments that rebuild this student through [`Student::admit`].
    pub fn to_admission(&self) -> Admission {
        Admission {
            person: self.person.clone(),
            gpa: self.gpa,
            current_course: self.current_course.clone(),
            student_id: self.student_id.clone(),
        }
    }

    pub fn gpa(&self) -> f32 {
        self.gpa
    }

    pub fn current_course(&self) -> &str {
        &self.current_course
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// The census this student is counted in.
    pub fn census(&self) -> &Census {
        self.seat.census()
    }

    pub fn set_current_course(&mut self, course: impl Into<String>) {
        self.current_course = course.into();
    }

    /// Replace the gpa. Out-of-range values are stored unchanged.
    pub fn set_gpa(&mut self, gpa: f32) {
        self.gpa = gpa;
    }

    /// Set the title to [`DOCTORAL_TITLE`].
    pub fn promote_credential(&mut self) {
        self.person.title_grant().promote_title(DOCTORAL_TITLE);
    }

    /// Run the graduation review for this student.
    pub fn attempt_graduation(
        &self,
        transcript: &Transcript,
        requirements: &GraduationRequirements,
    ) -> Result<(), GraduationFault> {
        attempt_graduation(self, transcript, requirements)
    }
}

impl Persona for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn kind(&self) -> &'static str {
        "Student"
    }

    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} with id: {} GPA: {} Course: {}",
            name_line(self),
            self.student_id,
            self.gpa,
            self.current_course
        )
    }
}

impl Clone for Student {
    fn clone(&self) -> Self {
        Self {
            person: self.person.clone(),
            gpa: self.gpa,
            current_course: self.current_course.clone(),
            student_id: self.student_id.clone(),
            seat: self.seat.clone(),
        }
    }

    /// Overwrite every field from `source`; this student keeps its own seat.
    fn clone_from(&mut self, source: &Self) {
        self.person.clone_from(&source.person);
        self.gpa = source.gpa;
        self.current_course.clone_from(&source.current_course);
        self.student_id.clone_from(&source.student_id);
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
            && self.gpa == other.gpa
            && self.current_course == other.current_course
            && self.student_id == other.student_id
    }
}

impl std::fmt::Debug for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Student")
            .field("person", &self.person)
            .field("gpa", &self.gpa)
            .field("current_course", &self.current_course)
            .field("student_id", &self.student_id)
            .finish()
    }
}
