//! Owning collection of students.
//!
//! A [`Roster`] stores its own copies: [`Roster::insert`] clones the caller's
//! student (taking a new census seat), so later changes on either side never
//! reach the other. Removing a student hands it back to the caller, and its
//! seat is released when that value drops.

use crate::ordering::by_gpa;
use crate::person::Persona;
use crate::student::Student;
use std::io::{self, Write};

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an independent copy of `student`.
    pub fn insert(&mut self, student: &Student) {
        self.students.push(student.clone());
    }

    /// Move an owned student in.
    pub fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Remove and return the student at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Student> {
        (index < self.students.len()).then(|| self.students.remove(index))
    }

    /// Drop every stored student.
    pub fn clear(&mut self) {
        self.students.clear();
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Student> {
        self.students.get_mut(index)
    }

    /// Sort by gpa, ascending. Students with equal gpa keep their order.
    pub fn sort_stable(&mut self) {
        self.students.sort_by(by_gpa);
        tracing::debug!(len = self.students.len(), "roster sorted by gpa");
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Mutable traversal; changes land on the stored students in place.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Student> {
        self.students.iter_mut()
    }

    /// Describe every student, in roster order, through the
    /// [`Persona`] capability set.
    pub fn describe_all(&self, out: &mut dyn Write) -> io::Result<()> {
        for student in self {
            let entity: &dyn Persona = student;
            entity.describe(out)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Roster {
    type Item = &'a mut Student;
    type IntoIter = std::slice::IterMut<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
