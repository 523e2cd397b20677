//! # Cohort Kernel
//!
//! A person capability set, its student variant, and the bookkeeping around
//! them: a live-instance census, a gpa ordering for rosters, and a graduation
//! review that classifies why a student cannot graduate.
//!
//! ## Architecture
//!
//! ```text
//! Person / Persona      ← value record + capability set (describe, kind, greet)
//!     │
//! Student               ← academic fields, credential promotion
//!     │        ╲
//! Census        GraduationStage ── GraduationFault
//!     │
//! by_gpa                ← total order on gpa
//!     │
//! Roster                ← owning copies, stable sort, mutable traversal
//! ```
//!
//! Every `Student` holds a seat in the [`Census`] it was built against, so the
//! census count always equals the number of live students, whichever path
//! built them.

pub mod census;
pub mod error;
pub mod graduation;
pub mod ordering;
pub mod person;
pub mod roster;
pub mod student;

pub use census::{BlankIdPolicy, Census};
pub use error::GraduationFault;
pub use graduation::{
    Course, GraduationRequirements, GraduationStage, Transcript, attempt_graduation,
};
pub use ordering::{by_gpa, gpa_less};
pub use person::{Person, Persona, TitleGrant};
pub use roster::Roster;
pub use student::{Admission, DOCTORAL_TITLE, Student};
