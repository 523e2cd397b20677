//! Graduation review.
//!
//! A review runs five checks in a fixed order and stops at the first one that
//! fails:
//!
//! ```text
//! GpaCheck      gpa < min_gpa                  → LowGpa { gpa }
//! CreditsCheck  earned < required_credits      → MissingCredits { missing }
//! CourseCheck   required course not completed  → MissingCourse { course }
//! GenericCheck  transcript carries a hold      → GenericMessage { message }
//! FallbackCheck transcript not audited         → StudentFault { code }
//! ```
//!
//! `Ok(())` means the student is eligible. The review never recovers from a
//! fault; it hands it straight back to the caller.

use crate::error::GraduationFault;
use crate::student::Student;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A course, as named by requirements and transcripts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub number: u32,
}

impl Course {
    pub fn new(title: impl Into<String>, number: u32) -> Self {
        Self {
            title: title.into(),
            number,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.number)
    }
}

/// A student's academic history as seen by the review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transcript {
    pub credits_earned: u32,
    pub completed_courses: Vec<Course>,
    /// Outstanding administrative holds, reported verbatim.
    pub holds: Vec<String>,
    /// Whether a registrar has confirmed the record.
    pub audited: bool,
}

impl Transcript {
    fn has_completed(&self, course: &Course) -> bool {
        self.completed_courses.iter().any(|done| done == course)
    }
}

/// Thresholds a student must meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraduationRequirements {
    pub min_gpa: f32,
    pub required_credits: u32,
    /// Checked in order; the first one missing is reported.
    pub required_courses: Vec<Course>,
    /// Code carried by [`GraduationFault::StudentFault`].
    pub fault_code: i32,
}

impl GraduationRequirements {
    pub const DEFAULT_MIN_GPA: f32 = 2.0;
    pub const DEFAULT_FAULT_CODE: i32 = 5;
}

impl Default for GraduationRequirements {
    fn default() -> Self {
        Self {
            min_gpa: Self::DEFAULT_MIN_GPA,
            required_credits: 0,
            required_courses: Vec::new(),
            fault_code: Self::DEFAULT_FAULT_CODE,
        }
    }
}

/// One check of the review, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraduationStage {
    GpaCheck,
    CreditsCheck,
    CourseCheck,
    GenericCheck,
    FallbackCheck,
}

impl GraduationStage {
    /// Every stage, in the order a review evaluates them.
    pub const ALL: [GraduationStage; 5] = [
        Self::GpaCheck,
        Self::CreditsCheck,
        Self::CourseCheck,
        Self::GenericCheck,
        Self::FallbackCheck,
    ];

    /// Run this stage alone. `None` means the check passed.
    pub fn evaluate(
        self,
        student: &Student,
        transcript: &Transcript,
        requirements: &GraduationRequirements,
    ) -> Option<GraduationFault> {
        match self {
            Self::GpaCheck => (student.gpa() < requirements.min_gpa)
                .then(|| GraduationFault::LowGpa { gpa: student.gpa() }),
            Self::CreditsCheck => requirements
                .required_credits
                .checked_sub(transcript.credits_earned)
                .filter(|missing| *missing > 0)
                .map(|missing| GraduationFault::MissingCredits { missing }),
            Self::CourseCheck => requirements
                .required_courses
                .iter()
                .find(|course| !transcript.has_completed(course))
                .map(|course| GraduationFault::MissingCourse {
                    course: course.clone(),
                }),
            Self::GenericCheck => {
                transcript
                    .holds
                    .first()
                    .map(|hold| GraduationFault::GenericMessage {
                        message: hold.clone(),
                    })
            }
            Self::FallbackCheck => (!transcript.audited).then_some(GraduationFault::StudentFault {
                code: requirements.fault_code,
            }),
        }
    }
}

impl fmt::Display for GraduationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpaCheck => write!(f, "gpa_check"),
            Self::CreditsCheck => write!(f, "credits_check"),
            Self::CourseCheck => write!(f, "course_check"),
            Self::GenericCheck => write!(f, "generic_check"),
            Self::FallbackCheck => write!(f, "fallback_check"),
        }
    }
}

/// Review `student` against `requirements`. The first failing stage wins.
pub fn attempt_graduation(
    student: &Student,
    transcript: &Transcript,
    requirements: &GraduationRequirements,
) -> Result<(), GraduationFault> {
    for stage in GraduationStage::ALL {
        if let Some(fault) = stage.evaluate(student, transcript, requirements) {
            tracing::debug!(
                student_id = student.student_id(),
                %stage,
                kind = fault.kind_name(),
                "graduation check failed"
            );
            return Err(fault);
        }
        tracing::debug!(student_id = student.student_id(), %stage, "graduation check passed");
    }
    Ok(())
}
