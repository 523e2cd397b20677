//! Failure kinds raised by a graduation review.

use crate::graduation::{Course, GraduationStage};
use serde::Serialize;

/// Why a student is not eligible to graduate.
///
/// Exactly one kind is produced per review. Payloads differ per kind so that
/// handlers discriminate by variant rather than by a shared code.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum GraduationFault {
    /// The student's gpa is below the required minimum.
    #[error("too low gpa: {gpa}")]
    LowGpa { gpa: f32 },

    /// The student is short of required credits.
    #[error("missing {missing} credits")]
    MissingCredits { missing: u32 },

    /// A required course was never completed.
    #[error("missing required course: {course}")]
    MissingCourse { course: Course },

    /// Catch-all diagnostic.
    #[error("{message}")]
    GenericMessage { message: String },

    /// Eligibility could not be confirmed.
    #[error("student fault: {code}")]
    StudentFault { code: i32 },
}

impl GraduationFault {
    /// The review stage that produces this kind.
    pub fn stage(&self) -> GraduationStage {
        match self {
            Self::LowGpa { .. } => GraduationStage::GpaCheck,
            Self::MissingCredits { .. } => GraduationStage::CreditsCheck,
            Self::MissingCourse { .. } => GraduationStage::CourseCheck,
            Self::GenericMessage { .. } => GraduationStage::GenericCheck,
            Self::StudentFault { .. } => GraduationStage::FallbackCheck,
        }
    }

    /// Stable snake_case name of the kind, matching the serialized tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::LowGpa { .. } => "low_gpa",
            Self::MissingCredits { .. } => "missing_credits",
            Self::MissingCourse { .. } => "missing_course",
            Self::GenericMessage { .. } => "generic_message",
            Self::StudentFault { .. } => "student_fault",
        }
    }
}
