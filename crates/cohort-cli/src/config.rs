//! Cohort file: census policy, graduation requirements and the students to
//! admit, read from TOML.

use cohort_kernel::{Admission, BlankIdPolicy, Census, GraduationRequirements, Person, Transcript};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Failures outside the graduation taxonomy. None of them are handled; they
/// end the run as uncaught failures.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("student not found: {0}")]
    UnknownStudent(String),

    #[error("cohort has no students")]
    EmptyCohort,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CensusSection {
    pub blank_ids: BlankIdPolicy,
}

/// One `[[students]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentEntry {
    #[serde(flatten)]
    pub admission: Admission,
    #[serde(default)]
    pub transcript: Transcript,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CohortFile {
    pub census: CensusSection,
    pub graduation: GraduationRequirements,
    pub students: Vec<StudentEntry>,
}

impl CohortFile {
    pub fn from_toml_str(path: &Path, text: &str) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|source| CliError::Toml {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(path, &text)
    }

    /// The cohort used when no file is given.
    pub fn builtin() -> Self {
        let entry = |first: &str, last: &str, mi: char, title: &str, gpa: f32, id: &str| {
            StudentEntry {
                admission: Admission {
                    person: Person::new(first, last, Some(mi), title),
                    gpa,
                    current_course: "C++".to_string(),
                    student_id: id.to_string(),
                },
                transcript: Transcript::default(),
            }
        };
        Self {
            census: CensusSection::default(),
            graduation: GraduationRequirements::default(),
            students: vec![
                entry("Ling", "Mau", 'I', "Ms.", 3.1, "55UD"),
                entry("Jul", "Li", 'M', "Ms.", 3.8, "117PSU"),
                entry("Hana", "Sato", 'U', "Dr.", 3.8, "178PSU"),
                entry("Sara", "Kato", 'B', "Dr.", 3.9, "272PSU"),
                entry("Giselle", "LeBrun", 'R', "Ms.", 3.4, "299TU"),
            ],
        }
    }

    pub fn census(&self) -> Census {
        Census::with_blank_ids(self.census.blank_ids)
    }

    /// The entry for `student_id`, or the first entry when `None`.
    pub fn entry(&self, student_id: Option<&str>) -> Result<&StudentEntry, CliError> {
        match student_id {
            Some(id) => self
                .students
                .iter()
                .find(|entry| entry.admission.student_id == id)
                .ok_or_else(|| CliError::UnknownStudent(id.to_string())),
            None => self.students.first().ok_or(CliError::EmptyCohort),
        }
    }
}
