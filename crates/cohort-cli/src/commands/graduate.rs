use crate::support::{load_cohort_or_exit, print_json, uncaught};
use cohort_kernel::{GraduationFault, Student};
use serde_json::json;

/// What the outermost handler does with a review outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub exit_code: i32,
    pub message: String,
}

/// Discriminate the outcome by kind. Kinds without a dedicated handler fall
/// through to the catch-all.
pub fn verdict(outcome: &Result<(), GraduationFault>) -> Verdict {
    let (exit_code, message) = match outcome {
        Ok(()) => (0, "Moving onward with remainder of code.".to_string()),
        Err(GraduationFault::LowGpa { gpa }) => (1, format!("Too low gpa: {gpa}")),
        Err(GraduationFault::MissingCredits { missing }) => {
            (2, format!("Missing {missing} credits"))
        }
        Err(GraduationFault::GenericMessage { message }) => (4, message.clone()),
        Err(GraduationFault::StudentFault { code }) => (5, format!("Error: {code}")),
        Err(_) => (6, "Exiting".to_string()),
    };
    Verdict { exit_code, message }
}

pub fn run(config: Option<String>, student_id: Option<String>, json_output: bool) {
    let cohort = load_cohort_or_exit(config.as_deref());
    let entry = cohort
        .entry(student_id.as_deref())
        .unwrap_or_else(|e| uncaught(&e));
    let census = cohort.census();
    let student = Student::admit(&census, entry.admission.clone());

    let outcome = student.attempt_graduation(&entry.transcript, &cohort.graduation);
    let verdict = verdict(&outcome);
    match &outcome {
        Ok(()) => tracing::info!(student_id = student.student_id(), "student may graduate"),
        Err(fault) => tracing::warn!(
            student_id = student.student_id(),
            kind = fault.kind_name(),
            stage = %fault.stage(),
            "graduation refused"
        ),
    }

    if json_output {
        print_json(&json!({
            "student_id": student.student_id(),
            "eligible": outcome.is_ok(),
            "fault": outcome.as_ref().err(),
            "exit_code": verdict.exit_code,
            "message": verdict.message,
        }));
    } else {
        println!("{}", verdict.message);
    }

    if verdict.exit_code != 0 {
        std::process::exit(verdict.exit_code);
    }
}
