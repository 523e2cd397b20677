use crate::config::{CliError, CohortFile};
use cohort_kernel::{BlankIdPolicy, Census, Roster, Student};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "COHORT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Exit status for failures outside the graduation taxonomy.
pub const UNCAUGHT_EXIT_CODE: i32 = 1;

/// Install the stderr subscriber. `-v` flags win over `COHORT_LOG`.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Report a failure nothing handled and end the process.
pub fn uncaught(err: &CliError) -> ! {
    tracing::error!(error = %err, "uncaught failure");
    eprintln!("Uncaught failure: {err}. Program terminating");
    std::process::exit(UNCAUGHT_EXIT_CODE);
}

pub fn parse_blank_ids_or_exit(policy: &str) -> BlankIdPolicy {
    policy.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn load_cohort_or_exit(config: Option<&str>) -> CohortFile {
    match config {
        Some(path) => CohortFile::load(path).unwrap_or_else(|e| uncaught(&e)),
        None => CohortFile::builtin(),
    }
}

/// Admit every configured student into a fresh roster.
///
/// Each admission is a temporary; the roster keeps its own copy, so the
/// census ends up counting roster entries only.
pub fn admit_roster(cohort: &CohortFile, census: &Census) -> Roster {
    let mut roster = Roster::new();
    for entry in &cohort.students {
        let student = Student::admit(census, entry.admission.clone());
        roster.insert(&student);
    }
    roster
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}
