use crate::support::{admit_roster, load_cohort_or_exit, print_json};
use cohort_kernel::Persona;
use serde_json::json;
use std::io::{self, Write};

pub fn run(config: Option<String>, promote: bool, json_output: bool) {
    let cohort = load_cohort_or_exit(config.as_deref());
    let census = cohort.census();
    let mut roster = admit_roster(&cohort, &census);

    roster.sort_stable();
    if promote {
        for student in &mut roster {
            student.promote_credential();
        }
    }

    if json_output {
        let students: Vec<_> = roster
            .iter()
            .map(|student| {
                let entity: &dyn Persona = student;
                json!({
                    "kind": entity.kind(),
                    "line": entity.describe_line(),
                    "student": student,
                })
            })
            .collect();
        print_json(&json!({
            "promoted": promote,
            "live_count": census.live_count(),
            "students": students,
        }));
        return;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = roster
        .describe_all(&mut out)
        .and_then(|()| writeln!(out, "Total number of students: {}", census.live_count()));
    if let Err(e) = written {
        eprintln!("error: failed to write roster: {e}");
        std::process::exit(1);
    }
}
