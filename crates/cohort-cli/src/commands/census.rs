use crate::support::{admit_roster, load_cohort_or_exit, parse_blank_ids_or_exit, print_json};
use cohort_kernel::Student;
use serde_json::json;

pub fn run(config: Option<String>, blank_ids: Option<String>, json_output: bool) {
    let mut cohort = load_cohort_or_exit(config.as_deref());
    if let Some(policy) = blank_ids.as_deref() {
        cohort.census.blank_ids = parse_blank_ids_or_exit(policy);
    }
    let census = cohort.census();
    let mut observations: Vec<(&str, usize)> = Vec::new();

    let roster = admit_roster(&cohort, &census);
    observations.push(("admitted", census.live_count()));

    let copy = roster.clone();
    observations.push(("roster_copied", census.live_count()));

    let blank = Student::blank(&census);
    let blank_id = blank.student_id().to_string();
    observations.push(("blank_admitted", census.live_count()));

    drop(copy);
    observations.push(("copy_dropped", census.live_count()));
    drop(blank);
    observations.push(("blank_dropped", census.live_count()));
    drop(roster);
    observations.push(("roster_dropped", census.live_count()));

    if json_output {
        let steps: Vec<_> = observations
            .iter()
            .map(|(step, live)| json!({ "step": step, "live_count": live }))
            .collect();
        print_json(&json!({
            "blank_id_policy": census.blank_ids().to_string(),
            "blank_id": blank_id,
            "admitted_count": census.admitted_count(),
            "steps": steps,
        }));
    } else {
        println!("cohort census --blank-ids {}", census.blank_ids());
        for (step, live) in &observations {
            println!("  {step}: {live}");
        }
        println!("  Blank id: {blank_id}");
        println!("  Seats ever taken: {}", census.admitted_count());
    }
}
