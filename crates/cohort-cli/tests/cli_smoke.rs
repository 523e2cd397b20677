use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "cohort-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).expect("config should be written");
        path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_cohort<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_cohort");
    Command::new(bin)
        .args(args)
        .env_remove("COHORT_LOG")
        .output()
        .expect("cohort command should execute")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_status(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "unexpected status\nstdout:\n{}\nstderr:\n{}",
        stdout(output),
        stderr(output),
    );
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be json: {e}\nstdout:\n{}\nstderr:\n{}",
            stdout(output),
            stderr(output)
        )
    })
}

const LOW_GPA_COHORT: &str = r#"
[[students]]
first_name = "Ling"
last_name = "Mau"
middle_initial = "I"
title = "Ms."
gpa = 1.5
current_course = "C++"
student_id = "55UD"
"#;

const STAGED_COHORT: &str = r#"
[graduation]
required_credits = 120
required_courses = [{ title = "Intro. to Programming", number = 1234 }]

[[students]]
first_name = "Short"
gpa = 3.0
student_id = "credits"
[students.transcript]
credits_earned = 100

[[students]]
first_name = "Course"
gpa = 3.0
student_id = "course"
[students.transcript]
credits_earned = 120

[[students]]
first_name = "Hold"
gpa = 3.0
student_id = "hold"
[students.transcript]
credits_earned = 130
completed_courses = [{ title = "Intro. to Programming", number = 1234 }]
holds = ["Student does not meet prerequisites"]

[[students]]
first_name = "Clear"
gpa = 3.0
student_id = "clear"
[students.transcript]
credits_earned = 130
completed_courses = [{ title = "Intro. to Programming", number = 1234 }]
audited = true
"#;

#[test]
fn graduate_builtin_reaches_student_fault() {
    let output = run_cohort(["graduate"]);
    assert_status(&output, 5);
    assert_eq!(stdout(&output).trim(), "Error: 5");
}

#[test]
fn graduate_low_gpa_exits_one() {
    let tmp = TempDirGuard::new("low-gpa");
    let config = tmp.write("cohort.toml", LOW_GPA_COHORT);

    let output = run_cohort([OsStr::new("graduate"), OsStr::new("--config"), config.as_os_str()]);
    assert_status(&output, 1);
    assert_eq!(stdout(&output).trim(), "Too low gpa: 1.5");
}

#[test]
fn graduate_statuses_follow_stage_order() {
    let tmp = TempDirGuard::new("staged");
    let config = tmp.write("cohort.toml", STAGED_COHORT);
    let config = config.to_str().expect("utf-8 temp path");

    for (student, status, message) in [
        ("credits", 2, "Missing 20 credits"),
        ("course", 6, "Exiting"),
        ("hold", 4, "Student does not meet prerequisites"),
        ("clear", 0, "Moving onward with remainder of code."),
    ] {
        let output = run_cohort(["graduate", "--config", config, "--student", student]);
        assert_status(&output, status);
        assert_eq!(stdout(&output).trim(), message, "student {student}");
    }
}

#[test]
fn graduate_json_reports_fault_kind() {
    let output = run_cohort(["graduate", "--json"]);
    assert_status(&output, 5);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["student_id"], "55UD");
    assert_eq!(payload["eligible"], false);
    assert_eq!(payload["fault"]["kind"], "student_fault");
    assert_eq!(payload["fault"]["code"], 5);
}

#[test]
fn unknown_student_is_uncaught() {
    let output = run_cohort(["graduate", "--student", "nobody"]);
    assert_status(&output, 1);
    assert!(
        stderr(&output).contains("Uncaught failure: student not found: nobody. Program terminating"),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn missing_config_is_uncaught() {
    let tmp = TempDirGuard::new("missing");
    let missing = tmp.path().join("absent.toml");

    let output = run_cohort([OsStr::new("roster"), OsStr::new("--config"), missing.as_os_str()]);
    assert_status(&output, 1);
    assert!(stderr(&output).contains("Uncaught failure: failed to read"));
}

#[test]
fn roster_sorts_by_gpa_and_counts_live_students() {
    let output = run_cohort(["roster"]);
    assert_status(&output, 0);
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Ms. Ling I. Mau with id: 55UD GPA: 3.1 Course: C++",
            "Ms. Giselle R. LeBrun with id: 299TU GPA: 3.4 Course: C++",
            "Ms. Jul M. Li with id: 117PSU GPA: 3.8 Course: C++",
            "Dr. Hana U. Sato with id: 178PSU GPA: 3.8 Course: C++",
            "Dr. Sara B. Kato with id: 272PSU GPA: 3.9 Course: C++",
            "Total number of students: 5",
        ]
    );
}

#[test]
fn roster_promote_updates_every_title() {
    let output = run_cohort(["roster", "--promote", "--json"]);
    assert_status(&output, 0);
    let payload = parse_json_stdout(&output);
    let students = payload["students"].as_array().expect("students array");
    assert_eq!(students.len(), 5);
    assert!(students.iter().all(|s| s["student"]["title"] == "Dr."));
    assert!(students.iter().all(|s| s["kind"] == "Student"));
    assert_eq!(payload["live_count"], 5);
}

#[test]
fn census_returns_to_zero() {
    let output = run_cohort(["census", "--json"]);
    assert_status(&output, 0);
    let payload = parse_json_stdout(&output);
    let counts: Vec<u64> = payload["steps"]
        .as_array()
        .expect("steps array")
        .iter()
        .map(|step| step["live_count"].as_u64().expect("count"))
        .collect();
    assert_eq!(counts, [5, 10, 11, 6, 5, 0]);
    assert_eq!(payload["blank_id"], "None");
}

#[test]
fn census_blank_ids_flag_overrides_policy() {
    let output = run_cohort(["census", "--blank-ids", "generated", "--json"]);
    assert_status(&output, 0);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["blank_id_policy"], "generated");
    // 15 seats precede the blank student: 5 admissions, 5 roster entries, 5 copies.
    assert_eq!(payload["blank_id"], "115Id");
}

#[test]
fn census_rejects_unknown_blank_id_policy() {
    let output = run_cohort(["census", "--blank-ids", "bogus"]);
    assert_status(&output, 1);
    assert!(
        stderr(&output).contains("error: unknown blank id policy: bogus"),
        "stderr:\n{}",
        stderr(&output)
    );
}
