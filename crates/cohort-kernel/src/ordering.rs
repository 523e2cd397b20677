//! Ordering of students by gpa.
//!
//! Students with equal gpa compare as equal; callers that care about their
//! relative order must sort stably (see [`crate::roster::Roster::sort_stable`]).

use crate::student::Student;
use std::cmp::Ordering;

/// `a.gpa < b.gpa`.
pub fn gpa_less(a: &Student, b: &Student) -> bool {
    a.gpa() < b.gpa()
}

/// Total order on gpa, suitable for `sort_by`.
///
/// Agrees with [`gpa_less`] on every number, so `-0.0` and `0.0` tie. NaN
/// sorts after every number and ties with other NaNs.
pub fn by_gpa(a: &Student, b: &Student) -> Ordering {
    let (x, y) = (a.gpa(), b.gpa());
    x.partial_cmp(&y)
        .unwrap_or_else(|| x.is_nan().cmp(&y.is_nan()))
}
