//! Live-instance census for students.
//!
//! A [`Census`] counts the students that have finished construction and not
//! yet been dropped. It is handed to every construction path instead of living
//! in a global, so independent cohorts (and tests) never share a count.
//!
//! Each student owns one [`Seat`]. Taking a seat increments the count, and
//! dropping it decrements the count, so the invariant
//!
//! ```text
//! live_count() == constructed - dropped
//! ```
//!
//! holds across the blank, parameterized and clone paths without any of them
//! having to remember to touch the counter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// What id a student built through the blank path receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankIdPolicy {
    /// The literal `"None"`.
    #[default]
    Placeholder,
    /// `"<100 + serial>Id"`, where serial counts prior admissions.
    Generated,
    /// An empty id.
    Empty,
}

impl BlankIdPolicy {
    /// Placeholder id used by [`BlankIdPolicy::Placeholder`].
    pub const PLACEHOLDER: &'static str = "None";
}

impl fmt::Display for BlankIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => write!(f, "placeholder"),
            Self::Generated => write!(f, "generated"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

impl std::str::FromStr for BlankIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "placeholder" | "none" => Ok(Self::Placeholder),
            "generated" => Ok(Self::Generated),
            "empty" => Ok(Self::Empty),
            _ => Err(format!("unknown blank id policy: {s}")),
        }
    }
}

#[derive(Debug, Default)]
struct Counts {
    live: AtomicUsize,
    admitted: AtomicU64,
}

/// Shared live-instance counter.
///
/// Clones share the same count; two censuses built with [`Census::new`] are
/// independent.
#[derive(Clone, Default)]
pub struct Census {
    counts: Arc<Counts>,
    blank_ids: BlankIdPolicy,
}

impl fmt::Debug for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Census")
            .field("live", &self.live_count())
            .field("admitted", &self.admitted_count())
            .field("blank_ids", &self.blank_ids)
            .finish()
    }
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    /// A census whose blank-path students draw ids from `policy`.
    pub fn with_blank_ids(policy: BlankIdPolicy) -> Self {
        Self {
            counts: Arc::default(),
            blank_ids: policy,
        }
    }

    /// Number of students currently alive in this census.
    pub fn live_count(&self) -> usize {
        self.counts.live.load(Ordering::SeqCst)
    }

    /// Number of seats ever taken, including those since released.
    pub fn admitted_count(&self) -> u64 {
        self.counts.admitted.load(Ordering::SeqCst)
    }

    pub fn blank_ids(&self) -> BlankIdPolicy {
        self.blank_ids
    }

    /// Id for the next blank-path student, per the configured policy.
    ///
    /// Must be called before the student's seat is taken so that a
    /// generated id reflects prior admissions only.
    pub(crate) fn next_blank_id(&self) -> String {
        match self.blank_ids {
            BlankIdPolicy::Placeholder => BlankIdPolicy::PLACEHOLDER.to_string(),
            BlankIdPolicy::Generated => format!("{}Id", self.admitted_count() + 100),
            BlankIdPolicy::Empty => String::new(),
        }
    }

    pub(crate) fn take_seat(&self) -> Seat {
        Seat::take(self)
    }
}

/// One student's membership in a [`Census`].
///
/// Cloning a seat takes a fresh seat in the same census.
pub(crate) struct Seat {
    census: Census,
}

impl Seat {
    fn take(census: &Census) -> Self {
        let live = census.counts.live.fetch_add(1, Ordering::SeqCst) + 1;
        census.counts.admitted.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(live, "census seat taken");
        Self {
            census: census.clone(),
        }
    }

    pub(crate) fn census(&self) -> &Census {
        &self.census
    }
}

impl Clone for Seat {
    fn clone(&self) -> Self {
        Self::take(&self.census)
    }
}

impl Drop for Seat {
    fn drop(&mut self) {
        let live = self.census.counts.live.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::trace!(live, "census seat released");
    }
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seat")
            .field("live", &self.census.live_count())
            .finish()
    }
}
