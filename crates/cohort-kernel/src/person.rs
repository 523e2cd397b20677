//! The person capability set.
//!
//! [`Person`] is the plain value record: four identity fields, all blank by
//! default, copied by value. [`Persona`] is the capability set every entity in
//! a cohort exposes. It is object safe, so callers hold `&dyn Persona` and
//! dispatch resolves against the concrete type behind the handle.
//!
//! Titles are read through [`Persona::title`] but only written through a
//! [`TitleGrant`], which can be obtained inside this crate only. Variants
//! defined here (see [`crate::student`]) expose narrow public operations,
//! such as a credential promotion, that use a grant internally.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Identity fields shared by every entity in a cohort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    middle_initial: Option<char>,
    /// Salutation: Mr., Ms., Dr., and so on.
    #[serde(default)]
    title: String,
}

impl Person {
    /// Build a person from its four identity fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        middle_initial: Option<char>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_initial,
            title: title.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn middle_initial(&self) -> Option<char> {
        self.middle_initial
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The privileged write access to this person's title.
    pub(crate) fn title_grant(&mut self) -> TitleGrant<'_> {
        TitleGrant {
            title: &mut self.title,
        }
    }
}

/// Write access to exactly one title, held only by variants in this crate.
#[derive(Debug)]
pub struct TitleGrant<'a> {
    title: &'a mut String,
}

impl TitleGrant<'_> {
    /// Replace the title with an owned copy of `new_title`.
    pub fn promote_title(self, new_title: &str) {
        self.title.clear();
        self.title.push_str(new_title);
    }
}

/// The capability set of a cohort entity.
///
/// Implementors supply [`person`](Persona::person) and [`kind`](Persona::kind).
/// `describe` and `greet` have base behavior that variants may override or
/// inherit.
pub trait Persona {
    /// The identity record backing this entity.
    fn person(&self) -> &Person;

    /// Label of the concrete runtime type.
    fn kind(&self) -> &'static str;

    fn first_name(&self) -> &str {
        self.person().first_name()
    }

    fn last_name(&self) -> &str {
        self.person().last_name()
    }

    fn middle_initial(&self) -> Option<char> {
        self.person().middle_initial()
    }

    fn title(&self) -> &str {
        self.person().title()
    }

    /// Write a one-line description of this entity to `out`.
    fn describe(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", name_line(self))
    }

    /// Write `msg` to `out` unchanged.
    fn greet(&self, msg: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{msg}")
    }

    /// The line [`describe`](Persona::describe) would write, without the
    /// trailing newline.
    fn describe_line(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.describe(&mut buf);
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
        }
        line
    }
}

impl Persona for Person {
    fn person(&self) -> &Person {
        self
    }

    fn kind(&self) -> &'static str {
        "Person"
    }
}

/// `Title First M. Last`, skipping blank parts.
///
/// Reads only through the public [`Persona`] accessors.
pub fn name_line<P: Persona + ?Sized>(entity: &P) -> String {
    let initial = entity.middle_initial().map(|c| format!("{c}."));
    [
        Some(entity.title()),
        Some(entity.first_name()),
        initial.as_deref(),
        Some(entity.last_name()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jo() -> Person {
        Person::new("Jo", "Li", Some('U'), "Ms.")
    }

    #[test]
    fn default_person_is_blank() {
        let p = Person::default();
        assert_eq!(p.first_name(), "");
        assert_eq!(p.last_name(), "");
        assert_eq!(p.middle_initial(), None);
        assert_eq!(p.title(), "");
        assert_eq!(p.describe_line(), "");
    }

    #[test]
    fn person_is_a_person() {
        let p = jo();
        let handle: &dyn Persona = &p;
        assert_eq!(handle.kind(), "Person");
    }

    #[test]
    fn describe_writes_one_line() {
        let mut out = Vec::new();
        jo().describe(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Ms. Jo U. Li\n");
    }

    #[test]
    fn describe_skips_missing_initial() {
        let p = Person::new("Jo", "Li", None, "");
        assert_eq!(p.describe_line(), "Jo Li");
    }

    #[test]
    fn greet_emits_message_unchanged() {
        let mut out = Vec::new();
        jo().greet("  Hello, there!  ", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  Hello, there!  \n");
    }

    #[test]
    fn title_grant_replaces_title() {
        let mut p = jo();
        p.title_grant().promote_title("Dr.");
        assert_eq!(p.title(), "Dr.");
        assert_eq!(p.first_name(), "Jo");
    }

    #[test]
    fn copies_are_independent() {
        let original = jo();
        let mut copy = original.clone();
        copy.title_grant().promote_title("Prof.");
        assert_eq!(original.title(), "Ms.");
        assert_ne!(original, copy);
    }

    #[test]
    fn assigning_from_equal_value_is_a_no_op() {
        let mut p = jo();
        let same = p.clone();
        p.clone_from(&same);
        assert_eq!(p, jo());
    }

    #[test]
    fn person_roundtrips_through_json_with_defaults() {
        let p: Person = serde_json::from_str(r#"{"first_name":"Zack"}"#).unwrap();
        assert_eq!(p, Person::new("Zack", "", None, ""));
    }
}
