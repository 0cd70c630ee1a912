use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Length of the generated book and loan ids.
pub const SHORT_ID_LEN: usize = 8;

/// A fresh 8-character lowercase hex token.
///
/// Uniqueness within a collection is the caller's job, see
/// [`crate::commands::helpers::unique_id`].
pub fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHORT_ID_LEN);
    id
}

/// Display role of a person. Carries no behavior beyond its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Member,
    Librarian,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Librarian => "Librarian",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: String,
    pub name: String,
    // Only members are persisted, so the tag never hits the file
    #[serde(skip)]
    pub role: Role,
}

impl Person {
    pub fn member(person_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            name: name.into(),
            role: Role::Member,
        }
    }

    pub fn librarian(person_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            name: name.into(),
            role: Role::Librarian,
        }
    }

    pub fn role_label(&self) -> &'static str {
        self.role.label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub author: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl Book {
    pub fn new(
        book_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            title: title.into(),
            author: author.into(),
            is_available: true,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_available {
            "Available"
        } else {
            "Borrowed"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: String,
    pub member_id: String,
    pub book_id: String,
}

impl Loan {
    pub fn new(
        loan_id: impl Into<String>,
        member_id: impl Into<String>,
        book_id: impl Into<String>,
    ) -> Self {
        Self {
            loan_id: loan_id.into(),
            member_id: member_id.into(),
            book_id: book_id.into(),
        }
    }
}

/// The whole persisted state: one JSON object with three collections.
///
/// Top-level keys other than the three collections are kept in `extra` so a
/// load/save cycle does not drop them. They keep their relative order from the
/// file and are written after `loans`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub members: Vec<Person>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.book_id == book_id)
    }

    pub fn book_mut(&mut self, book_id: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.book_id == book_id)
    }

    pub fn member(&self, member_id: &str) -> Option<&Person> {
        self.members.iter().find(|m| m.person_id == member_id)
    }

    pub fn loan(&self, loan_id: &str) -> Option<&Loan> {
        self.loans.iter().find(|l| l.loan_id == loan_id)
    }

    pub fn has_loans_for_member(&self, member_id: &str) -> bool {
        self.loans.iter().any(|l| l.member_id == member_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_is_eight_hex_chars() {
        let id = short_id();
        assert_eq!(id.len(), SHORT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn role_labels() {
        assert_eq!(Person::member("m1", "Alice").role_label(), "Member");
        assert_eq!(Person::librarian("l1", "Bob").role_label(), "Librarian");
    }

    #[test]
    fn member_serializes_without_role() {
        let json = serde_json::to_string(&Person::librarian("l1", "Bob")).unwrap();
        assert_eq!(json, r#"{"person_id":"l1","name":"Bob"}"#);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let doc: Document = serde_json::from_str(
            r#"{"books": [{"book_id": "ab12cd34", "title": "Dune", "author": "Herbert"}]}"#,
        )
        .unwrap();
        assert!(doc.books[0].is_available);
        assert!(doc.members.is_empty());
        assert!(doc.loans.is_empty());
    }

    #[test]
    fn unknown_top_level_keys_survive() {
        let raw = r#"{"books": [], "members": [], "loans": [], "version": 2}"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.extra.get("version"), Some(&Value::from(2)));

        let out = serde_json::to_value(&doc).unwrap();
        assert_eq!(out["version"], Value::from(2));
    }

    #[test]
    fn unknown_keys_keep_file_order() {
        let raw = r#"{"zeta": 1, "books": [], "alpha": 2, "members": [], "mid": 3}"#;
        let doc: Document = serde_json::from_str(raw).unwrap();

        let out = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            out,
            r#"{"books":[],"members":[],"loans":[],"zeta":1,"alpha":2,"mid":3}"#
        );
    }

    #[test]
    fn collections_serialize_in_fixed_order() {
        let doc = Document::default();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        assert_eq!(json, "{\n  \"books\": [],\n  \"members\": [],\n  \"loans\": []\n}");
    }
}
