use crate::commands::{CmdMessage, CmdResult};
use crate::model::Document;
use std::collections::HashSet;

/// Findings from a consistency pass over the loaded document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    /// Loans whose book no longer exists.
    pub loans_missing_book: Vec<String>,
    /// Loans whose member no longer exists.
    pub loans_missing_member: Vec<String>,
    /// Books flagged borrowed that no loan references.
    pub borrowed_without_loan: Vec<String>,
    /// Books flagged available that a loan still references.
    pub available_with_loan: Vec<String>,
    /// Books referenced by more than one loan.
    pub books_on_multiple_loans: Vec<String>,
    /// Ids appearing more than once, as `"<collection> <id>"`.
    pub duplicate_ids: Vec<String>,
    /// Number of records changed by a `--fix` run.
    pub repaired: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.loans_missing_book.is_empty()
            && self.loans_missing_member.is_empty()
            && self.borrowed_without_loan.is_empty()
            && self.available_with_loan.is_empty()
            && self.books_on_multiple_loans.is_empty()
            && self.duplicate_ids.is_empty()
    }
}

pub fn check(doc: &Document) -> DoctorReport {
    let mut report = DoctorReport::default();

    for loan in &doc.loans {
        if doc.book(&loan.book_id).is_none() {
            report.loans_missing_book.push(loan.loan_id.clone());
        }
        if doc.member(&loan.member_id).is_none() {
            report.loans_missing_member.push(loan.loan_id.clone());
        }
    }

    let mut loaned: HashSet<&str> = HashSet::new();
    for loan in &doc.loans {
        let id = loan.book_id.as_str();
        if !loaned.insert(id) && !report.books_on_multiple_loans.iter().any(|b| b == id) {
            report.books_on_multiple_loans.push(id.to_string());
        }
    }
    for book in &doc.books {
        let has_loan = loaned.contains(book.book_id.as_str());
        if !book.is_available && !has_loan {
            report.borrowed_without_loan.push(book.book_id.clone());
        }
        if book.is_available && has_loan {
            report.available_with_loan.push(book.book_id.clone());
        }
    }

    collect_duplicates(
        "book",
        doc.books.iter().map(|b| b.book_id.as_str()),
        &mut report.duplicate_ids,
    );
    collect_duplicates(
        "member",
        doc.members.iter().map(|m| m.person_id.as_str()),
        &mut report.duplicate_ids,
    );
    collect_duplicates(
        "loan",
        doc.loans.iter().map(|l| l.loan_id.as_str()),
        &mut report.duplicate_ids,
    );

    report
}

fn collect_duplicates<'a>(kind: &str, ids: impl Iterator<Item = &'a str>, out: &mut Vec<String>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            out.push(format!("{} {}", kind, id));
        }
    }
}

/// Drop loans pointing at missing books and every loan after the first on the
/// same book, then derive each book's availability from the remaining loans.
/// Returns the number of records touched.
pub fn repair(doc: &mut Document) -> usize {
    let before = doc.loans.len();
    let book_ids: HashSet<String> = doc.books.iter().map(|b| b.book_id.clone()).collect();
    let mut on_loan: HashSet<String> = HashSet::new();
    doc.loans
        .retain(|l| book_ids.contains(&l.book_id) && on_loan.insert(l.book_id.clone()));
    let mut touched = before - doc.loans.len();

    let loaned: HashSet<String> = doc.loans.iter().map(|l| l.book_id.clone()).collect();
    for book in doc.books.iter_mut() {
        let available = !loaned.contains(&book.book_id);
        if book.is_available != available {
            book.is_available = available;
            touched += 1;
        }
    }
    touched
}

pub fn run(doc: &mut Document, fix: bool) -> CmdResult {
    let mut report = check(doc);
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return result.with_doctor(report);
    }

    result.add_message(CmdMessage::warning("Inconsistencies found:"));
    for id in &report.loans_missing_book {
        result.add_message(CmdMessage::info(format!(
            "  - Loan {} references a missing book.",
            id
        )));
    }
    for id in &report.loans_missing_member {
        result.add_message(CmdMessage::info(format!(
            "  - Loan {} references a missing member.",
            id
        )));
    }
    for id in &report.borrowed_without_loan {
        result.add_message(CmdMessage::info(format!(
            "  - Book {} is marked borrowed but has no loan.",
            id
        )));
    }
    for id in &report.available_with_loan {
        result.add_message(CmdMessage::info(format!(
            "  - Book {} is marked available but is on loan.",
            id
        )));
    }
    for id in &report.books_on_multiple_loans {
        result.add_message(CmdMessage::info(format!(
            "  - Book {} is on more than one loan.",
            id
        )));
    }
    for id in &report.duplicate_ids {
        result.add_message(CmdMessage::info(format!("  - Duplicate {}.", id)));
    }

    if fix {
        report.repaired = repair(doc);
        result.add_message(CmdMessage::success(format!(
            "Repaired {} record(s).",
            report.repaired
        )));
        if !report.duplicate_ids.is_empty() || !report.loans_missing_member.is_empty() {
            result.add_message(CmdMessage::warning(
                "Duplicate ids and loans of missing members need manual attention.",
            ));
        }
    } else {
        result.add_message(CmdMessage::info("Run with --fix to repair."));
    }

    result.with_doctor(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, Loan};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn consistent_library_is_clean() {
        let mut doc = StoreFixture::new()
            .with_book("b1", "Dune")
            .with_member("m1", "Alice")
            .with_loan("l1", "m1", "b1")
            .document();

        let result = run(&mut doc, false);
        assert!(result.doctor.unwrap().is_clean());
        assert_eq!(result.messages[0].content, "No inconsistencies found.");
    }

    #[test]
    fn detects_every_kind_of_drift() {
        let mut doc = StoreFixture::new()
            .with_book("b1", "Dune")
            .with_book("b2", "Emma")
            .with_book("b2", "Emma again")
            .with_member("m1", "Alice")
            .document();
        doc.books[0].is_available = false;
        doc.loans.push(Loan::new("l1", "m1", "gone"));
        doc.loans.push(Loan::new("l2", "ghost", "b2"));

        let report = check(&doc);
        assert_eq!(report.loans_missing_book, ["l1"]);
        assert_eq!(report.loans_missing_member, ["l2"]);
        assert_eq!(report.borrowed_without_loan, ["b1"]);
        assert_eq!(report.available_with_loan, ["b2", "b2"]);
        assert!(report.books_on_multiple_loans.is_empty());
        assert_eq!(report.duplicate_ids, ["book b2"]);

        doc.loans.push(Loan::new("l3", "m1", "b2"));
        let report = check(&doc);
        assert_eq!(report.books_on_multiple_loans, ["b2"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn fix_keeps_first_loan_of_doubly_loaned_book() {
        let mut doc = StoreFixture::new()
            .with_book("b1", "Dune")
            .with_member("m1", "Alice")
            .with_member("m2", "Bob")
            .with_loan("l1", "m1", "b1")
            .document();
        doc.loans.push(Loan::new("l2", "m2", "b1"));

        let report = check(&doc);
        assert_eq!(report.books_on_multiple_loans, ["b1"]);

        let result = run(&mut doc, true);
        assert_eq!(result.doctor.unwrap().repaired, 1);
        assert_eq!(doc.loans, vec![Loan::new("l1", "m1", "b1")]);
        assert!(!doc.books[0].is_available);
        assert!(check(&doc).is_clean());

        // Returning the surviving loan leaves nothing pointing at the book
        crate::commands::loans::return_book(&mut doc, "l1").unwrap();
        assert!(doc.books[0].is_available);
        assert!(check(&doc).is_clean());
    }

    #[test]
    fn check_only_does_not_modify() {
        let mut doc = StoreFixture::new().with_book("b1", "Dune").document();
        doc.books[0].is_available = false;
        let before = doc.clone();

        let result = run(&mut doc, false);
        assert_eq!(doc, before);
        assert_eq!(result.doctor.unwrap().repaired, 0);
    }

    #[test]
    fn fix_restores_availability_invariant() {
        let mut doc = StoreFixture::new()
            .with_book("b1", "Dune")
            .with_book("b2", "Emma")
            .with_member("m1", "Alice")
            .document();
        doc.books[0].is_available = false;
        doc.loans.push(Loan::new("l1", "m1", "b2"));
        doc.loans.push(Loan::new("l2", "m1", "gone"));

        let result = run(&mut doc, true);
        assert_eq!(result.doctor.unwrap().repaired, 3);
        assert_eq!(doc.loans, vec![Loan::new("l1", "m1", "b2")]);
        assert_eq!(
            doc.books,
            vec![
                Book::new("b1", "Dune", "Author of Dune"),
                Book {
                    is_available: false,
                    ..Book::new("b2", "Emma", "Author of Emma")
                },
            ]
        );
        assert!(check(&doc).is_clean());
    }
}
