use crate::error::ValidationError;
use crate::model::{short_id, Document, Loan};

use super::helpers::unique_id;

pub fn list(doc: &Document) -> Vec<Loan> {
    doc.loans.clone()
}

pub fn borrow(
    doc: &mut Document,
    member_id: &str,
    book_id: &str,
) -> Result<Loan, ValidationError> {
    borrow_with_ids(doc, member_id, book_id, short_id)
}

/// Check out `book_id` to `member_id`. The book flips to borrowed.
pub fn borrow_with_ids<G: FnMut() -> String>(
    doc: &mut Document,
    member_id: &str,
    book_id: &str,
    ids: G,
) -> Result<Loan, ValidationError> {
    if doc.member(member_id).is_none() {
        return Err(ValidationError::MemberNotFound);
    }
    match doc.book(book_id) {
        None => return Err(ValidationError::BookNotFound),
        Some(book) if !book.is_available => return Err(ValidationError::BookUnavailable),
        Some(_) => {}
    }

    let loan_id = unique_id(|id| doc.loan(id).is_some(), ids);
    let loan = Loan::new(loan_id, member_id, book_id);
    if let Some(book) = doc.book_mut(book_id) {
        book.is_available = false;
    }
    doc.loans.push(loan.clone());
    Ok(loan)
}

/// Close `loan_id`. The book becomes available again if it still exists.
pub fn return_book(doc: &mut Document, loan_id: &str) -> Result<Loan, ValidationError> {
    let pos = doc
        .loans
        .iter()
        .position(|l| l.loan_id == loan_id)
        .ok_or(ValidationError::LoanNotFound)?;
    let loan = doc.loans.remove(pos);
    if let Some(book) = doc.book_mut(&loan.book_id) {
        book.is_available = true;
    }
    Ok(loan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::scripted_ids;
    use crate::store::memory::fixtures::StoreFixture;
    use std::collections::BTreeSet;

    fn library() -> Document {
        StoreFixture::new()
            .with_book("b1", "Dune")
            .with_book("b2", "Emma")
            .with_member("m1", "Alice")
            .document()
    }

    fn borrowed_ids(doc: &Document) -> BTreeSet<String> {
        doc.books
            .iter()
            .filter(|b| !b.is_available)
            .map(|b| b.book_id.clone())
            .collect()
    }

    fn loaned_ids(doc: &Document) -> BTreeSet<String> {
        doc.loans.iter().map(|l| l.book_id.clone()).collect()
    }

    #[test]
    fn borrow_creates_loan_and_flips_book() {
        let mut doc = library();
        let loan = borrow(&mut doc, "m1", "b1").unwrap();

        assert_eq!(loan.member_id, "m1");
        assert_eq!(loan.book_id, "b1");
        assert_eq!(loan.loan_id.len(), 8);
        assert!(!doc.book("b1").unwrap().is_available);
        assert!(doc.book("b2").unwrap().is_available);
        assert_eq!(list(&doc), vec![loan]);
        assert_eq!(borrowed_ids(&doc), loaned_ids(&doc));
    }

    #[test]
    fn borrow_requires_known_member() {
        let mut doc = library();
        assert_eq!(
            borrow(&mut doc, "m9", "b1"),
            Err(ValidationError::MemberNotFound)
        );
        assert!(doc.loans.is_empty());
    }

    #[test]
    fn borrow_requires_known_book() {
        let mut doc = library();
        assert_eq!(
            borrow(&mut doc, "m1", "b9"),
            Err(ValidationError::BookNotFound)
        );
    }

    #[test]
    fn member_is_checked_before_book() {
        let mut doc = library();
        assert_eq!(
            borrow(&mut doc, "m9", "b9"),
            Err(ValidationError::MemberNotFound)
        );
    }

    #[test]
    fn borrowing_twice_fails_and_leaves_state_unchanged() {
        let mut doc = library();
        borrow(&mut doc, "m1", "b1").unwrap();
        let before = doc.clone();

        assert_eq!(
            borrow(&mut doc, "m1", "b1"),
            Err(ValidationError::BookUnavailable)
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn loan_ids_skip_collisions() {
        let mut doc = library();
        let first =
            borrow_with_ids(&mut doc, "m1", "b1", scripted_ids(&["0000aaaa"])).unwrap();
        let second = borrow_with_ids(
            &mut doc,
            "m1",
            "b2",
            scripted_ids(&["0000aaaa", "0000bbbb"]),
        )
        .unwrap();

        assert_eq!(first.loan_id, "0000aaaa");
        assert_eq!(second.loan_id, "0000bbbb");
    }

    #[test]
    fn return_frees_book_and_drops_loan() {
        let mut doc = library();
        let loan = borrow(&mut doc, "m1", "b1").unwrap();

        let returned = return_book(&mut doc, &loan.loan_id).unwrap();
        assert_eq!(returned, loan);
        assert!(doc.loans.is_empty());
        assert!(doc.book("b1").unwrap().is_available);
    }

    #[test]
    fn return_unknown_loan_fails() {
        let mut doc = library();
        assert_eq!(
            return_book(&mut doc, "nope"),
            Err(ValidationError::LoanNotFound)
        );
    }

    #[test]
    fn return_tolerates_missing_book() {
        let mut doc = StoreFixture::new()
            .with_member("m1", "Alice")
            .with_loan("l1", "m1", "gone")
            .document();

        return_book(&mut doc, "l1").unwrap();
        assert!(doc.loans.is_empty());
    }

    #[test]
    fn returned_book_can_be_borrowed_again() {
        let mut doc = library();
        let loan = borrow(&mut doc, "m1", "b1").unwrap();
        return_book(&mut doc, &loan.loan_id).unwrap();

        borrow(&mut doc, "m1", "b1").unwrap();
        assert_eq!(borrowed_ids(&doc), loaned_ids(&doc));
    }
}
