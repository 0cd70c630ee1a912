use super::{DataStore, StoreResult};
use crate::error::StorageError;
use crate::model::Document;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Document,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: Document) -> Self {
        Self {
            doc,
            ..Self::default()
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// The last saved document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Make every following `save` fail with an IO error.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl DataStore for InMemoryStore {
    fn ensure_initialized(&mut self) -> StoreResult<()> {
        Ok(())
    }

    fn load(&self) -> StoreResult<Document> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &Document) -> StoreResult<()> {
        if self.fail_saves {
            return Err(StorageError::io(
                "<memory>",
                io::Error::other("simulated write failure"),
            ));
        }
        self.doc = doc.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, Loan, Person};

    pub struct StoreFixture {
        pub doc: Document,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                doc: Document::default(),
            }
        }

        pub fn with_book(mut self, book_id: &str, title: &str) -> Self {
            self.doc
                .books
                .push(Book::new(book_id, title, format!("Author of {}", title)));
            self
        }

        pub fn with_member(mut self, member_id: &str, name: &str) -> Self {
            self.doc.members.push(Person::member(member_id, name));
            self
        }

        /// Adds a loan and flags the book as borrowed, the way a borrow would.
        pub fn with_loan(mut self, loan_id: &str, member_id: &str, book_id: &str) -> Self {
            if let Some(book) = self.doc.book_mut(book_id) {
                book.is_available = false;
            }
            self.doc.loans.push(Loan::new(loan_id, member_id, book_id));
            self
        }

        pub fn document(self) -> Document {
            self.doc
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_document(self.doc)
        }
    }
}
