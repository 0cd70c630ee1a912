//! # API Facade
//!
//! [`LibraryApi`] is the single entry point for every library operation,
//! whatever UI sits on top of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the state**: the whole [`Document`] is loaded once, in [`LibraryApi::new`]
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Persists**: every successful mutation is followed by a full save
//!
//! ## What the API Does NOT Do
//!
//! - **Business rules**: those live in `commands/*.rs`
//! - **Terminal I/O**: no stdout, stderr, or prompts
//!
//! ## Save Failures
//!
//! A mutation is applied in memory before the save is attempted. When the save
//! fails the error is returned but the in-memory change stays, so the next
//! successful save writes it out. Validation failures never touch state.
//!
//! ## Generic Over DataStore
//!
//! - Production: `LibraryApi<FileStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::commands::{self, books, doctor, loans, members, CmdResult, LibmanPaths};
use crate::error::Result;
use crate::model::{Book, Document, Loan, Person};
use crate::store::fs::FileStore;
use crate::store::DataStore;

pub struct LibraryApi<S: DataStore> {
    store: S,
    doc: Document,
}

impl<S: DataStore> LibraryApi<S> {
    /// Bootstrap the store and load the full document. Load errors are fatal.
    pub fn new(mut store: S) -> Result<Self> {
        store.ensure_initialized()?;
        let doc = store.load()?;
        Ok(Self { store, doc })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(&self.doc) {
            tracing::warn!(error = %e, "save failed, in-memory state is ahead of storage");
            return Err(e.into());
        }
        Ok(())
    }

    // --- Books ---

    pub fn list_books(&self) -> Vec<Book> {
        books::list(&self.doc)
    }

    pub fn add_book(&mut self, title: &str, author: &str) -> Result<Book> {
        let book = books::add(&mut self.doc, title, author);
        self.persist()?;
        tracing::info!(book_id = %book.book_id, title = %book.title, "book added");
        Ok(book)
    }

    pub fn find_book(&self, book_id: &str) -> Option<&Book> {
        books::find(&self.doc, book_id)
    }

    pub fn remove_book(&mut self, book_id: &str) -> Result<Book> {
        let book = books::remove(&mut self.doc, book_id)?;
        self.persist()?;
        tracing::info!(book_id = %book.book_id, "book removed");
        Ok(book)
    }

    // --- Members ---

    pub fn list_members(&self) -> Vec<Person> {
        members::list(&self.doc)
    }

    pub fn add_member(&mut self, member_id: &str, name: &str) -> Result<Person> {
        let member = members::add(&mut self.doc, member_id, name)?;
        self.persist()?;
        tracing::info!(member_id = %member.person_id, "member added");
        Ok(member)
    }

    pub fn find_member(&self, member_id: &str) -> Option<&Person> {
        members::find(&self.doc, member_id)
    }

    pub fn remove_member(&mut self, member_id: &str) -> Result<Person> {
        let member = members::remove(&mut self.doc, member_id)?;
        self.persist()?;
        tracing::info!(member_id = %member.person_id, "member removed");
        Ok(member)
    }

    // --- Loans ---

    pub fn list_loans(&self) -> Vec<Loan> {
        loans::list(&self.doc)
    }

    pub fn borrow_book(&mut self, member_id: &str, book_id: &str) -> Result<Loan> {
        let loan = loans::borrow(&mut self.doc, member_id, book_id)?;
        self.persist()?;
        tracing::info!(
            loan_id = %loan.loan_id,
            member_id = %loan.member_id,
            book_id = %loan.book_id,
            "book borrowed"
        );
        Ok(loan)
    }

    pub fn return_book(&mut self, loan_id: &str) -> Result<Loan> {
        let loan = loans::return_book(&mut self.doc, loan_id)?;
        self.persist()?;
        tracing::info!(loan_id = %loan.loan_id, book_id = %loan.book_id, "book returned");
        Ok(loan)
    }

    // --- Housekeeping ---

    pub fn doctor(&mut self, fix: bool) -> Result<CmdResult> {
        let result = doctor::run(&mut self.doc, fix);
        if let Some(report) = &result.doctor {
            if !report.is_clean() {
                tracing::warn!(?report, "consistency problems found");
            }
            if report.repaired > 0 {
                self.persist()?;
            }
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::doctor::DoctorReport;
pub use crate::commands::{CmdMessage, MessageLevel};

/// Bootstrap the data file at `paths.data_file` and check that it loads.
pub fn init(paths: &LibmanPaths) -> Result<CmdResult> {
    commands::init::run(&mut FileStore::new(&paths.data_file))
}

/// Config does not need a loaded library, so it is reachable without one.
pub fn config(paths: &LibmanPaths, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(paths, action)
}
