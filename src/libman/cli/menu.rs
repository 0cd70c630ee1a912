use super::print::{write_books, write_error, write_loans, write_members, write_success};
use libman::api::LibraryApi;
use libman::error::{LibraryError, Result};
use libman::store::DataStore;
use std::io::{BufRead, Write};

/// Where to go after a sub-menu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    Quit,
}

/// The interactive nested menu. End of input behaves like choosing Exit.
pub struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut LibraryApi<S>,
    input: R,
    out: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut LibraryApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\n=== MAIN MENU ===")?;
            writeln!(self.out, "1) Books")?;
            writeln!(self.out, "2) Members")?;
            writeln!(self.out, "3) Loans")?;
            writeln!(self.out, "0) Exit")?;

            let flow = match self.prompt("Select: ")?.as_deref() {
                None | Some("0") => Flow::Quit,
                Some("1") => self.books_menu()?,
                Some("2") => self.members_menu()?,
                Some("3") => self.loans_menu()?,
                Some(_) => {
                    writeln!(self.out, "Invalid option.")?;
                    Flow::Back
                }
            };

            if flow == Flow::Quit {
                writeln!(self.out, "Goodbye!")?;
                return Ok(());
            }
        }
    }

    fn books_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.out, "\nBOOKS MENU")?;
            writeln!(self.out, "1) List books")?;
            writeln!(self.out, "2) Add book")?;
            writeln!(self.out, "3) Remove book")?;
            writeln!(self.out, "0) Back")?;

            match self.prompt("Select: ")?.as_deref() {
                None => return Ok(Flow::Quit),
                Some("0") => return Ok(Flow::Back),
                Some("1") => write_books(&mut self.out, &self.api.list_books())?,
                Some("2") => {
                    let Some(title) = self.prompt("Title: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let Some(author) = self.prompt("Author: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.api.add_book(&title, &author);
                    self.report(outcome, |b| format!("Added book with id: {}", b.book_id))?;
                }
                Some("3") => {
                    let Some(book_id) = self.prompt("Book ID to remove: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.api.remove_book(&book_id);
                    self.report(outcome, |_| "Book removed.".to_string())?;
                }
                Some(_) => writeln!(self.out, "Invalid option.")?,
            }
        }
    }

    fn members_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.out, "\nMEMBERS MENU")?;
            writeln!(self.out, "1) List members")?;
            writeln!(self.out, "2) Add member")?;
            writeln!(self.out, "3) Remove member")?;
            writeln!(self.out, "0) Back")?;

            match self.prompt("Select: ")?.as_deref() {
                None => return Ok(Flow::Quit),
                Some("0") => return Ok(Flow::Back),
                Some("1") => write_members(&mut self.out, &self.api.list_members())?,
                Some("2") => {
                    let Some(member_id) = self.prompt("Member ID: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let Some(name) = self.prompt("Name: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.api.add_member(&member_id, &name);
                    self.report(outcome, |m| format!("Added member: {}", m.person_id))?;
                }
                Some("3") => {
                    let Some(member_id) = self.prompt("Member ID to remove: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.api.remove_member(&member_id);
                    self.report(outcome, |_| "Member removed.".to_string())?;
                }
                Some(_) => writeln!(self.out, "Invalid option.")?,
            }
        }
    }

    fn loans_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.out, "\nLOANS MENU")?;
            writeln!(self.out, "1) List loans")?;
            writeln!(self.out, "2) Borrow book")?;
            writeln!(self.out, "3) Return book")?;
            writeln!(self.out, "0) Back")?;

            match self.prompt("Select: ")?.as_deref() {
                None => return Ok(Flow::Quit),
                Some("0") => return Ok(Flow::Back),
                Some("1") => write_loans(&mut self.out, &self.api.list_loans())?,
                Some("2") => {
                    let Some(member_id) = self.prompt("Member ID: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let Some(book_id) = self.prompt("Book ID: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.api.borrow_book(&member_id, &book_id);
                    self.report(outcome, |l| format!("Borrowed! Loan id: {}", l.loan_id))?;
                }
                Some("3") => {
                    let Some(loan_id) = self.prompt("Loan ID: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let outcome = self.api.return_book(&loan_id);
                    self.report(outcome, |_| "Returned successfully.".to_string())?;
                }
                Some(_) => writeln!(self.out, "Invalid option.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print the outcome of a mutation. Rule and storage failures are shown
    /// and the loop carries on; only console I/O failures propagate.
    fn report<T, F>(&mut self, outcome: Result<T>, success: F) -> Result<()>
    where
        F: FnOnce(&T) -> String,
    {
        match outcome {
            Ok(value) => write_success(&mut self.out, &success(&value))?,
            Err(LibraryError::Io(e)) => return Err(LibraryError::Io(e)),
            Err(e) => write_error(&mut self.out, &e)?,
        }
        Ok(())
    }
}
