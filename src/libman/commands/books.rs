use crate::error::ValidationError;
use crate::model::{short_id, Book, Document};

use super::helpers::{clean, unique_id};

pub fn list(doc: &Document) -> Vec<Book> {
    doc.books.clone()
}

pub fn add(doc: &mut Document, title: &str, author: &str) -> Book {
    add_with_ids(doc, title, author, short_id)
}

pub fn add_with_ids<G: FnMut() -> String>(
    doc: &mut Document,
    title: &str,
    author: &str,
    ids: G,
) -> Book {
    let book_id = unique_id(|id| doc.book(id).is_some(), ids);
    let book = Book::new(book_id, clean(title), clean(author));
    doc.books.push(book.clone());
    book
}

pub fn find<'a>(doc: &'a Document, book_id: &str) -> Option<&'a Book> {
    doc.book(book_id)
}

pub fn remove(doc: &mut Document, book_id: &str) -> Result<Book, ValidationError> {
    let pos = doc
        .books
        .iter()
        .position(|b| b.book_id == book_id)
        .ok_or(ValidationError::BookNotFound)?;
    if !doc.books[pos].is_available {
        return Err(ValidationError::BookBorrowed);
    }
    Ok(doc.books.remove(pos))
}
