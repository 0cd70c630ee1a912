use colored::Colorize;
use libman::api::{CmdMessage, MessageLevel};
use libman::error::LibraryError;
use libman::model::{Book, Loan, Person};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 48;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn write_success<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text.green())
}

pub(super) fn write_error<W: Write>(out: &mut W, err: &LibraryError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", err).red())
}

pub(super) fn write_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "No books found.");
    }
    for b in books {
        let status = if b.is_available {
            b.status_label().green()
        } else {
            b.status_label().yellow()
        };
        writeln!(
            out,
            "- [{}] {} by {} ({})",
            b.book_id,
            truncate_to_width(&b.title, TITLE_WIDTH),
            b.author,
            status
        )?;
    }
    Ok(())
}

pub(super) fn write_members<W: Write>(out: &mut W, members: &[Person]) -> io::Result<()> {
    if members.is_empty() {
        return writeln!(out, "No members found.");
    }
    for m in members {
        writeln!(out, "- [{}] {} ({})", m.person_id, m.name, m.role_label())?;
    }
    Ok(())
}

pub(super) fn write_loans<W: Write>(out: &mut W, loans: &[Loan]) -> io::Result<()> {
    if loans.is_empty() {
        return writeln!(out, "No loans found.");
    }
    for l in loans {
        writeln!(
            out,
            "- Loan[{}] Member={} Book={}",
            l.loan_id, l.member_id, l.book_id
        )?;
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
