use crate::error::ValidationError;
use crate::model::{Document, Person};

use super::helpers::clean;

pub fn list(doc: &Document) -> Vec<Person> {
    doc.members.clone()
}

pub fn add(doc: &mut Document, member_id: &str, name: &str) -> Result<Person, ValidationError> {
    let member_id = clean(member_id);
    if doc.member(&member_id).is_some() {
        return Err(ValidationError::DuplicateMember);
    }
    let member = Person::member(member_id, clean(name));
    doc.members.push(member.clone());
    Ok(member)
}

pub fn find<'a>(doc: &'a Document, member_id: &str) -> Option<&'a Person> {
    doc.member(member_id)
}

pub fn remove(doc: &mut Document, member_id: &str) -> Result<Person, ValidationError> {
    let pos = doc
        .members
        .iter()
        .position(|m| m.person_id == member_id)
        .ok_or(ValidationError::MemberNotFound)?;
    if doc.has_loans_for_member(member_id) {
        return Err(ValidationError::MemberHasLoans);
    }
    Ok(doc.members.remove(pos))
}
