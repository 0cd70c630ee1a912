use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::DataStore;

/// Create the data file if needed and confirm it parses.
pub fn run(store: &mut FileStore) -> Result<CmdResult> {
    store.ensure_initialized()?;
    let doc = store.load()?;
    tracing::debug!(books = doc.books.len(), "data file checked");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Library data ready at {}",
        store.path().display()
    )));
    Ok(result)
}
