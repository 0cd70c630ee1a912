/// Draw ids from `generate` until one is not `taken`.
pub fn unique_id<T, G>(taken: T, mut generate: G) -> String
where
    T: Fn(&str) -> bool,
    G: FnMut() -> String,
{
    loop {
        let id = generate();
        if !taken(&id) {
            return id;
        }
        tracing::debug!(id = %id, "generated id already in use, retrying");
    }
}

pub fn clean(input: &str) -> String {
    input.trim().to_string()
}

#[cfg(test)]
pub(crate) fn scripted_ids(ids: &[&str]) -> impl FnMut() -> String {
    let mut ids: Vec<String> = ids.iter().rev().map(|s| s.to_string()).collect();
    move || ids.pop().expect("scripted id source exhausted")
}
