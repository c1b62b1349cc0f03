//! Case-insensitive text search over list rows.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// True when `query` is blank or any field contains it, ignoring case.
pub fn matches<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}
