//! Free-text filtering.

/// Case-insensitive substring match across a record's searchable fields.
///
/// A record matches when any field contains the query. An empty or
/// whitespace-only query matches everything, so "no search" and "search
/// for nothing" behave the same. Absent fields never match.
pub fn matches_text(query: &str, fields: &[Option<&str>]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| match field {
        Some(value) => value.to_lowercase().contains(&needle),
        None => false,
    })
}
