pub const DEFAULT_RECENT_SEARCHES_LIMIT: usize = 10;

/// Moves `term` to the front of `searches`, dropping any earlier entry equal
/// to it ignoring case, and keeps at most `limit` entries.
///
/// Returns `false` and leaves the list untouched when `term` is blank.
pub fn push_recent_search(searches: &mut Vec<String>, term: &str, limit: usize) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return false;
    }

    let lowered = term.to_lowercase();
    searches.retain(|existing| existing.trim().to_lowercase() != lowered);
    searches.insert(0, term.to_owned());
    searches.truncate(limit);

    true
}
