//! Pure genre mutation helpers.
//!
//! Both functions take the current content value and produce a new value
//! with a rewritten genre sequence; persisting the result is the caller's
//! concern (read-modify-write against the store).

use super::Content;

/// Returns a new content value with `genres` appended to the existing
/// genre sequence.
///
/// Appending does not deduplicate: adding a genre the content already
/// carries yields a repeated entry. Removal is the only way to shrink the
/// sequence.
pub fn with_genres_added(content: &Content, genres: &[String]) -> Content {
    let mut updated = content.genres.clone();
    updated.extend(genres.iter().cloned());
    content.clone().with_genres(updated)
}

/// Returns a new content value whose genre sequence excludes *all*
/// occurrences of any genre in `genres`.
///
/// Matching is exact (case-sensitive). Duplicates of genres that are not
/// being removed survive untouched.
pub fn with_genres_removed(content: &Content, genres: &[String]) -> Content {
    let updated = content
        .genres
        .iter()
        .filter(|g| !genres.contains(*g))
        .cloned()
        .collect();
    content.clone().with_genres(updated)
}
