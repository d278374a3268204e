//! Pure pagination and filtering over the full content collection.

use super::Content;

/// Slices a page out of the full collection in store-iteration order.
///
/// `page` is 1-based; a page of 0 is treated as page 1 rather than
/// underflowing the skip computation. An out-of-range page yields an empty
/// slice, which callers cannot distinguish from an empty collection.
pub fn paginate(contents: Vec<Content>, page: u64, page_size: u64) -> Vec<Content> {
    let skip = page.saturating_sub(1).saturating_mul(page_size);
    contents
        .into_iter()
        .skip(skip as usize)
        .take(page_size as usize)
        .collect()
}

/// Retains contents matching the given title and genre filters.
///
/// Both filters are case-insensitive substring matches and are conjunctive
/// when both are given. A `None` or blank filter is a pass-through. The
/// genre filter matches when *any* genre in the sequence contains the
/// query.
pub fn filter_contents(
    contents: Vec<Content>,
    title: Option<&str>,
    genre: Option<&str>,
) -> Vec<Content> {
    let title = normalize_filter(title);
    let genre = normalize_filter(genre);

    contents
        .into_iter()
        .filter(|c| {
            title
                .as_deref()
                .is_none_or(|t| c.title.to_lowercase().contains(t))
        })
        .filter(|c| {
            genre
                .as_deref()
                .is_none_or(|q| c.genres.iter().any(|g| g.to_lowercase().contains(q)))
        })
        .collect()
}

/// Lowercases a filter and discards blank input.
fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn content(title: &str, genres: &[&str]) -> Content {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap();
        Content::new(
            title,
            "",
            "",
            "",
            120,
            start,
            end,
            genres.iter().map(|g| g.to_string()).collect(),
        )
    }

    fn collection(n: usize) -> Vec<Content> {
        (0..n).map(|i| content(&format!("Item {i}"), &[])).collect()
    }

    #[test]
    fn test_paginate_middle_page() {
        let page = paginate(collection(7), 2, 3);
        let titles: Vec<&str> = page.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Item 3", "Item 4", "Item 5"]);
    }

    #[test]
    fn test_paginate_final_partial_page() {
        let page = paginate(collection(7), 3, 3);
        let titles: Vec<&str> = page.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Item 6"]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        assert!(paginate(collection(7), 4, 3).is_empty());
    }

    #[test]
    fn test_paginate_page_zero_saturates_to_first_page() {
        let page = paginate(collection(5), 0, 2);
        let titles: Vec<&str> = page.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Item 0", "Item 1"]);
    }

    #[test]
    fn test_paginate_empty_collection() {
        assert!(paginate(Vec::new(), 1, 10).is_empty());
    }

    #[test]
    fn test_filter_title_is_case_insensitive_substring() {
        let contents = vec![content("Foo", &["Action"]), content("Bar", &["Comedy"])];
        let filtered = filter_contents(contents, Some("foo"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Foo");
    }

    #[test]
    fn test_filter_genre_matches_any_entry() {
        let contents = vec![
            content("Foo", &["Action"]),
            content("Bar", &["Action", "Comedy"]),
        ];
        let filtered = filter_contents(contents, None, Some("comedy"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Bar");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let contents = vec![
            content("Foo", &["Action"]),
            content("Bar", &["Action", "Comedy"]),
            content("Foobar", &["Comedy"]),
        ];
        let filtered = filter_contents(contents, Some("foo"), Some("comedy"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Foobar");
    }

    #[test]
    fn test_blank_filters_pass_everything_through() {
        let contents = vec![content("Foo", &["Action"]), content("Bar", &["Comedy"])];
        let filtered = filter_contents(contents, Some("   "), Some(""));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let contents = vec![content("Foo", &["Action"])];
        assert!(filter_contents(contents, Some("zzz"), None).is_empty());
    }
}
