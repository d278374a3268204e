//! Demo catalog data for local development.

use chrono::{DateTime, Duration, Utc};

use playbill_core::catalog::Content;

/// Generates a small demo catalog.
///
/// Scheduling windows are laid out relative to `now` so the catalog
/// always looks current.
pub fn sample_contents(now: DateTime<Utc>) -> Vec<Content> {
    let genres = |list: &[&str]| list.iter().map(|g| g.to_string()).collect::<Vec<_>>();

    vec![
        Content::new(
            "Midnight Signal",
            "A city that never sleeps, a frequency that never dies",
            "A late-night radio host picks up a transmission that predicts the next day's news.",
            "https://images.example.com/midnight-signal.jpg",
            104,
            now - Duration::hours(2),
            now + Duration::hours(22),
            genres(&["Thriller", "Mystery"]),
        ),
        Content::new(
            "The Last Harvest",
            "One field. One family. One season left.",
            "A documentary following three generations of farmers through their final year on the land.",
            "https://images.example.com/last-harvest.jpg",
            89,
            now - Duration::days(1),
            now + Duration::days(6),
            genres(&["Documentary"]),
        ),
        Content::new(
            "Paper Lanterns",
            "Some lights guide you home",
            "An animated tale of a girl who follows a trail of floating lanterns across a drowned city.",
            "https://images.example.com/paper-lanterns.jpg",
            96,
            now,
            now + Duration::days(30),
            genres(&["Animation", "Family", "Adventure"]),
        ),
        Content::new(
            "Static Hearts",
            "Love in the time of dial-up",
            "Two strangers keep meeting in a 1998 chatroom that should have been shut down years ago.",
            "https://images.example.com/static-hearts.jpg",
            112,
            now + Duration::hours(6),
            now + Duration::days(14),
            genres(&["Romance", "Comedy"]),
        ),
        Content::new(
            "Ironclad",
            "The siege begins at dawn",
            "A historical epic about the engineers who held a fortress for forty days.",
            "https://images.example.com/ironclad.jpg",
            143,
            now + Duration::days(2),
            now + Duration::days(16),
            genres(&["Action", "History", "Drama"]),
        ),
    ]
}
