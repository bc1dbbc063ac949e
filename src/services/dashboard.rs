//! Home page logic: trip statistics and the summary card grid.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::models::{Entry, TripStats};
use crate::services::render;
use crate::utils::dates;

const SUMMARY_LIMIT: usize = 6;
const CARD_DESCRIPTION_CHARS: usize = 100;
const CARD_HIGHLIGHT_LIMIT: usize = 3;
const NO_TRIPS_PLACEHOLDER: &str = "No trips yet";

/// Order entries newest trip first by start date. Backend order is treated
/// as opaque; entries with unparseable dates keep their relative order at
/// the end.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| Reverse(dates::parse_iso(&entry.start_date)));
}

/// Statistics for the three fixed dashboard slots. Expects entries already
/// sorted newest-first so the first entry is the latest trip.
pub fn stats(entries: &[Entry]) -> TripStats {
    let unique: HashSet<&str> = entries.iter().map(|e| e.destination.as_str()).collect();
    TripStats {
        total_entries: entries.len(),
        unique_destinations: unique.len(),
        latest_trip: entries
            .first()
            .map(|entry| entry.destination.clone())
            .unwrap_or_else(|| NO_TRIPS_PLACEHOLDER.to_string()),
    }
}

/// The summary grid: up to the first six entries as cards, or the
/// empty-state prompt linking to the editor.
pub fn summary_grid(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return concat!(
            "<div class=\"empty-state\">",
            "<h3>No Entries Yet</h3>",
            "<p>Start documenting your travels!</p>",
            "<a href=\"/editor\" class=\"btn btn-primary\">Create Your First Entry</a>",
            "</div>"
        )
        .to_string();
    }

    entries.iter().take(SUMMARY_LIMIT).map(entry_card).collect()
}

fn entry_card(entry: &Entry) -> String {
    let mut card = format!(
        "<div class=\"entry-card\" data-entry-id=\"{}\"><h4>{}</h4><div class=\"entry-date\">{}</div>",
        entry.id,
        render::text(&entry.destination),
        render::date_range_short(&entry.start_date, &entry.end_date),
    );

    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        card.push_str(&format!(
            "<p>{}</p>",
            render::text(&render::truncate(description, CARD_DESCRIPTION_CHARS))
        ));
    }

    let highlights = render::lines(entry.highlights.as_deref());
    if !highlights.is_empty() {
        card.push_str("<div class=\"entry-highlights\"><ul>");
        for line in highlights.iter().take(CARD_HIGHLIGHT_LIMIT) {
            card.push_str(&format!("<li>{}</li>", render::text(line)));
        }
        card.push_str("</ul></div>");
    }

    if let Some(first_photo) = render::lines(entry.photo_links.as_deref()).first() {
        card.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"entry-photo\">",
            render::attr(first_photo),
            render::attr(&entry.destination),
        ));
    }

    card.push_str("</div>");
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, destination: &str, start: &str, end: &str) -> Entry {
        Entry {
            id,
            destination: destination.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            description: None,
            highlights: None,
            photo_links: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn stats_counts_distinct_destinations() {
        let entries = vec![
            entry(1, "Paris", "2024-06-01", "2024-06-10"),
            entry(2, "Rome", "2024-05-01", "2024-05-05"),
            entry(3, "Paris", "2024-04-01", "2024-04-03"),
        ];
        let stats = stats(&entries);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.unique_destinations, 2);
        assert!(stats.unique_destinations <= stats.total_entries);
        assert_eq!(stats.latest_trip, "Paris");
    }

    #[test]
    fn stats_on_empty_collection_uses_the_placeholder() {
        let stats = stats(&[]);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.unique_destinations, 0);
        assert_eq!(stats.latest_trip, "No trips yet");
    }

    #[test]
    fn sort_puts_the_newest_trip_first_and_bad_dates_last() {
        let mut entries = vec![
            entry(1, "Rome", "2024-05-01", "2024-05-05"),
            entry(2, "Oslo", "not-a-date", "2024-01-02"),
            entry(3, "Paris", "2024-06-01", "2024-06-10"),
            entry(4, "Lima", "garbage", "2024-01-02"),
        ];
        sort_newest_first(&mut entries);
        let order: Vec<&str> = entries.iter().map(|e| e.destination.as_str()).collect();
        assert_eq!(order, vec!["Paris", "Rome", "Oslo", "Lima"]);
    }

    #[test]
    fn grid_renders_at_most_six_cards() {
        let entries: Vec<Entry> = (1..=8)
            .map(|i| entry(i, &format!("Stop {}", i), "2024-06-01", "2024-06-02"))
            .collect();
        let html = summary_grid(&entries);
        assert_eq!(html.matches("entry-card").count(), 6);
        assert!(html.contains("data-entry-id=\"1\""));
        assert!(!html.contains("Stop 7"));
    }

    #[test]
    fn grid_on_empty_collection_prompts_entry_creation() {
        let html = summary_grid(&[]);
        assert!(html.contains("No Entries Yet"));
        assert!(html.contains("href=\"/editor\""));
    }

    #[test]
    fn card_truncates_long_descriptions() {
        let mut e = entry(1, "Paris", "2024-06-01", "2024-06-10");
        e.description = Some("x".repeat(150));
        let html = summary_grid(&[e]);
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(!html.contains(&"x".repeat(101)));
    }

    #[test]
    fn card_keeps_short_descriptions_without_ellipsis() {
        let mut e = entry(1, "Paris", "2024-06-01", "2024-06-10");
        e.description = Some("Short trip".to_string());
        let html = summary_grid(&[e]);
        assert!(html.contains("<p>Short trip</p>"));
        assert!(!html.contains("Short trip..."));
    }

    #[test]
    fn card_caps_highlights_at_three_and_uses_the_first_photo() {
        let mut e = entry(1, "Paris", "2024-06-01", "2024-06-10");
        e.highlights = Some("one\ntwo\nthree\nfour".to_string());
        e.photo_links = Some("\n  \nhttp://a/1.jpg\nhttp://a/2.jpg".to_string());
        let html = summary_grid(&[e]);
        assert!(html.contains("<li>three</li>"));
        assert!(!html.contains("<li>four</li>"));
        assert!(html.contains("src=\"http://a/1.jpg\""));
        assert!(!html.contains("2.jpg"));
    }

    #[test]
    fn card_escapes_user_content() {
        let mut e = entry(1, "<script>alert(1)</script>", "2024-06-01", "2024-06-10");
        e.description = Some("<b>bold</b>".to_string());
        let html = summary_grid(&[e]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn card_shows_the_formatted_date_range() {
        let e = entry(1, "Paris", "2024-06-01", "2024-06-10");
        let html = summary_grid(&[e]);
        assert!(html.contains("Jun 1, 2024 - Jun 10, 2024"));
    }
}
