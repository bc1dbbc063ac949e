//! Journals page logic: the live filter and the full journal items.

use crate::models::{Entry, JournalListView};
use crate::services::render;

/// Case-insensitive substring filter across destination, description and
/// highlights; a match in any field includes the entry. Input order is
/// preserved and the source list is never mutated.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.destination.to_lowercase().contains(&needle)
                || field_contains(entry.description.as_deref(), &needle)
                || field_contains(entry.highlights.as_deref(), &needle)
        })
        .collect()
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// Render the list, or signal the "no journals" placeholder when there is
/// nothing to show.
pub fn list_view(entries: &[&Entry]) -> JournalListView {
    if entries.is_empty() {
        return JournalListView {
            total: 0,
            empty: true,
            list_html: String::new(),
        };
    }

    JournalListView {
        total: entries.len(),
        empty: false,
        list_html: entries.iter().map(|entry| journal_item(entry)).collect(),
    }
}

/// View carrying the error panel instead of items, for fetch failures.
pub fn error_view(message: &str) -> JournalListView {
    JournalListView {
        total: 0,
        empty: false,
        list_html: render::error_state(message),
    }
}

fn journal_item(entry: &Entry) -> String {
    let mut item = format!(
        concat!(
            "<div class=\"journal-item\" data-entry-id=\"{id}\">",
            "<div class=\"journal-header\"><div>",
            "<h3 class=\"journal-title\">{title}</h3>",
            "<div class=\"journal-dates\">{dates}</div>",
            "</div>",
            "<div class=\"journal-actions\">",
            "<button class=\"btn btn-small btn-primary\" data-action=\"edit\" data-entry-id=\"{id}\">Edit</button>",
            "<button class=\"btn btn-small btn-danger\" data-action=\"delete\" data-entry-id=\"{id}\">Delete</button>",
            "</div></div>"
        ),
        id = entry.id,
        title = render::text(&entry.destination),
        dates = render::date_range_long(&entry.start_date, &entry.end_date),
    );

    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        item.push_str(&format!(
            "<div class=\"journal-content\">{}</div>",
            render::text(description)
        ));
    }

    let highlights = render::lines(entry.highlights.as_deref());
    if !highlights.is_empty() {
        item.push_str("<div class=\"journal-highlights\"><h5>Highlights</h5><ul class=\"highlights-list\">");
        for line in &highlights {
            item.push_str(&format!("<li>{}</li>", render::text(line)));
        }
        item.push_str("</ul></div>");
    }

    let photos = render::lines(entry.photo_links.as_deref());
    if !photos.is_empty() {
        item.push_str("<div class=\"journal-photos\">");
        for link in &photos {
            item.push_str(&format!(
                "<img src=\"{}\" alt=\"Photo\" class=\"journal-photo\">",
                render::attr(link)
            ));
        }
        item.push_str("</div>");
    }

    item.push_str("</div>");
    item
}
