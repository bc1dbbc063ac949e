//! Editor page logic: form population and the two advisory validations.

use crate::models::{DateCheck, Entry, EntryDraft, EntryForm};
use crate::utils::dates;

pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const DATE_ORDER: &str = "End date must be after start date";

/// Form values for a fetched entry; absent fields become empty strings.
pub fn form_values(entry: &Entry) -> EntryForm {
    EntryForm {
        destination: entry.destination.clone(),
        start_date: entry.start_date.clone(),
        end_date: entry.end_date.clone(),
        description: entry.description.clone().unwrap_or_default(),
        highlights: entry.highlights.clone().unwrap_or_default(),
        photo_links: entry.photo_links.clone().unwrap_or_default(),
    }
}

/// Required-field check, run before any network call. Only the empty
/// string counts as missing.
pub fn missing_required(draft: &EntryDraft) -> bool {
    draft.destination.is_empty() || draft.start_date.is_empty() || draft.end_date.is_empty()
}

/// Advisory date-order validation: invalid only when both fields parse and
/// the end date precedes the start date.
pub fn check_dates(start_date: &str, end_date: &str) -> DateCheck {
    let out_of_order = match (dates::parse_iso(start_date), dates::parse_iso(end_date)) {
        (Some(start), Some(end)) => end < start,
        _ => false,
    };

    if out_of_order {
        DateCheck {
            ok: false,
            message: Some(DATE_ORDER.to_string()),
        }
    } else {
        DateCheck { ok: true, message: None }
    }
}
