use serde::{Deserialize, Serialize};

/// Payload for the journals page list container.
///
/// `empty` tells the adapter to hide the list and show the "no journals"
/// placeholder instead; otherwise `list_html` carries the rendered items
/// (or the error state when the fetch failed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalListView {
    pub total: usize,
    pub empty: bool,
    pub list_html: String,
}

/// Outcome of a delete request from the journals page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResult {
    /// Alert text when the DELETE failed; the list is left untouched.
    pub error: Option<String>,
    /// Refreshed list after a successful delete.
    pub list: Option<JournalListView>,
}
