use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripStats {
    pub total_entries: usize,
    pub unique_destinations: usize,
    pub latest_trip: String,
}

/// Payload for the home page: statistics for the three fixed slots plus the
/// rendered summary grid (cards, empty state, or error state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// `None` when the fetch failed; the adapter leaves the slots untouched.
    pub stats: Option<TripStats>,
    pub entries_html: String,
}
