use std::sync::Mutex;

use crate::api::ApiClient;
use crate::models::Entry;

/// In-memory copy of the full collection, held for the live filter.
/// Replaced on every load, never mutated by filtering.
#[derive(Debug, Default)]
pub struct JournalListState {
    pub all_entries: Vec<Entry>,
}

/// Which record the editor page is bound to; fixed when the page opens and
/// never changed within a page lifetime.
#[derive(Debug, Default)]
pub struct EditorState {
    pub entry_id: Option<i64>,
}

/// Shared application state managed by Tauri. Each page's state is only
/// touched by that page's commands.
pub struct AppState {
    pub api: ApiClient,
    pub journals: Mutex<JournalListState>,
    pub editor: Mutex<EditorState>,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            journals: Mutex::new(JournalListState::default()),
            editor: Mutex::new(EditorState::default()),
        }
    }
}
