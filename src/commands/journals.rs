use tauri::State;

use crate::models::{DeleteResult, JournalListView};
use crate::services::journals;
use crate::state::AppState;

const LOAD_FAILED: &str = "Failed to load journals. Please try again later.";
const DELETE_FAILED: &str = "Failed to delete entry. Please try again.";

#[tauri::command]
pub async fn get_journals(state: State<'_, AppState>) -> Result<JournalListView, String> {
    load_journals(&state).await
}

/// Re-render the retained collection through the live filter. Pure view
/// recomputation: no fetch, no state change.
#[tauri::command]
pub async fn filter_journals(
    state: State<'_, AppState>,
    query: String,
) -> Result<JournalListView, String> {
    let list_state = state.journals.lock().map_err(|e| e.to_string())?;
    let matches = journals::filter_entries(&list_state.all_entries, &query);
    Ok(journals::list_view(&matches))
}

/// Invoked only after the adapter's confirmation prompt. On success the
/// list is re-fetched in full; any filter the user had typed is dropped.
#[tauri::command]
pub async fn delete_journal(state: State<'_, AppState>, id: i64) -> Result<DeleteResult, String> {
    if let Err(e) = state.api.delete_entry(id).await {
        log::error!("Failed to delete entry {}: {}", id, e);
        return Ok(DeleteResult {
            error: Some(DELETE_FAILED.to_string()),
            list: None,
        });
    }

    let list = load_journals(&state).await?;
    Ok(DeleteResult {
        error: None,
        list: Some(list),
    })
}

async fn load_journals(state: &AppState) -> Result<JournalListView, String> {
    match state.api.list_entries().await {
        Ok(entries) => {
            let view = journals::list_view(&entries.iter().collect::<Vec<_>>());
            let mut list_state = state.journals.lock().map_err(|e| e.to_string())?;
            list_state.all_entries = entries;
            Ok(view)
        }
        Err(e) => {
            log::error!("Failed to load journals: {}", e);
            Ok(journals::error_view(LOAD_FAILED))
        }
    }
}
