use tauri::State;

use crate::models::{DateCheck, EditorOutcome, EditorView, EntryDraft, Redirect, StatusMessage};
use crate::services::editor;
use crate::state::AppState;

const LOAD_FAILED: &str = "Failed to load entry. Please try again.";
const SAVE_FAILED: &str = "Failed to save entry. Please try again.";
const DELETE_FAILED: &str = "Failed to delete entry. Please try again.";
const CREATED: &str = "Entry created successfully!";
const UPDATED: &str = "Entry updated successfully!";
const DELETED: &str = "Entry deleted successfully!";

const JOURNALS_PAGE: &str = "/journals";
const REDIRECT_DELAY_MS: u64 = 1500;

fn journals_redirect() -> Redirect {
    Redirect {
        to: JOURNALS_PAGE.to_string(),
        after_ms: REDIRECT_DELAY_MS,
    }
}

/// Bind the editor page to a record (edit mode) or to a fresh draft
/// (create mode). The mode is fixed for the lifetime of the page.
#[tauri::command]
pub async fn open_editor(
    state: State<'_, AppState>,
    entry_id: Option<i64>,
) -> Result<EditorView, String> {
    {
        let mut editor_state = state.editor.lock().map_err(|e| e.to_string())?;
        editor_state.entry_id = entry_id;
    }

    let Some(id) = entry_id else {
        return Ok(EditorView {
            edit_mode: false,
            form: None,
            message: None,
        });
    };

    match state.api.get_entry(id).await {
        Ok(entry) => Ok(EditorView {
            edit_mode: true,
            form: Some(editor::form_values(&entry)),
            message: None,
        }),
        Err(e) => {
            log::error!("Failed to load entry {}: {}", id, e);
            Ok(EditorView {
                edit_mode: true,
                form: None,
                message: Some(StatusMessage::error(LOAD_FAILED)),
            })
        }
    }
}

#[tauri::command]
pub fn check_trip_dates(start_date: String, end_date: String) -> DateCheck {
    editor::check_dates(&start_date, &end_date)
}

#[tauri::command]
pub async fn save_entry(
    state: State<'_, AppState>,
    draft: EntryDraft,
) -> Result<EditorOutcome, String> {
    if editor::missing_required(&draft) {
        return Ok(EditorOutcome {
            message: StatusMessage::error(editor::MISSING_FIELDS),
            redirect: None,
        });
    }

    let entry_id = state.editor.lock().map_err(|e| e.to_string())?.entry_id;

    let result = match entry_id {
        Some(id) => state.api.update_entry(id, &draft).await,
        None => state.api.create_entry(&draft).await,
    };

    match result {
        Ok(()) => Ok(EditorOutcome {
            message: StatusMessage::success(if entry_id.is_some() { UPDATED } else { CREATED }),
            redirect: Some(journals_redirect()),
        }),
        Err(e) => {
            log::error!("Failed to save entry: {}", e);
            let text = e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| SAVE_FAILED.to_string());
            Ok(EditorOutcome {
                message: StatusMessage::error(text),
                redirect: None,
            })
        }
    }
}

/// Edit mode only, and only after the adapter's confirmation prompt.
#[tauri::command]
pub async fn delete_editor_entry(state: State<'_, AppState>) -> Result<EditorOutcome, String> {
    let entry_id = state.editor.lock().map_err(|e| e.to_string())?.entry_id;
    let id = entry_id.ok_or("no entry loaded in the editor")?;

    match state.api.delete_entry(id).await {
        Ok(()) => Ok(EditorOutcome {
            message: StatusMessage::success(DELETED),
            redirect: Some(journals_redirect()),
        }),
        Err(e) => {
            log::error!("Failed to delete entry {}: {}", id, e);
            Ok(EditorOutcome {
                message: StatusMessage::error(DELETE_FAILED),
                redirect: None,
            })
        }
    }
}
