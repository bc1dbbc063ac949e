use tauri::State;

use crate::models::DashboardView;
use crate::services::{dashboard, render};
use crate::state::AppState;

const LOAD_FAILED: &str = "Failed to load entries. Please try again later.";

#[tauri::command]
pub async fn get_dashboard_overview(state: State<'_, AppState>) -> Result<DashboardView, String> {
    match state.api.list_entries().await {
        Ok(mut entries) => {
            dashboard::sort_newest_first(&mut entries);
            Ok(DashboardView {
                stats: Some(dashboard::stats(&entries)),
                entries_html: dashboard::summary_grid(&entries),
            })
        }
        Err(e) => {
            log::error!("Failed to load entries for the dashboard: {}", e);
            Ok(DashboardView {
                stats: None,
                entries_html: render::error_state(LOAD_FAILED),
            })
        }
    }
}
