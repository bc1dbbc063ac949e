// Prevents additional console window on Windows (silent launch).
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod api;
mod commands;
mod models;
mod services;
mod state;
mod utils;

fn main() {
    utils::config::load_dotenv();
    env_logger::init();

    let api = api::ApiClient::new(utils::config::api_base_url());

    tauri::Builder::default()
        .manage(state::AppState::new(api))
        .invoke_handler(tauri::generate_handler![
            // Home page
            commands::dashboard::get_dashboard_overview,
            // Journals page
            commands::journals::get_journals,
            commands::journals::filter_journals,
            commands::journals::delete_journal,
            // Editor page
            commands::editor::open_editor,
            commands::editor::check_trip_dates,
            commands::editor::save_entry,
            commands::editor::delete_editor_entry,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
