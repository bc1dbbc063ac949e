const ENV_API_URL: &str = "TRAVELOG_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Base URL of the journal backend, e.g. `http://localhost:5000/api`.
pub fn api_base_url() -> String {
    std::env::var(ENV_API_URL)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
