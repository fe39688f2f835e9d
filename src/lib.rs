#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tauri::{Builder, State};
use serde::Serialize;
use log::{info, error, warn};
use anyhow::Result;
use std::sync::Arc;
use parking_lot::Mutex;
use chrono::Local;
use validator::Validate;

pub mod api;
pub mod records;
pub mod settings;
pub mod table;

use api::FeedbackApiClient;
use records::{FeedbackSubmission, SelectionSet};
use settings::PanelSettings;
use table::{build_action_buttons, build_feedback_table};

pub fn run() -> Result<()> {
    // Environment variables are embedded at build time via build.rs, with
    // runtime env::var() fallbacks for development
    info!("Feedback panel starting with embedded environment configuration...");
    log_configuration_status();

    Builder::default()
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            load_feedback,
            predict_sentiment,
            identify_gender,
            submit_feedback
        ])
        .manage(AppState::new())
        .setup(|_app| {
            info!("Feedback panel application starting up...");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error while running tauri application");

    Ok(())
}

/// Global application state shared by all commands.
pub struct AppState {
    api_client: Arc<Mutex<Option<FeedbackApiClient>>>,
}

impl AppState {
    fn new() -> Self {
        Self {
            api_client: Arc::new(Mutex::new(None)),
        }
    }

    // Build the API client lazily on first use so the app can still start
    // and report a useful error when configuration is missing.
    fn ensure_api_client(&self) -> Result<FeedbackApiClient, String> {
        let mut client_guard = self.api_client.lock();
        if let Some(client) = client_guard.as_ref() {
            return Ok(client.clone());
        }

        info!("Initializing feedback API client...");
        let settings = PanelSettings::load().map_err(|e| e.to_string())?;
        let client = FeedbackApiClient::new(&settings).map_err(|e| e.to_string())?;
        info!("✅ Feedback API client ready for {}", settings.api_base_url);

        *client_guard = Some(client.clone());
        Ok(client)
    }
}

/// Everything the panel page needs for one refresh of the table.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackView {
    pub table_html: String,
    pub buttons_html: String,
    pub refreshed_at: String,
    pub record_count: usize,
}

#[tauri::command]
async fn load_feedback(state: State<'_, AppState>) -> Result<FeedbackView, String> {
    info!("Loading feedback records for the panel page...");

    let client = state.ensure_api_client()?;
    let records = client.fetch_all_contents().await.map_err(|e| {
        error!("Failed to load feedback records: {}", e);
        format!("Failed to load feedback records: {}", e)
    })?;

    info!("Rendering feedback table with {} record(s)", records.len());
    Ok(FeedbackView {
        table_html: build_feedback_table(&records),
        buttons_html: build_action_buttons(),
        refreshed_at: Local::now().format("%H:%M:%S").to_string(),
        record_count: records.len(),
    })
}

#[tauri::command]
async fn predict_sentiment(
    ids: Vec<String>,
    state: State<'_, AppState>,
) -> Result<String, String> {
    let selection: SelectionSet = ids.into_iter().collect();
    info!("Checked checkbox ids are: {}", selection.to_query_value());

    let client = state.ensure_api_client()?;
    client.predict_sentiment(&selection).await.map_err(|e| {
        error!("Sentiment prediction dispatch failed: {}", e);
        format!("Sentiment prediction dispatch failed: {}", e)
    })?;

    Ok(format!(
        "Sentiment prediction requested for {} record(s)",
        selection.len()
    ))
}

#[tauri::command]
async fn identify_gender(
    ids: Vec<String>,
    state: State<'_, AppState>,
) -> Result<String, String> {
    let selection: SelectionSet = ids.into_iter().collect();
    info!("Checked checkbox ids are: {}", selection.to_query_value());

    let client = state.ensure_api_client()?;
    client.identify_gender(&selection).await.map_err(|e| {
        error!("Gender identification dispatch failed: {}", e);
        format!("Gender identification dispatch failed: {}", e)
    })?;

    Ok(format!(
        "Gender identification requested for {} record(s)",
        selection.len()
    ))
}

#[tauri::command]
async fn submit_feedback(
    first_name: String,
    last_name: String,
    feedback: String,
    state: State<'_, AppState>,
) -> Result<String, String> {
    info!("Submitting new feedback from {} {}", first_name, last_name);

    let submission = FeedbackSubmission {
        first_name,
        last_name,
        feedback,
    };

    // 1. Reject bad input before any request is built from it
    submission
        .validate()
        .map_err(|e| format!("Invalid feedback submission: {}", e))?;

    // 2. Dispatch to the backend
    let client = state.ensure_api_client()?;
    client.enter_feedback(&submission).await.map_err(|e| {
        error!("Feedback submission failed: {}", e);
        format!("Feedback submission failed: {}", e)
    })?;

    Ok("Feedback submitted".to_string())
}

// Helper function to log backend configuration status
fn log_configuration_status() {
    info!("🔧 Backend Configuration Status (using embedded + runtime fallback):");

    match PanelSettings::load() {
        Ok(settings) => {
            info!("✅ UNICORN_API_BASE: {}", settings.api_base_url);
            info!(
                "✅ HTTP timeouts: request {}s, connect {}s",
                settings.request_timeout_secs, settings.connect_timeout_secs
            );
        }
        Err(e) => {
            warn!("❌ UNICORN_API_BASE: Not available (neither runtime nor embedded)");
            warn!("❌ The panel will render an empty table until it is set: {}", e);
        }
    }
}
