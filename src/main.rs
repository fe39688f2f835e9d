// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    // Default to info-level logging unless the caller overrides RUST_LOG
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Print the resolved backend configuration before starting the app
    println!("\n=== Unicorn Feedback Panel ===");
    match unicorn_feedback_lib::settings::PanelSettings::load() {
        Ok(settings) => {
            println!("Feedback API base: {}", settings.api_base_url);
            println!(
                "HTTP timeouts: request {}s, connect {}s",
                settings.request_timeout_secs, settings.connect_timeout_secs
            );
        }
        Err(e) => {
            eprintln!("⚠️  Feedback API not configured: {}", e);
            eprintln!("   Set UNICORN_API_BASE to the backend invoke URL.");
        }
    }

    println!("\n=== Starting Feedback Panel ===");
    if let Err(e) = unicorn_feedback_lib::run() {
        eprintln!("Error running application: {}", e);
        std::process::exit(1);
    }
}
