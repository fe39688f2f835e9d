use std::env;

fn main() {
    // Load .env file during build so panel configuration can be embedded
    if let Err(e) = dotenvy::dotenv() {
        println!(
            "cargo:warning=BUILD.RS: Failed to load .env file: {}. Using system environment variables.",
            e
        );
    } else {
        println!("cargo:warning=BUILD.RS: Successfully loaded .env file for build");
    }

    // Export environment variables to be available at runtime using cargo:rustc-env
    // These will be embedded in the binary at compile time
    if let Ok(api_base) = env::var("UNICORN_API_BASE") {
        println!("cargo:rustc-env=UNICORN_API_BASE={}", api_base);
        println!("cargo:warning=Embedded UNICORN_API_BASE ({})", api_base);
    } else {
        println!("cargo:warning=UNICORN_API_BASE not found in environment during build");
    }

    if let Ok(timeout) = env::var("UNICORN_HTTP_TIMEOUT_SECS") {
        println!("cargo:rustc-env=UNICORN_HTTP_TIMEOUT_SECS={}", timeout);
    }

    if let Ok(connect_timeout) = env::var("UNICORN_HTTP_CONNECT_TIMEOUT_SECS") {
        println!(
            "cargo:rustc-env=UNICORN_HTTP_CONNECT_TIMEOUT_SECS={}",
            connect_timeout
        );
    }

    tauri_build::build()
}
