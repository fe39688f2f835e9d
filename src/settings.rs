use anyhow::Result;

// Defaults match the HTTP client discipline used for every outbound request:
// a bounded request timeout and a fast connect timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Resolved panel configuration: where the feedback backend lives and how
/// long outbound requests may take.
#[derive(Debug, Clone)]
pub struct PanelSettings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl PanelSettings {
    /// Resolve settings from the environment. The backend base URL is
    /// required; timeouts fall back to defaults when unset or unparseable.
    pub fn load() -> Result<Self> {
        let api_base_url = env_value("UNICORN_API_BASE").ok_or_else(|| {
            anyhow::anyhow!(
                "UNICORN_API_BASE is not set - point it at the feedback API invoke URL"
            )
        })?;

        Ok(Self {
            api_base_url,
            request_timeout_secs: secs_or_default(
                env_value("UNICORN_HTTP_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: secs_or_default(
                env_value("UNICORN_HTTP_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        })
    }
}

fn secs_or_default(value: Option<String>, default: u64) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_value(key: &str) -> Option<String> {
    // Load .env if one exists for development runs
    let _ = dotenvy::dotenv();

    // Compile-time embedded fallback from build.rs (only present if it was
    // set during the build)
    let embedded = match key {
        "UNICORN_API_BASE" => option_env!("UNICORN_API_BASE"),
        "UNICORN_HTTP_TIMEOUT_SECS" => option_env!("UNICORN_HTTP_TIMEOUT_SECS"),
        "UNICORN_HTTP_CONNECT_TIMEOUT_SECS" => option_env!("UNICORN_HTTP_CONNECT_TIMEOUT_SECS"),
        _ => None,
    };

    first_non_empty(std::env::var(key).ok(), embedded)
}

// Runtime environment wins over the build-time embed; blank values count as
// unset either way.
fn first_non_empty(runtime: Option<String>, embedded: Option<&str>) -> Option<String> {
    runtime.filter(|value| !value.is_empty()).or_else(|| {
        embedded
            .map(|value| value.to_string())
            .filter(|value| !value.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secs_fall_back_to_default() {
        assert_eq!(secs_or_default(None, 15), 15);
        assert_eq!(secs_or_default(Some("not-a-number".to_string()), 15), 15);
        assert_eq!(secs_or_default(Some("".to_string()), 5), 5);
    }

    #[test]
    fn test_secs_parse_when_valid() {
        assert_eq!(secs_or_default(Some("30".to_string()), 15), 30);
    }

    #[test]
    fn test_runtime_value_wins_over_embedded() {
        assert_eq!(
            first_non_empty(Some("runtime".to_string()), Some("embedded")),
            Some("runtime".to_string())
        );
    }

    #[test]
    fn test_embedded_fallback_when_runtime_missing_or_blank() {
        assert_eq!(
            first_non_empty(None, Some("embedded")),
            Some("embedded".to_string())
        );
        assert_eq!(
            first_non_empty(Some("".to_string()), Some("embedded")),
            Some("embedded".to_string())
        );
    }

    #[test]
    fn test_no_value_from_either_source() {
        assert_eq!(first_non_empty(None, None), None);
        assert_eq!(first_non_empty(Some("".to_string()), Some("")), None);
        assert_eq!(first_non_empty(None, Some("")), None);
    }
}
