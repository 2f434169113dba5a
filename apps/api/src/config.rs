use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub transcribe_url: String,
    pub jobs_csv_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            transcribe_url: require_env("TRANSCRIBE_URL")?,
            jobs_csv_path: std::env::var("JOBS_CSV_PATH")
                .unwrap_or_else(|_| "jobs.csv".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that touches process env, so it covers both the missing
    // and present cases in one body instead of racing a parallel test.
    #[test]
    fn test_from_env_requires_transcribe_url() {
        std::env::set_var("GEMINI_API_KEY", "test-key");
        std::env::remove_var("TRANSCRIBE_URL");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TRANSCRIBE_URL"));

        std::env::set_var("TRANSCRIBE_URL", "http://127.0.0.1:9000/transcribe");
        let config = Config::from_env().unwrap();
        assert_eq!(config.transcribe_url, "http://127.0.0.1:9000/transcribe");

        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("TRANSCRIBE_URL");
    }
}

