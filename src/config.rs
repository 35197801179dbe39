use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub data_dir: String,
    pub log_dir: String,

    // AI audit service
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            data_dir: env::var("WFM_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            log_dir: env::var("WFM_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),

            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
            gemini_endpoint: env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
        }
    }
}
