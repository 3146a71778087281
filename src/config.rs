use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    pub api_url: String,
    pub model: String,
    pub api_token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub inference: InferenceConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let inference = InferenceConfig {
            api_url: std::env::var("HF_API_URL")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co/models".into()),
            model: std::env::var("HF_MODEL")
                .unwrap_or_else(|_| "mistralai/Mistral-7B-Instruct-v0.2".into()),
            api_token: std::env::var("HF_API_TOKEN").ok(),
            timeout_secs: std::env::var("HF_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(120),
        };
        Ok(Self {
            database_url,
            inference,
        })
    }
}
