use serde::Deserialize;

fn default_base_url() -> String {
    std::env::var("PYTHON_ML_SERVICE_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn default_timeout_s() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub ml_service: MlServiceConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Explicit request timeout — external calls never wait on transport defaults.
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

impl Default for MlServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_s: default_timeout_s(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FallbackConfig {
    /// Fixed seed for the fallback randomness source. Leave unset in
    /// production; set it to make responses reproducible.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
