use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind_addr: String,
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            completion: CompletionConfig {
                base_url: "http://localhost:11434".to_string(),
                model: "llama3".to_string(),
                request_timeout_secs: 60,
            },
        }
    }
}

impl AppConfig {
    /// Defaults with environment overrides, for container deploys.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("OLLAMA_BASE_URL") {
            config.completion.base_url = url;
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            config.completion.model = model;
        }
        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.completion.request_timeout_secs = secs;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_ollama() {
        let config = AppConfig::default();
        assert_eq!(config.completion.base_url, "http://localhost:11434");
        assert_eq!(config.completion.model, "llama3");
    }
}
