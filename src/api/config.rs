use serde::Deserialize;

/// Where the admin backend lives. Endpoint paths from the backend contract
/// are joined onto `base_url` verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Build-time override via COURSEFORGE_API_BASE, otherwise the default
    /// local backend.
    pub fn from_env() -> Self {
        match option_env!("COURSEFORGE_API_BASE") {
            Some(base) => Self {
                base_url: base.trim_end_matches('/').to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_contract_paths() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint("/api/getadmins"),
            "http://localhost:8000/api/getadmins"
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
