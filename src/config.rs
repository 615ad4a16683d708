use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    pub translate_config: TranslateConfig,
    #[serde(default)]
    pub storage_config: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Connection settings for the translation provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_source_language")]
    pub source_language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Filesystem,
    Http,
    S3,
    Memory,
}

/// Where request/result records are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    #[serde(default = "default_input_collection")]
    pub input_collection: String,
    #[serde(default = "default_output_collection")]
    pub output_collection: String,
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub secret_access_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_source_language() -> String {
    "auto".to_string()
}

fn default_backend() -> StorageBackend {
    StorageBackend::Filesystem
}

fn default_input_collection() -> String {
    "request-bucket-capstone".to_string()
}

fn default_output_collection() -> String {
    "response-bucket-capstone".to_string()
}

fn default_root_dir() -> String {
    "records".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = fs::read_to_string(path)?;
        let content = substitute_env_vars(&content);
        Self::parse(path, &content)
    }

    /// Parse config text, choosing JSON or YAML by file extension
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            serde_json::from_str(content)?
        } else {
            serde_yaml::from_str(content)?
        };
        Ok(config.drop_unset_secrets())
    }

    fn drop_unset_secrets(mut self) -> Self {
        self.translate_config.api_key = resolved_secret(self.translate_config.api_key);
        self.storage_config.auth_token = resolved_secret(self.storage_config.auth_token);
        self.storage_config.access_key_id = resolved_secret(self.storage_config.access_key_id);
        self.storage_config.secret_access_key = resolved_secret(self.storage_config.secret_access_key);
        self
    }
}

/// Empty values and placeholders left unsubstituted count as unset
fn resolved_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && !v.contains("${"))
}

/// Replace `${VAR_NAME}` with the environment value, leaving unknown variables untouched
pub fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static regex");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            input_collection: default_input_collection(),
            output_collection: default_output_collection(),
            root_dir: default_root_dir(),
            endpoint: None,
            auth_token: None,
            region: None,
            access_key_id: None,
            secret_access_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_applies_defaults() {
        let yaml = r#"
translate_config:
  base_url: "http://localhost:5000"
"#;
        let config = Config::parse("conf.yaml", yaml).unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.translate_config.source_language, "auto");
        assert_eq!(config.translate_config.timeout_secs, 30);
        assert_eq!(config.storage_config.backend, StorageBackend::Filesystem);
        assert_eq!(config.storage_config.input_collection, "request-bucket-capstone");
        assert_eq!(config.storage_config.output_collection, "response-bucket-capstone");
    }

    #[test]
    fn test_parse_json_by_extension() {
        let json = r#"{
            "system_config": { "host": "127.0.0.1", "port": 9000 },
            "translate_config": { "base_url": "http://t", "api_key": "k" },
            "storage_config": { "backend": "http", "endpoint": "http://s3" }
        }"#;
        let config = Config::parse("conf.json", json).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.translate_config.api_key.as_deref(), Some("k"));
        assert_eq!(config.storage_config.backend, StorageBackend::Http);
        assert_eq!(config.storage_config.endpoint.as_deref(), Some("http://s3"));
    }

    #[test]
    fn test_missing_translate_config_is_error() {
        assert!(Config::parse("conf.yaml", "system_config:\n  port: 1\n").is_err());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("TRANSLATE_RELAY_TEST_KEY", "secret");
        let out = substitute_env_vars("api_key: ${TRANSLATE_RELAY_TEST_KEY}\nother: ${TRANSLATE_RELAY_UNSET_VAR}");
        assert_eq!(out, "api_key: secret\nother: ${TRANSLATE_RELAY_UNSET_VAR}");
    }

    #[test]
    fn test_unresolved_or_empty_secrets_are_unset() {
        let yaml = r#"
translate_config:
  base_url: "http://localhost:5000"
  api_key: "${TRANSLATE_RELAY_UNSET_SECRET}"
storage_config:
  backend: "s3"
  region: "eu-west-1"
  auth_token: ""
  access_key_id: "AKIA123"
  secret_access_key: "${TRANSLATE_RELAY_UNSET_SECRET}"
"#;
        let config = Config::parse("conf.yaml", &substitute_env_vars(yaml)).unwrap();
        assert_eq!(config.translate_config.api_key, None);
        assert_eq!(config.storage_config.auth_token, None);
        assert_eq!(config.storage_config.secret_access_key, None);
        assert_eq!(config.storage_config.access_key_id.as_deref(), Some("AKIA123"));
        assert_eq!(config.storage_config.backend, StorageBackend::S3);
        assert_eq!(config.storage_config.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
