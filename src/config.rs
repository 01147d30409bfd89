use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::services::agent::{AgentIds, DEFAULT_STORE_MATCH_AGENT_ID, DEFAULT_STYLE_PROFILE_AGENT_ID};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub agent: AgentSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSettings {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_style_profile_agent_id")]
    pub style_profile_agent_id: String,
    #[serde(default = "default_store_match_agent_id")]
    pub store_match_agent_id: String,
    #[serde(default = "default_agent_timeout")]
    pub timeout_secs: u64,
}

impl AgentSettings {
    pub fn agent_ids(&self) -> AgentIds {
        AgentIds {
            style_profile: self.style_profile_agent_id.clone(),
            store_match: self.store_match_agent_id.clone(),
        }
    }
}

fn default_style_profile_agent_id() -> String { DEFAULT_STYLE_PROFILE_AGENT_ID.to_string() }
fn default_store_match_agent_id() -> String { DEFAULT_STORE_MATCH_AGENT_ID.to_string() }
fn default_agent_timeout() -> u64 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    /// Mode new sessions start in when the client does not say
    #[serde(default)]
    pub sample_data: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl(),
            max_sessions: default_max_sessions(),
            sample_data: false,
        }
    }
}

fn default_session_ttl() -> u64 { 3600 }
fn default_max_sessions() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STYLEMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STYLEMATCH__SERVER__PORT -> server.port
            .add_source(env_source());

        with_api_key_override(builder)?.build()?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source());

        with_api_key_override(builder)?.build()?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("STYLEMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// `AGENT_API_KEY` wins over any configured key
fn with_api_key_override(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    match std::env::var("AGENT_API_KEY") {
        Ok(key) if !key.is_empty() => builder.set_override("agent.api_key", key),
        _ => Ok(builder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_sections() {
        let server = ServerSettings::default();
        assert_eq!(server.port, 8080);

        let session = SessionSettings::default();
        assert_eq!(session.ttl_secs, 3600);
        assert_eq!(session.max_sessions, 10_000);
        assert!(!session.sample_data);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("stylematch-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[agent]\nendpoint = \"http://agents.local\"\nstore_match_agent_id = \"custom-match\"\n\n[session]\nsample_data = true"
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.agent.endpoint, "http://agents.local");
        assert_eq!(settings.agent.timeout_secs, 60);
        let ids = settings.agent.agent_ids();
        assert_eq!(ids.style_profile, "69996315730bbd74d53e8ac3");
        assert_eq!(ids.store_match, "custom-match");
        assert!(settings.session.sample_data);
        assert_eq!(settings.server.port, 8080);
    }
}
