use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
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

/// Which profile store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Supabase,
    Postgres,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub service_role_key: String,
    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_role_key: String::new(),
            profiles_table: default_profiles_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_profiles_table() -> String { "profiles".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

/// Requester-profile cache. Off by default: a cached requester can be up to
/// `ttl_secs` stale, so edits and deletions are not seen until the entry expires.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Redis L2 tier; L1 only when unset
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            redis_url: None,
            ttl_secs: None,
            l1_cache_size: None,
        }
    }
}

fn default_cache_enabled() -> bool { false }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
        }
    }
}

fn default_max_limit() -> usize { 100 }

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
fn default_log_format() -> String { "compact".to_string() }

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// Unknown names fall back to compact text
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAMPUS__)
    /// 5. SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY and DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAMPUS__SERVER__PORT -> server.port
            .add_source(campus_environment())
            .build()?;

        apply_well_known_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(campus_environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Check that the selected store has what it needs to connect
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.store.backend {
            StoreBackend::Supabase if self.supabase.url.is_empty() => Err(ConfigError::Message(
                "supabase.url (or SUPABASE_URL) is required for the supabase store".to_string(),
            )),
            StoreBackend::Supabase if self.supabase.service_role_key.is_empty() => {
                Err(ConfigError::Message(
                    "supabase.service_role_key (or SUPABASE_SERVICE_ROLE_KEY) is required for the supabase store"
                        .to_string(),
                ))
            }
            StoreBackend::Postgres if self.database.url.is_empty() => Err(ConfigError::Message(
                "database.url (or DATABASE_URL) is required for the postgres store".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

fn campus_environment() -> Environment {
    Environment::with_prefix("CAMPUS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the platform's conventional variables override config values
fn apply_well_known_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("supabase.url", "SUPABASE_URL"),
        ("supabase.service_role_key", "SUPABASE_SERVICE_ROLE_KEY"),
        ("database.url", "DATABASE_URL"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (key, var) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
