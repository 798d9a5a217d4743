//! Layered configuration for the shipyard.
//!
//! Sources are consulted in the order they were added; the first one that
//! knows a key wins and the value is cached. Environment variables and JSON
//! documents are supported out of the box.

use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, PatternResult};

/// Environment prefix read by [`ConfigProvider::from_env`].
pub const ENV_PREFIX: &str = "SHIPYARD";

/// A configuration value that can be various types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<ConfigValue>),
    Object(HashMap<String, ConfigValue>),
}

impl ConfigValue {
    pub fn as_string(&self) -> PatternResult<&str> {
        match self {
            ConfigValue::String(s) => Ok(s),
            _ => Err(PatternError::InvalidArgument("config value is not a string")),
        }
    }

    pub fn as_i64(&self) -> PatternResult<i64> {
        match self {
            ConfigValue::Integer(i) => Ok(*i),
            _ => Err(PatternError::InvalidArgument("config value is not an integer")),
        }
    }

    pub fn as_bool(&self) -> PatternResult<bool> {
        match self {
            ConfigValue::Boolean(b) => Ok(*b),
            _ => Err(PatternError::InvalidArgument("config value is not a boolean")),
        }
    }

    fn parse_env(raw: String) -> Self {
        if let Ok(int_val) = raw.parse::<i64>() {
            ConfigValue::Integer(int_val)
        } else if let Ok(float_val) = raw.parse::<f64>() {
            ConfigValue::Float(float_val)
        } else if let Ok(bool_val) = raw.parse::<bool>() {
            ConfigValue::Boolean(bool_val)
        } else {
            ConfigValue::String(raw)
        }
    }
}

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<ConfigValue>;

    fn keys(&self) -> Vec<String>;
}

/// Environment variable configuration source.
///
/// Keys are upper-cased and joined to the prefix with `_`:
/// `log_prefix` under prefix `SHIPYARD` reads `SHIPYARD_LOG_PREFIX`.
#[derive(Debug, Default)]
pub struct EnvironmentConfigSource {
    prefix: Option<String>,
}

impl EnvironmentConfigSource {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: Some(prefix.into()) }
    }

    fn env_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix.to_uppercase(), key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }
}

impl ConfigSource for EnvironmentConfigSource {
    fn get(&self, key: &str) -> Option<ConfigValue> {
        env::var(self.env_key(key)).ok().map(ConfigValue::parse_env)
    }

    fn keys(&self) -> Vec<String> {
        env::vars()
            .filter_map(|(key, _)| match &self.prefix {
                Some(prefix) => {
                    let head = format!("{}_", prefix.to_uppercase());
                    key.strip_prefix(&head).map(str::to_lowercase)
                }
                None => Some(key.to_lowercase()),
            })
            .collect()
    }
}

/// JSON document configuration source.
#[derive(Debug)]
pub struct JsonConfigSource {
    values: HashMap<String, ConfigValue>,
}

impl JsonConfigSource {
    /// Parses a flat JSON object.
    pub fn from_json_str(content: &str) -> PatternResult<Self> {
        let values: HashMap<String, ConfigValue> = serde_json::from_str(content)?;
        Ok(Self { values })
    }

    /// Reads and parses a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PatternResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| PatternError::Io(err.to_string()))?;
        Self::from_json_str(&content)
    }
}

impl ConfigSource for JsonConfigSource {
    fn get(&self, key: &str) -> Option<ConfigValue> {
        self.values.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

/// Configuration provider consulting sources in priority order
#[derive(Debug, Default)]
pub struct ConfigProvider {
    sources: Vec<Box<dyn ConfigSource>>,
    cache: RwLock<HashMap<String, ConfigValue>>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider backed by `SHIPYARD_*` environment variables.
    pub fn from_env() -> Self {
        let mut provider = Self::new();
        provider.add_source(Box::new(EnvironmentConfigSource::with_prefix(ENV_PREFIX)));
        provider
    }

    /// Adds a source. Sources added first take priority.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) -> &mut Self {
        self.sources.push(source);
        self
    }

    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        if let Ok(cache) = self.cache.read() {
            if let Some(value) = cache.get(key) {
                return Some(value.clone());
            }
        }

        for source in &self.sources {
            if let Some(value) = source.get(key) {
                if let Ok(mut cache) = self.cache.write() {
                    cache.insert(key.to_string(), value.clone());
                }
                return Some(value);
            }
        }

        None
    }

    pub fn get_string(&self, key: &str) -> PatternResult<String> {
        self.get(key)
            .ok_or(PatternError::InvalidArgument("configuration key not found"))?
            .as_string()
            .map(str::to_string)
    }

    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn get_i64(&self, key: &str) -> PatternResult<i64> {
        self.get(key)
            .ok_or(PatternError::InvalidArgument("configuration key not found"))?
            .as_i64()
    }

    pub fn get_bool(&self, key: &str) -> PatternResult<bool> {
        self.get(key)
            .ok_or(PatternError::InvalidArgument("configuration key not found"))?
            .as_bool()
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// Clears cached lookups so sources are consulted again.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.sources.iter().flat_map(|s| s.keys()).collect();
        keys.sort();
        keys.dedup();
        keys
    }
}
