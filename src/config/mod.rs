//! Settings for the companion chat application.
//!
//! Values are resolved by an ordered three-way merge: the struct default is
//! the weakest source, a runtime configuration map can override it, and an
//! environment variable named after the field (uppercased) beats both.
//! Runtime keys that do not map to a known field are kept in an explicit
//! extension map instead of being attached to the struct dynamically.

use std::collections::BTreeMap;
use std::env;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields resolved against the environment before the runtime map. Keys in
/// the runtime map that are not listed here land in [`Configuration::extra`].
const KNOWN_FIELDS: &[&str] = &["user_id"];

const DEFAULT_USER_ID: &str = "default-user";

/// The configurable fields for the chatbot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Identity the conversation is scoped to.
    pub user_id: String,

    /// Runtime configuration keys with no matching field, carried verbatim.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl Configuration {
    /// Builds a configuration from an optional runtime map.
    ///
    /// For each known field the environment variable wins when set; the
    /// runtime value applies only as a fallback, and an explicit null there
    /// counts as absent, leaving the default in place.
    pub fn from_runnable_config(configurable: Option<&Map<String, Value>>) -> Self {
        let empty = Map::new();
        let configurable = configurable.unwrap_or(&empty);

        let mut config = Self::default();
        if let Some(user_id) = resolve_field("user_id", configurable) {
            config.user_id = user_id;
        }

        for (key, value) in configurable {
            if !KNOWN_FIELDS.contains(&key.as_str()) {
                config.extra.insert(key.clone(), value.clone());
            }
        }

        config
    }
}

/// Resolves one known field: environment first, runtime map second.
fn resolve_field(field: &str, configurable: &Map<String, Value>) -> Option<String> {
    match env::var(field.to_uppercase()) {
        Ok(value) => Some(value),
        Err(_) => configurable.get(field).and_then(value_as_string),
    }
}

/// Renders a runtime value as a string, treating null as absent.
fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
