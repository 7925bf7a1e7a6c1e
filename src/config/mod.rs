//! Plugin options and default merging.
//!
//! The host hands this crate an arbitrary partial mapping of overrides on
//! every lifecycle call. [`Options::resolve`] deep-merges that mapping over
//! the built-in defaults and extracts the two recognized keys:
//!
//! | Key           | Default              | Purpose                        |
//! |---------------|----------------------|--------------------------------|
//! | `baseUrl`     | `"/"`                | Base URL for generated routes  |
//! | `contentPath` | `"content/projects"` | Source directory tag           |
//!
//! Unrecognized keys are accepted and ignored. Resolution is pure and starts
//! from defaults every time - earlier merges never accumulate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Default base URL for generated routes.
pub const DEFAULT_BASE_URL: &str = "/";

/// Default source directory tag for project content.
pub const DEFAULT_CONTENT_PATH: &str = "content/projects";

// ============================================================================
// Options
// ============================================================================

/// Resolved plugin options. Immutable once merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Base URL for rendering the project section of the site.
    pub base_url: String,
    /// Directory tag the host assigns to project content sources.
    pub content_path: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            content_path: DEFAULT_CONTENT_PATH.to_string(),
        }
    }
}

impl Options {
    /// Resolve options by deep-merging `overrides` over the defaults.
    ///
    /// Override values win key-by-key; nested objects merge rather than
    /// replace wholesale. A missing or malformed value falls back to that
    /// key's default - resolution never fails.
    pub fn resolve(overrides: &OptionsOverrides) -> Self {
        let mut merged = Self::default_value();
        deep_merge(&mut merged, overrides.as_value());

        let defaults = Self::default();
        Self {
            base_url: string_field(&merged, "baseUrl").unwrap_or(defaults.base_url),
            content_path: string_field(&merged, "contentPath").unwrap_or(defaults.content_path),
        }
    }

    /// Defaults as a JSON object (the merge base).
    fn default_value() -> Value {
        serde_json::to_value(Self::default()).unwrap_or(Value::Null)
    }
}

/// Extract a string field from a merged JSON object.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

// ============================================================================
// OptionsOverrides
// ============================================================================

/// Error parsing option overrides from configuration text.
#[derive(Debug, Error)]
pub enum OverridesError {
    #[error("override parsing error")]
    Toml(#[from] toml::de::Error),
}

/// Caller-supplied partial options, kept as a raw JSON mapping.
///
/// Any shape is accepted; only `baseUrl` and `contentPath` are meaningful.
#[derive(Debug, Clone, Default)]
pub struct OptionsOverrides(Value);

impl OptionsOverrides {
    /// No overrides - resolution yields the defaults.
    pub fn none() -> Self {
        Self(Value::Null)
    }

    /// Wrap a JSON value as overrides.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse overrides from a TOML fragment (the host's config format).
    ///
    /// ```
    /// use project_source::{Options, OptionsOverrides};
    ///
    /// let overrides = OptionsOverrides::from_toml_str("baseUrl = \"/projects\"").unwrap();
    /// assert_eq!(Options::resolve(&overrides).base_url, "/projects");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, OverridesError> {
        let value: Value = toml::from_str(text)?;
        Ok(Self(value))
    }

    /// The raw override mapping.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for OptionsOverrides {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

// ============================================================================
// Deep merge
// ============================================================================

/// Deep-merge `overrides` into `base`.
///
/// Objects merge recursively; any other value (including arrays) replaces the
/// base value. `Null` overrides are ignored so absent input leaves defaults
/// untouched.
fn deep_merge(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                match base_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overrides) => *base = overrides.clone(),
    }
}

// ============================================================================
// tests
// ============================================================================
