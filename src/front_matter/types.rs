use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use thiserror::Error;

/// Metadata block at the top of a content file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,

    /// Opaque date string, compared lexicographically and never parsed
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: String,

    /// Drafts are rendered but left out of the sitemap
    #[serde(default, deserialize_with = "flag")]
    pub draft: bool,
}

/// Any YAML scalar as text, so `date: 2024` reads as `"2024"`
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(DeError::custom(format!("expected a scalar, found {:?}", other))),
    }
}

/// `true`/`false`, also accepting the strings `true` and `yes`
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::String(s) => Ok(matches!(s.as_str(), "true" | "yes")),
        other => Err(DeError::custom(format!("expected a boolean, found {:?}", other))),
    }
}

/// Front matter extraction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontMatterError {
    #[error("missing opening '---' delimiter")]
    MissingDelimiter,

    #[error("front matter block is never closed with '---'")]
    Unterminated,

    #[error("front matter is not valid YAML: {0}")]
    InvalidYaml(String),

    #[error("missing required front matter field(s): {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}
