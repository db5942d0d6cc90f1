//! Rendering configuration: JSON layout and the defaults new cards start from.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::error::ValidationError;
use crate::types::{Size, Theme};

pub const RENDER_CONFIG_SCHEMA_VERSION: u32 = 1;

/// Overrides [`JsonStyle::default`] when set to `compact` or `pretty`.
pub const JSON_STYLE_ENV: &str = "KHL_CARD_JSON_STYLE";

fn default_schema_version() -> u32 {
    RENDER_CONFIG_SCHEMA_VERSION
}

fn default_indent() -> u8 {
    4
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: CardDefaults,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            schema_version: RENDER_CONFIG_SCHEMA_VERSION,
            output: OutputConfig::default(),
            defaults: CardDefaults::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != RENDER_CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedSchemaVersion {
                expected: RENDER_CONFIG_SCHEMA_VERSION,
                got: self.schema_version,
            });
        }
        if let Some(color) = &self.defaults.color {
            color.parse::<Color>()?;
        }
        Ok(())
    }
}

/// How serialized cards are laid out as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub style: JsonStyle,
    /// Spaces per level in pretty output.
    #[serde(default = "default_indent")]
    pub indent: u8,
}

impl OutputConfig {
    pub fn compact() -> Self {
        Self {
            style: JsonStyle::Compact,
            ..Self::default()
        }
    }

    pub fn pretty(indent: u8) -> Self {
        Self {
            style: JsonStyle::Pretty,
            indent,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            style: JsonStyle::default(),
            indent: default_indent(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JsonStyle {
    Compact,
    Pretty,
}

impl JsonStyle {
    /// Parse a style name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "minified" => Some(Self::Compact),
            "pretty" | "indented" => Some(Self::Pretty),
            _ => None,
        }
    }

    /// Reads the style from `KHL_CARD_JSON_STYLE`.
    pub fn from_env() -> Self {
        env::var(JSON_STYLE_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

impl Default for JsonStyle {
    fn default() -> Self {
        JsonStyle::Pretty
    }
}

/// Metadata applied by [`crate::Card::from_defaults`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CardDefaults {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported schema version: expected {expected}, got {got}")]
    UnsupportedSchemaVersion { expected: u32, got: u32 },
    #[error("invalid render config: {0}")]
    Parse(String),
    #[error(transparent)]
    Defaults(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip_defaults() {
        let cfg = RenderConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize");
        let decoded = RenderConfig::from_json_str(&json).expect("deserialize");
        assert_eq!(decoded, cfg);
        assert_eq!(decoded.output.indent, 4);
        assert_eq!(decoded.output.style, JsonStyle::Pretty);
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let cfg = RenderConfig::from_json_str(
            r##"{"output":{"style":"compact"},"defaults":{"theme":"danger","color":"#ffaa00"}}"##,
        )
        .expect("config");
        assert_eq!(cfg.schema_version, RENDER_CONFIG_SCHEMA_VERSION);
        assert_eq!(cfg.output, OutputConfig::compact());
        assert_eq!(cfg.defaults.theme, Theme::Danger);
        assert_eq!(cfg.defaults.size, Size::Lg);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = RenderConfig::from_json_str(r#"{"schema_version":1,"extra":42}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_unsupported_schema_version() {
        let cfg = RenderConfig {
            schema_version: 999,
            ..RenderConfig::default()
        };
        assert_eq!(
            cfg.validate().unwrap_err(),
            ConfigError::UnsupportedSchemaVersion {
                expected: 1,
                got: 999
            }
        );
    }

    #[test]
    fn rejects_bad_default_color() {
        let err = RenderConfig::from_json_str(r#"{"defaults":{"color":"teal"}}"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Defaults(ValidationError::InvalidColor("teal".into()))
        );
    }

    #[test]
    fn json_style_parse_env() {
        assert_eq!(JsonStyle::parse("Compact"), Some(JsonStyle::Compact));
        assert_eq!(JsonStyle::parse("yaml"), None);
        unsafe { std::env::set_var(JSON_STYLE_ENV, "COMPACT") };
        assert_eq!(JsonStyle::from_env(), JsonStyle::Compact);
        unsafe { std::env::remove_var(JSON_STYLE_ENV) };
        assert_eq!(JsonStyle::from_env(), JsonStyle::Pretty);
    }
}
