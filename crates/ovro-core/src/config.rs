//! Session configuration.
//!
//! An explicit value passed to the composer at construction; hosts that
//! keep their settings in TOML can load one with `SessionConfig::from_toml`.

use serde::Deserialize;

use crate::token::DEFAULT_DIACRITIC_CHARS;

/// Shape of the host text surface. Changes whitespace substitution and
/// wrapping in the caret resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceKind {
    SingleLine,
    MultiLine,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub surface_kind: SurfaceKind,
    /// Surface content at attach time. State never persists across
    /// detach/attach, so the host passes this explicitly.
    pub initial_value: String,
    /// Characters beyond ASCII alphanumerics that extend the stack
    /// (script diacritics typed as punctuation).
    pub extra_word_chars: String,
    pub overlay: OverlayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Vertical clearance in pixels between the caret line and the overlay.
    pub gap: i32,
    /// Opaque style blob handed through to the host renderer.
    pub style: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            surface_kind: SurfaceKind::SingleLine,
            initial_value: String::new(),
            extra_word_chars: DEFAULT_DIACRITIC_CHARS.to_string(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            gap: 10,
            style: None,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.overlay.gap < 0 {
            return Err(ConfigError::InvalidValue {
                field: "overlay.gap",
                reason: format!("must be non-negative, got {}", self.overlay.gap),
            });
        }
        if let Some(c) = self.extra_word_chars.chars().find(|c| !c.is_ascii()) {
            return Err(ConfigError::InvalidValue {
                field: "extra_word_chars",
                reason: format!("non-ASCII character {c:?}"),
            });
        }
        if let Some(c) = self
            .extra_word_chars
            .chars()
            .find(|c| c.is_whitespace() || c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::InvalidValue {
                field: "extra_word_chars",
                reason: format!("{c:?} is already classified"),
            });
        }
        Ok(())
    }
}
