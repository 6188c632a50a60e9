//! Transliteration table parsing and validation.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct VowelForms {
    /// Independent form: word-initial or following another vowel.
    pub full: String,
    /// Dependent (kar) form following a consonant. May be empty for the
    /// inherent vowel.
    #[serde(default)]
    pub kar: String,
}

#[derive(Deserialize)]
struct RawTable {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, VowelForms>,
    /// Standalone signs (anusvara, bisarga, dari): never joined into a
    /// cluster, and a following vowel takes its independent form.
    #[serde(default)]
    symbols: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[consonants] table is empty")]
    NoConsonants,
    #[error("[vowels] table is empty")]
    NoVowels,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
}

/// Parsed and validated mapping tables, sorted by key.
pub struct TableConfig {
    pub consonants: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, VowelForms>,
    pub symbols: BTreeMap<String, String>,
}

/// Parse TOML text into validated transliteration tables.
pub fn parse_table_toml(toml_str: &str) -> Result<TableConfig, TableConfigError> {
    let raw: RawTable =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if raw.consonants.is_empty() {
        return Err(TableConfigError::NoConsonants);
    }
    if raw.vowels.is_empty() {
        return Err(TableConfigError::NoVowels);
    }

    for (key, value) in &raw.consonants {
        check_key(key)?;
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
    }
    for (key, forms) in &raw.vowels {
        check_key(key)?;
        if forms.full.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
    }
    for (key, value) in &raw.symbols {
        check_key(key)?;
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(TableConfig {
        consonants: raw.consonants,
        vowels: raw.vowels,
        symbols: raw.symbols,
    })
}

fn check_key(key: &str) -> Result<(), TableConfigError> {
    if key.is_empty() || !key.is_ascii() {
        return Err(TableConfigError::NonAsciiKey(key.to_string()));
    }
    Ok(())
}
