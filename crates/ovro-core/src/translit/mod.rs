//! Phonetic-to-Bangla transliteration.
//!
//! `Transliterate` is the seam the composition session drives; it treats
//! the implementation as an opaque pure function. `TableTransliterator`
//! is the built-in greedy longest-match implementation of the Avro
//! scheme, with its mapping table loadable from TOML.

mod config;
mod table;

pub use config::{parse_table_toml, TableConfig, TableConfigError, VowelForms};
pub use table::{TableTransliterator, DEFAULT_TABLE_TOML};

/// A transliteration oracle: pure, synchronous, deterministic, total.
pub trait Transliterate {
    /// Best transliteration of a phonetic token.
    /// An empty token must yield an empty string.
    fn parse(&self, token: &str) -> String;

    /// Ordered suggestion list for a token. Slot 0 must be the best
    /// transliteration (`parse`); implementations may append alternates.
    fn candidates(&self, token: &str) -> Vec<String> {
        vec![self.parse(token)]
    }
}

impl<F> Transliterate for F
where
    F: Fn(&str) -> String,
{
    fn parse(&self, token: &str) -> String {
        self(token)
    }
}

/// Passthrough oracle.
pub struct Identity;

impl Transliterate for Identity {
    fn parse(&self, token: &str) -> String {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_an_oracle() {
        let upper = |token: &str| token.to_uppercase();
        assert_eq!(upper.parse("ami"), "AMI");
        assert_eq!(upper.candidates("ami"), vec!["AMI".to_string()]);
    }

    #[test]
    fn identity_round_trips() {
        assert_eq!(Identity.parse("ami"), "ami");
        assert_eq!(Identity.parse(""), "");
    }
}
