//! Greedy longest-match table transliterator for the Avro scheme.

use std::collections::BTreeMap;

use tracing::{debug, debug_span};

use super::config::{parse_table_toml, TableConfig, TableConfigError, VowelForms};
use super::Transliterate;

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

/// Virama joining consecutive consonants into a cluster.
const HASANTA: char = '\u{09CD}';

/// What the previous emitted unit was; decides kar-vs-full vowel forms
/// and hasanta insertion.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    None,
    Consonant,
    Other,
}

enum Matched<'a> {
    Consonant(&'a str),
    Vowel(&'a VowelForms),
    Symbol(&'a str),
}

pub struct TableTransliterator {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, VowelForms>,
    symbols: BTreeMap<String, String>,
    max_key_len: usize,
}

impl TableTransliterator {
    /// Build from the embedded default Avro table.
    pub fn new() -> Self {
        Self::from_toml(DEFAULT_TABLE_TOML).expect("embedded table must be valid")
    }

    /// Build from custom TOML tables.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        Ok(Self::from_config(parse_table_toml(toml_str)?))
    }

    pub fn from_config(config: TableConfig) -> Self {
        let TableConfig {
            consonants,
            vowels,
            symbols,
        } = config;
        let max_key_len = consonants
            .keys()
            .chain(vowels.keys())
            .chain(symbols.keys())
            .map(|k| k.len())
            .max()
            .unwrap_or(1);
        debug!(
            consonants = consonants.len(),
            vowels = vowels.len(),
            symbols = symbols.len(),
            max_key_len,
            "table loaded"
        );
        Self {
            consonants,
            vowels,
            symbols,
            max_key_len,
        }
    }

    /// Longest table entry prefixing `rest`, if any. Keys are ASCII, so
    /// candidate lengths that fall inside a multi-byte char are skipped.
    fn longest_match(&self, rest: &str) -> Option<(usize, Matched<'_>)> {
        let limit = rest.len().min(self.max_key_len);
        for len in (1..=limit).rev() {
            if !rest.is_char_boundary(len) {
                continue;
            }
            let head = &rest[..len];
            if let Some(forms) = self.vowels.get(head) {
                return Some((len, Matched::Vowel(forms)));
            }
            if let Some(sign) = self.symbols.get(head) {
                return Some((len, Matched::Symbol(sign)));
            }
            if let Some(consonant) = self.consonants.get(head) {
                return Some((len, Matched::Consonant(consonant)));
            }
        }
        None
    }
}

impl Default for TableTransliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterate for TableTransliterator {
    fn parse(&self, token: &str) -> String {
        let _span = debug_span!("parse", token).entered();

        let mut out = String::new();
        let mut rest = token;
        let mut prev = Prev::None;

        while !rest.is_empty() {
            match self.longest_match(rest) {
                Some((len, Matched::Consonant(consonant))) => {
                    if prev == Prev::Consonant {
                        out.push(HASANTA);
                    }
                    out.push_str(consonant);
                    prev = Prev::Consonant;
                    rest = &rest[len..];
                }
                Some((len, Matched::Vowel(forms))) => {
                    if prev == Prev::Consonant {
                        out.push_str(&forms.kar);
                    } else {
                        out.push_str(&forms.full);
                    }
                    prev = Prev::Other;
                    rest = &rest[len..];
                }
                Some((len, Matched::Symbol(sign))) => {
                    out.push_str(sign);
                    prev = Prev::Other;
                    rest = &rest[len..];
                }
                None => {
                    // Unknown character: pass through unchanged.
                    let Some(c) = rest.chars().next() else { break };
                    out.push(c);
                    prev = Prev::Other;
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        debug!(out = %out);
        out
    }

    /// Best parse first, raw Latin token as the alternate (picking it
    /// commits the typed text untransliterated).
    fn candidates(&self, token: &str) -> Vec<String> {
        let best = self.parse(token);
        if best.is_empty() || best == token {
            vec![best]
        } else {
            vec![best, token.to_string()]
        }
    }
}
