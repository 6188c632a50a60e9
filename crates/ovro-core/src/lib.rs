//! Building blocks for the Avro phonetic composition engine.
//!
//! Everything here is stateless: the transliteration oracle and its
//! table-driven default implementation, caret-relative token extraction,
//! key classification, and the caret pixel-coordinate resolver. The
//! stateful composition session lives in `ovro-session`.

pub mod caret;
pub mod config;
pub mod token;
pub mod translit;

pub use caret::{resolve_caret, CaretAnchor, SurfaceGeometry};
pub use config::{ConfigError, OverlayConfig, SessionConfig, SurfaceKind};
pub use token::{classify, current_run, CommitKey, CycleDir, Key, KeyClass};
pub use translit::{Identity, TableTransliterator, Transliterate};
