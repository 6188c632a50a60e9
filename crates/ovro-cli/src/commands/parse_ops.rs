use std::path::Path;

use unicode_width::UnicodeWidthStr;

use ovro_core::Transliterate;

/// Transliterate each whitespace-separated token of `text`, printing
/// aligned input/output columns.
pub fn run(text: &str, table: Option<&Path>) {
    let oracle = super::load_table(table);

    let width = text
        .split_whitespace()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);
    for token in text.split_whitespace() {
        let pad = width - UnicodeWidthStr::width(token);
        println!("{token}{:pad$}  {}", "", oracle.parse(token));
    }
}
