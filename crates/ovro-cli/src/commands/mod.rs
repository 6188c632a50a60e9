macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            ::std::process::exit(1);
        })
    };
}

pub mod compose_ops;
pub mod parse_ops;
pub mod table_ops;

use std::fs;
use std::path::Path;

use ovro_core::TableTransliterator;

/// Load a transliteration table, falling back to the embedded default.
pub(crate) fn load_table(path: Option<&Path>) -> TableTransliterator {
    let Some(path) = path else {
        return TableTransliterator::new();
    };
    let content = die!(
        fs::read_to_string(path),
        "Error reading {}: {}",
        path.display()
    );
    die!(TableTransliterator::from_toml(&content), "Error: {}")
}
