use std::fs;

use ovro_core::translit::parse_table_toml;

pub fn validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} consonants, {} vowels, {} symbols",
        table.consonants.len(),
        table.vowels.len(),
        table.symbols.len()
    );
}

pub fn export() {
    print!("{}", ovro_core::translit::DEFAULT_TABLE_TOML);
}
