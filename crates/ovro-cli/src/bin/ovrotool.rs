use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ovro_cli::commands::{compose_ops, parse_ops, table_ops};

#[derive(Parser)]
#[command(name = "ovrotool", about = "Avro composition diagnostics")]
struct Cli {
    /// Enable debug logging (needs a build with the `trace` feature)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate each whitespace-separated token of the input
    Parse {
        /// Text in the Latin phonetic alphabet
        text: String,
        /// Path to a custom mapping table TOML
        #[arg(long)]
        table: Option<PathBuf>,
    },

    /// Trace a composition session one keystroke at a time
    Compose {
        /// Characters to type; space commits the pending token
        keys: String,
        /// Simulate a multi-line surface
        #[arg(long)]
        multi_line: bool,
        /// Surface content width in pixels
        #[arg(long, default_value = "240")]
        width: u32,
        /// Path to a custom mapping table TOML
        #[arg(long)]
        table: Option<PathBuf>,
    },

    /// Validate a custom mapping table TOML
    CheckTable {
        /// Path to the table file
        file: String,
    },

    /// Print the embedded default mapping table
    ExportTable,
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        init_tracing();
    }

    match cli.command {
        Command::Parse { text, table } => parse_ops::run(&text, table.as_deref()),
        Command::Compose {
            keys,
            multi_line,
            width,
            table,
        } => compose_ops::run(&keys, multi_line, width, table.as_deref()),
        Command::CheckTable { file } => table_ops::validate(&file),
        Command::ExportTable => table_ops::export(),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ovro=debug")),
        )
        .init();
}
