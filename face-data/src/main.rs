//! Face mesh export tool.
//!
//! With no arguments, fetches the MediaPipe canonical face model and writes
//! `js/face-data.js`:
//!
//! ```bash
//! face-data
//! face-data --input canonical_face_model.obj --format json
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use face_data::config::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT, ExportConfig, SourceLocation,
};
use face_data::pipeline::{Progress, export};
use mesh_io::{DEFAULT_EXPORT_NAME, LiteralSyntax, is_js_identifier};
use owo_colors::OwoColorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Export a face mesh as a data literal
///
/// Downloads an OBJ mesh, splits quads into triangles, and writes the
/// vertex and index lists for the presentation layer.
#[derive(Parser)]
#[command(name = "face-data")]
#[command(version)]
#[command(about = "Export an OBJ face mesh as a data literal", long_about = None)]
struct Cli {
    /// OBJ URL to fetch
    #[arg(long, default_value = DEFAULT_SOURCE_URL, conflicts_with = "input")]
    url: String,

    /// Read a local OBJ file instead of fetching
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output file [default: js/face-data.<js|json>]
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Output syntax
    #[arg(long, value_enum, default_value_t = Format::Js)]
    format: Format,

    /// Exported binding name (js format only)
    #[arg(long, default_value = DEFAULT_EXPORT_NAME, value_parser = parse_export_name)]
    name: String,

    /// Log level written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// ES module with `export const`
    Js,
    /// Plain JSON object
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl Cli {
    fn export_config(self) -> ExportConfig {
        let syntax = match self.format {
            Format::Js => LiteralSyntax::EsModule { name: self.name },
            Format::Json => LiteralSyntax::Json,
        };
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH).with_extension(syntax.extension()));
        let source = match self.input {
            Some(path) => SourceLocation::File(path),
            None => SourceLocation::Url(self.url),
        };

        ExportConfig {
            source,
            output,
            timeout: Duration::from_secs(self.timeout_secs),
            syntax,
        }
    }
}

fn parse_export_name(name: &str) -> Result<String, String> {
    if is_js_identifier(name) {
        Ok(name.to_string())
    } else {
        Err(format!("{name:?} is not a valid identifier"))
    }
}

fn init_logging(level: LogLevel) -> Result<()> {
    // Logs go to stderr; stdout carries the progress lines.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install logger")
}

fn report(progress: Progress<'_>) {
    match progress {
        Progress::Fetching { source } => println!("Fetching {source}..."),
        Progress::Parsing => println!("Parsing OBJ data..."),
        Progress::Parsed {
            vertices,
            triangles,
        } => println!("Found {vertices} vertices and {triangles} triangles."),
        Progress::Wrote { path } => {
            println!("{} Successfully wrote {}", "✓".green(), path.display());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    let config = cli.export_config();
    let source = config.mesh_source();
    export(&config, source.as_ref(), report).context("face mesh export failed")?;

    Ok(())
}
