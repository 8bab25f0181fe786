//! Stream Ranking Tool
//!
//! Reads stream and subtitle listings as JSON, runs them through the subrank
//! pipeline and prints the result as JSON on stdout. Logs go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use subrank_core::{
    AddonConfig, AnnotatedStream, Stream, StreamPipeline, SubtitleEntry, SubtitleListing,
    TitleRequest,
};
use tracing::{debug, info, Level};

/// CLI arguments
#[derive(Parser)]
#[command(name = "rank-streams")]
#[command(about = "Rank torrent streams by subtitle availability")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, env = "SUBRANK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log scoring details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite and rank streams against a subtitle listing
    Rank {
        /// JSON file with a stream array or `{"streams": [...]}`
        #[arg(short, long)]
        streams: PathBuf,

        /// JSON file with a subtitle array or `{"subtitles": [...]}`
        #[arg(short = 'S', long)]
        subtitles: Option<PathBuf>,
    },
    /// Map a subtitle listing to player subtitle entries
    Subtitles {
        /// JSON file with a subtitle array or `{"subtitles": [...]}`
        #[arg(short = 'S', long)]
        subtitles: PathBuf,

        /// Video filename; releases closest to it are listed first
        #[arg(short, long)]
        filename: Option<String>,
    },
    /// Parse and validate a title id such as `tt0944947:1:2`
    ParseId {
        /// `movie` or `series`
        media_type: String,
        id: String,
        /// Extra arguments, e.g. `filename=Show.S01E02.mkv`
        query: Option<String>,
    },
}

/// Stream response body
#[derive(Serialize)]
struct StreamsResponse<'a> {
    streams: &'a [AnnotatedStream],
}

/// Subtitle response body
#[derive(Serialize)]
struct SubtitlesResponse<'a> {
    subtitles: &'a [SubtitleListing],
}

/// Default configuration path
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("subrank").join("config.toml"))
}

fn load_config(path: Option<&Path>) -> Result<AddonConfig> {
    if let Some(path) = path {
        return AddonConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "using default config");
            AddonConfig::load(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        _ => Ok(AddonConfig::default()),
    }
}

/// Accepts either a bare array or an object holding the array under `key`.
fn extract_list(document: Value, key: &str) -> Result<Vec<Value>> {
    match document {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(_) => bail!("`{key}` is not an array"),
        },
        _ => bail!("expected an array or an object with a `{key}` array"),
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn parse_streams(document: Value) -> Result<Vec<Stream>> {
    let items = extract_list(document, "streams")?;
    let total = items.len();
    let streams: Vec<Stream> = items.into_iter().filter_map(Stream::from_value).collect();
    if streams.len() < total {
        debug!(skipped = total - streams.len(), "skipped non-object streams");
    }
    Ok(streams)
}

fn parse_subtitles(document: Value) -> Result<Vec<SubtitleEntry>> {
    let items = extract_list(document, "subtitles")?;
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Rank { streams, subtitles } => {
            let config = load_config(cli.config.as_deref())?;
            let streams = parse_streams(read_document(&streams)?)?;
            let subtitles = match subtitles {
                Some(path) => parse_subtitles(read_document(&path)?)?,
                None => Vec::new(),
            };
            info!(
                streams = streams.len(),
                subtitles = subtitles.len(),
                "ranking streams"
            );

            let pipeline = StreamPipeline::new(&config)?;
            let ranked = pipeline.run(&streams, &subtitles);
            print_json(&StreamsResponse { streams: &ranked }, cli.pretty)?;
        }
        Commands::Subtitles {
            subtitles,
            filename,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let subtitles = parse_subtitles(read_document(&subtitles)?)?;
            let listed = SubtitleListing::from_entries(&subtitles, &config, filename.as_deref());
            info!(subtitles = listed.len(), "listed subtitles");
            print_json(&SubtitlesResponse { subtitles: &listed }, cli.pretty)?;
        }
        Commands::ParseId {
            media_type,
            id,
            query,
        } => {
            let request = TitleRequest::parse(&media_type, &id, query.as_deref())?;
            print_json(&request, cli.pretty)?;
        }
    }

    Ok(())
}
