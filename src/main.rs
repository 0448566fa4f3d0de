// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use numscan::exporter::json::render;
use numscan::utils::logging::{format_error, format_hit, format_success, format_warning};
use numscan::{scan_all, Config, ExtractorKind, JsonExporter, OutputFormat, Validator};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "numscan")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extract integers, ordinals, dates and timestamps from text", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", env = "NUMSCAN_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every hit found in FILE (or stdin)
    Scan {
        file: Option<PathBuf>,

        /// Extractor to run, in order; repeat to run several
        #[arg(short, long = "extractor", value_name = "NAME")]
        extractors: Vec<String>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Write a JSON report of the hits in FILE
    Export {
        file: PathBuf,

        #[arg(short, long, default_value = "./exports")]
        output: PathBuf,

        #[arg(short, long = "extractor", value_name = "NAME")]
        extractors: Vec<String>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// List the available extractors
    List,
}

fn main() {
    let cli = Cli::parse();

    numscan::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    if let Err(e) = run(cli) {
        eprintln!("{}", format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan {
            file,
            extractors,
            format,
            pretty,
        } => cmd_scan(&config, file.as_deref(), &extractors, format, pretty),
        Commands::Export {
            file,
            output,
            extractors,
            pretty,
        } => cmd_export(&config, &file, output, &extractors, pretty),
        Commands::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::load(Some(path)).context("Failed to load configuration")
        }
        None => Ok(Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })),
    }
}

fn resolve_extractors(config: &Config, overrides: &[String]) -> Result<Vec<ExtractorKind>> {
    if overrides.is_empty() {
        return config
            .extractor_kinds()
            .context("Invalid extractor in configuration");
    }

    ExtractorKind::parse_list(overrides).context("Invalid --extractor")
}

fn read_input(config: &Config, file: Option<&Path>) -> Result<(String, String)> {
    let limit = config.scan.max_input_bytes;

    match file {
        Some(path) => {
            let text = Validator::read_file(path, limit)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            debug!("Reading input from stdin");
            let text =
                Validator::read_text(io::stdin().lock(), limit).context("Failed to read stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}

fn cmd_scan(
    config: &Config,
    file: Option<&Path>,
    extractors: &[String],
    format: Option<OutputFormat>,
    pretty: bool,
) -> Result<()> {
    let kinds = resolve_extractors(config, extractors)?;
    let (source, text) = read_input(config, file)?;

    let start_time = Instant::now();
    let hits = scan_all(&text, &kinds);
    debug!(
        "Scanned {} in {:.2?}: {} hits",
        source,
        start_time.elapsed(),
        hits.len()
    );

    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            println!("{}", render(&hits, pretty || config.output.pretty)?);
        }
        OutputFormat::Text => {
            if hits.is_empty() {
                eprintln!("{}", format_warning(&format!("No hits in {}", source)));
            }
            for hit in &hits {
                println!("{}", format_hit(hit));
            }
        }
    }

    Ok(())
}

fn cmd_export(
    config: &Config,
    file: &Path,
    output: PathBuf,
    extractors: &[String],
    pretty: bool,
) -> Result<()> {
    let kinds = resolve_extractors(config, extractors)?;
    let (source, text) = read_input(config, Some(file))?;

    let hits = scan_all(&text, &kinds);
    let exporter = JsonExporter::new(output).context("Failed to create output directory")?;
    let path = exporter
        .export(&source, &hits, pretty || config.output.pretty)
        .context("Export failed")?;

    println!(
        "{}",
        format_success(&format!("Exported {} hits to {}", hits.len(), path.display()))
    );
    Ok(())
}

fn cmd_list() {
    for kind in ExtractorKind::ALL {
        println!("{:<16} {}", kind.name(), kind.category());
    }
}
