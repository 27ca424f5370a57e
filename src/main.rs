use anyhow::Context;
use clap::{Parser, Subcommand};
use edge_shape_classifier::analysis::{inspect_file, BatchRunner, BatchSummary};
use edge_shape_classifier::config::{load_config_or_default, Config, ConfigFormat, OutputFormat};
use edge_shape_classifier::logging::{init_logging, LoggingConfig};
use edge_shape_classifier::visualization::{print_labels, print_report, print_summary_table};
use edge_shape_classifier::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "classify")]
#[command(about = "Label photographed objects as ball, cylinder or brick from their edge directions")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML or JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write results as JSON to this file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more images and print their labels
    Run {
        /// Images to classify (at least 245x245 RGB)
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// Show every statistic behind the label of a single image
    Inspect {
        /// Image to inspect
        image: PathBuf,
    },

    /// Classify every image in a directory and summarize the labels
    Batch {
        /// Directory containing images
        dir: PathBuf,
    },

    /// Write the default configuration (TOML, or JSON for a .json path)
    InitConfig {
        /// Destination file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_or_default(cli.config.as_deref());
    // -v on the command line wins over the configured levels
    if cli.config.is_none() || cli.verbose > 0 {
        let verbosity = LoggingConfig::from_verbosity(cli.verbose);
        config.logging.global_level = verbosity.global_level;
        config.logging.classifier_level = verbosity.classifier_level;
        config.logging.batch_level = verbosity.batch_level;
    }
    let _log_guard = init_logging(&config.logging)?;

    match cli.command {
        Commands::Run { images } => handle_run(&config, &images, cli.output.as_deref())?,
        Commands::Inspect { image } => handle_inspect(&config, &image, cli.output.as_deref())?,
        Commands::Batch { dir } => handle_batch(&config, &dir, cli.output.as_deref())?,
        Commands::InitConfig { path } => handle_init_config(&path)?,
    }

    Ok(())
}

fn handle_run(config: &Config, images: &[PathBuf], output: Option<&Path>) -> anyhow::Result<()> {
    let reports = BatchRunner::new().run(images);

    match config.output.format {
        OutputFormat::Text => print_labels(&reports),
        OutputFormat::Json => println!("{}", to_json(config, &reports)?),
    }

    if let Some(output_path) = output {
        write_json(config, output_path, &reports)?;
    }

    let failures = reports.iter().filter(|r| !r.is_success()).count();
    if failures > 0 {
        return Err(anyhow::anyhow!("{} of {} image(s) could not be classified", failures, reports.len()));
    }
    Ok(())
}

fn handle_inspect(config: &Config, image_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let report = inspect_file(image_path)?;

    match config.output.format {
        OutputFormat::Text => {
            let width = config.output.show_histogram.then_some(config.output.histogram_width);
            print_report(image_path, &report, width);
        }
        OutputFormat::Json => println!("{}", to_json(config, &report)?),
    }

    if let Some(output_path) = output {
        write_json(config, output_path, &report)?;
    }

    Ok(())
}

fn handle_batch(config: &Config, dir: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let images = find_images(dir)
        .with_context(|| format!("Failed to read image directory {}", dir.display()))?;
    if images.is_empty() {
        return Err(anyhow::anyhow!("No images found in {}", dir.display()));
    }

    let reports = BatchRunner::new().run(&images);
    let summary = BatchSummary::from_reports(&reports);

    match config.output.format {
        OutputFormat::Text => {
            print_labels(&reports);
            println!();
            print_summary_table(&summary);
        }
        OutputFormat::Json => println!("{}", to_json(config, &summary)?),
    }

    if let Some(output_path) = output {
        let results = serde_json::json!({
            "summary": summary,
            "files": reports,
        });
        write_json(config, output_path, &results)?;
    }

    Ok(())
}

fn handle_init_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return Err(anyhow::anyhow!("Refusing to overwrite {}", path.display()));
    }
    Config::default().save_to_file(path, ConfigFormat::from_path(path))?;
    println!("Default configuration written to {}", path.display());
    Ok(())
}

fn to_json<T: Serialize>(config: &Config, value: &T) -> anyhow::Result<String> {
    Ok(if config.output.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn write_json<T: Serialize>(config: &Config, path: &Path, value: &T) -> anyhow::Result<()> {
    std::fs::write(path, to_json(config, value)?)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    tracing::info!(path = %path.display(), "Results saved");
    Ok(())
}
