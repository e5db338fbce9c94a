use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixelpuzzle::models::{AppConfig, CliOverrides, CONFIG_ENV_VAR};
use pixelpuzzle::services::{batch, naming, write_manifest, BatchRunner, ManifestFormat};
use puzzle_convert::{ConvertOptions, Preset, PuzzleConverter};

#[derive(Parser)]
#[command(name = "pixelpuzzle")]
#[command(about = "Convert images into paint-by-number pixel art puzzles")]
#[command(version)]
struct Cli {
    /// YAML config file (overrides PIXELPUZZLE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Conversion flags shared by `convert` and `bulk`
#[derive(Args, Debug, Clone)]
struct ConvertArgs {
    /// Target grid size (width in cells)
    #[arg(short, long)]
    size: Option<u32>,

    /// Number of colors (0 = auto)
    #[arg(short, long)]
    colors: Option<usize>,

    /// Puzzle category
    #[arg(long)]
    category: Option<String>,

    /// Defaults bundle: "standard" or "compact"
    #[arg(long)]
    preset: Option<Preset>,

    /// Minimum alpha (0-255) for a pixel to be painted
    #[arg(long)]
    opacity_threshold: Option<u8>,
}

impl ConvertArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            preset: self.preset,
            size: self.size,
            colors: self.colors,
            category: self.category.clone(),
            opacity_threshold: self.opacity_threshold,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single image into a puzzle JSON file
    Convert {
        /// Input image path
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the puzzle JSON
        #[arg(short, long)]
        output: PathBuf,

        /// Puzzle name (derived from the file name if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Puzzle ID (derived from the file name if omitted)
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        args: ConvertArgs,
    },
    /// Convert every image in a folder
    Bulk {
        /// Input folder with images
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for puzzle JSONs
        #[arg(short, long)]
        output: PathBuf,

        /// Descend into subfolders; categories come from folder names
        #[arg(long)]
        recursive: bool,

        /// Manifest to regenerate after the run
        #[arg(long, value_enum, default_value = "json")]
        manifest: ManifestFormat,

        #[command(flatten)]
        args: ConvertArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            name,
            id,
            args,
        }) => {
            init_tracing();
            let config = AppConfig::load(cli.config.as_deref());
            run_convert_command(&config, &input, &output, name, id, &args)
        }
        Some(Commands::Bulk {
            input,
            output,
            recursive,
            manifest,
            args,
        }) => {
            init_tracing();
            let config = AppConfig::load(cli.config.as_deref());
            run_bulk_command(&config, &input, &output, recursive, manifest, &args)
        }
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelpuzzle=info,puzzle_convert=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Convert one image and write `<output>/<id>.json`
fn run_convert_command(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    name: Option<String>,
    id: Option<String>,
    args: &ConvertArgs,
) -> anyhow::Result<()> {
    let overrides = args.overrides();
    let converter = PuzzleConverter::new(config.convert_options(&overrides));
    let meta = naming::derive_meta(
        input,
        config.strip_prefix.as_deref(),
        id.as_deref(),
        name.as_deref(),
        &config.category(&overrides),
    );

    let path = batch::convert_file(&converter, input, meta, output)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Convert a folder of images, then regenerate the manifest
fn run_bulk_command(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    recursive: bool,
    manifest: ManifestFormat,
    args: &ConvertArgs,
) -> anyhow::Result<()> {
    let overrides = args.overrides();
    let runner = BatchRunner::new(PuzzleConverter::new(config.convert_options(&overrides)), output)
        .default_category(config.category(&overrides))
        .categories(config.categories.clone())
        .strip_prefix(config.strip_prefix.clone())
        .recursive(recursive);

    let report = runner.run(input)?;

    println!("\n========================================");
    println!("Conversion complete!");
    println!("  Success: {}", report.succeeded());
    println!("  Failed:  {}", report.failed());
    for (path, e) in report.failures() {
        println!("    {}: {e}", path.display());
    }
    println!("========================================\n");

    if report.succeeded() > 0 || output.is_dir() {
        if let Some(path) = write_manifest(output, manifest)? {
            println!("Generated {}", path.display());
        }
    }

    if report.failed() > 0 {
        anyhow::bail!("{} of {} images failed", report.failed(), report.outcomes.len());
    }
    Ok(())
}

/// Display version, configuration sources and presets
fn run_status_command(explicit_config: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("pixelpuzzle v{VERSION}");
    println!("Image to paint-by-number puzzle converter\n");

    println!("Configuration:");
    let env_config = std::env::var(CONFIG_ENV_VAR).ok();
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        env_config.as_deref().unwrap_or("(not set)")
    );
    let source = match AppConfig::locate(explicit_config) {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (file not found, using defaults)", path.display()),
        None => "preset defaults".to_string(),
    };
    println!("  Source: {source}");

    println!("\nPresets:");
    for preset in Preset::ALL {
        let opts = ConvertOptions::preset(preset);
        println!(
            "  {:<9} width {:>2}, colors {}-{} (x{:.1}), easy <= {} cells/{} colors, medium <= {} cells/{} colors",
            preset.as_str(),
            opts.target_width,
            opts.palette_size.min_colors,
            opts.palette_size.max_colors,
            opts.palette_size.factor,
            opts.difficulty.easy_max_cells,
            opts.difficulty.easy_max_colors,
            opts.difficulty.medium_max_cells,
            opts.difficulty.medium_max_colors,
        );
    }

    println!("\nCommands:");
    println!("  pixelpuzzle convert  Convert one image");
    println!("  pixelpuzzle bulk     Convert a folder of images");
    println!("\nRun 'pixelpuzzle --help' for more details.");
}
