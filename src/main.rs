//! # Fortuna CLI
//!
//! Runs the fortune box and produces slip assets.
//!
//! ## Usage
//!
//! ```bash
//! # Poll the lid switch and print on every genuine open
//! fortuna run --config /etc/fortuna.json
//!
//! # Print one fortune now
//! fortuna print --text "Adventure awaits around the corner."
//!
//! # Print the printer self-test page
//! fortuna selftest
//!
//! # Render one slip to JSON, with a PNG preview
//! fortuna render --text "Good things come." --font Plex.ttf --auto-size --png slip.png
//!
//! # Render every built-in fortune (with lucky numbers) in parallel
//! fortuna generate --font Plex.ttf --output slips
//!
//! # Preview a slip asset
//! fortuna preview slips/slip_000.json --png slip.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;

use fortuna::{
    FortunaError, PrinterConfig, PrinterSession,
    config::AppConfig,
    fortune::{
        FortunePrinter, PrintedSlip,
        assets::{AssetFile, AssetRegistry, DirRegistry, FortuneAsset, MemoryRegistry},
        fortunes,
    },
    layout::TtfFont,
    render::{
        preview,
        rotate::Rotation,
        slip::{FontSizing, SlipOptions, render_slip},
    },
    transport::SerialTransport,
    trigger::{self, ControlLoop, SysfsPin},
};

/// Fortuna - thermal fortune printer
#[derive(Parser, Debug)]
#[command(name = "fortuna")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Slip artifact format
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Rust,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Rust => "rs",
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Poll the trigger pin and print a fortune on every event
    Run {
        /// Configuration file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print one fortune now
    Print {
        /// Text for the live fallback (random when omitted)
        #[arg(long)]
        text: Option<String>,

        /// Configuration file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the printer self-test page
    Selftest {
        /// Configuration file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Render one slip bitmap
    Render {
        /// Slip text; a blank line starts the smaller footer
        #[arg(long)]
        text: String,

        /// TrueType font file
        #[arg(long, value_name = "TTF")]
        font: PathBuf,

        /// Font size when not auto-sizing
        #[arg(long, default_value = "28")]
        size: u32,

        /// Pick the largest size that fills the width
        #[arg(long)]
        auto_size: bool,

        #[arg(long, default_value = "18")]
        size_min: u32,

        #[arg(long, default_value = "72")]
        size_max: u32,

        /// Canvas width in dots before rotation
        #[arg(long, default_value = "384")]
        width: u32,

        /// Canvas height in dots before rotation
        #[arg(long, default_value = "120")]
        height: u32,

        /// Derive the height from the text
        #[arg(long)]
        auto_height: bool,

        /// Horizontal margin as a fraction of the width
        #[arg(long, default_value = "0.06")]
        margin: f32,

        /// Counter-clockwise rotation: 0, 90, 180 or 270
        #[arg(long, default_value = "90")]
        rotate: u32,

        /// Output file (defaults to fortune_slip.<format>)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Also write a PNG preview
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Render every built-in fortune with lucky numbers
    Generate {
        /// TrueType font file
        #[arg(long, value_name = "TTF")]
        font: PathBuf,

        /// Output directory
        #[arg(long, default_value = "slips")]
        output: PathBuf,

        /// Only generate the first N fortunes
        #[arg(long)]
        count: Option<usize>,

        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Write a PNG preview of a slip asset
    Preview {
        /// Slip asset (JSON)
        asset: PathBuf,

        #[arg(long, value_name = "FILE")]
        png: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(command: Commands) -> Result<(), FortunaError> {
    match command {
        Commands::Run { config } => run_loop(&load_config(config.as_deref())?),

        Commands::Print { text, config } => {
            let config = load_config(config.as_deref())?;
            let mut session = open_printer(&config)?;
            let printer = FortunePrinter::new(open_registry(&config), config.fortune.clone());

            match printer.print(&mut session, text.as_deref())? {
                PrintedSlip::Asset {
                    name,
                    width,
                    height,
                } => println!("Printed slip {} ({}x{})", name, width, height),
                PrintedSlip::Live { text, .. } => println!("Printed: {}", text),
            }
            Ok(())
        }

        Commands::Selftest { config } => {
            let config = load_config(config.as_deref())?;
            open_printer(&config)?.test_print()?;
            println!("Self-test page printed");
            Ok(())
        }

        Commands::Render {
            text,
            font,
            size,
            auto_size,
            size_min,
            size_max,
            width,
            height,
            auto_height,
            margin,
            rotate,
            out,
            format,
            png,
        } => {
            let rotation = Rotation::from_degrees(rotate).ok_or_else(|| {
                FortunaError::InvalidDimensions(format!(
                    "rotation must be 0, 90, 180 or 270, got {}",
                    rotate
                ))
            })?;
            let options = SlipOptions {
                width,
                height,
                auto_height,
                margin,
                sizing: if auto_size {
                    FontSizing::Auto {
                        min: size_min,
                        max: size_max,
                    }
                } else {
                    FontSizing::Fixed(size)
                },
                rotation,
                ..SlipOptions::default()
            };

            let font = TtfFont::load(&font)?;
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!("fortune_slip.{}", format.extension()))
            });
            let asset = render_to_file(&font, &text, &options, &out, format)?;

            if let Some(png) = png {
                preview::save_png(&asset.to_packed(), &png)?;
            }
            println!(
                "Wrote {} (WIDTH={}, HEIGHT={}, bytes={})",
                out.display(),
                asset.width(),
                asset.height(),
                asset.bitmap().len()
            );
            Ok(())
        }

        Commands::Generate {
            font,
            output,
            count,
            format,
        } => {
            let font = TtfFont::load(&font)?;
            fs::create_dir_all(&output)?;

            let list = &fortunes::FORTUNES[..count
                .unwrap_or(fortunes::FORTUNES.len())
                .min(fortunes::FORTUNES.len())];
            let options = SlipOptions::batch();

            let generated = list
                .par_iter()
                .enumerate()
                .filter(|(i, fortune)| {
                    let text = fortunes::with_lucky_numbers(fortune, &mut rand::rng());
                    let path = output.join(format!("slip_{:03}.{}", i, format.extension()));
                    match render_to_file(&font, &text, &options, &path, format) {
                        Ok(_) => {
                            log::info!("generated {}", path.display());
                            true
                        }
                        Err(e) => {
                            log::error!("failed to generate {}: {}", path.display(), e);
                            false
                        }
                    }
                })
                .count();

            println!("Generated {} of {} fortune slips", generated, list.len());
            Ok(())
        }

        Commands::Preview { asset, png } => {
            let slip = AssetFile::load(&asset)?;
            preview::save_png(&slip.to_packed(), &png)?;
            println!(
                "{}x{} slip, {} bytes -> {}",
                slip.width(),
                slip.height(),
                slip.bitmap().len(),
                png.display()
            );
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, FortunaError> {
    match path {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    }
}

fn open_printer(config: &AppConfig) -> Result<PrinterSession<SerialTransport>, FortunaError> {
    PrinterSession::open(&config.uart, PrinterConfig::QR203)
}

/// Slip assets from the configured directory, or none (live text only).
fn open_registry(config: &AppConfig) -> Box<dyn AssetRegistry> {
    match &config.fortune.asset_dir {
        Some(dir) => match DirRegistry::open(dir) {
            Ok(registry) => Box::new(registry),
            Err(e) => {
                log::warn!("slip assets unavailable ({}): {}", dir.display(), e);
                Box::new(MemoryRegistry::new())
            }
        },
        None => Box::new(MemoryRegistry::new()),
    }
}

fn run_loop(config: &AppConfig) -> Result<(), FortunaError> {
    let session = if config.printer_enabled {
        match open_printer(config) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("printing disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let pin = SysfsPin::open(config.trigger.pin)?;
    let printer = FortunePrinter::new(open_registry(config), config.fortune.clone());

    let mut control = ControlLoop::new(
        pin,
        trigger::from_config(&config.trigger),
        session,
        printer,
        Duration::from_millis(config.poll_interval_ms),
    );
    control.run()
}

fn render_to_file(
    font: &TtfFont,
    text: &str,
    options: &SlipOptions,
    path: &Path,
    format: Format,
) -> Result<FortuneAsset, FortunaError> {
    let slip = render_slip(font, text, options)?;
    let asset = FortuneAsset::from_bitmap(slip.bitmap)?;
    let file = AssetFile::from(&asset);

    let contents = match format {
        Format::Json => file.to_json()?,
        Format::Rust => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("fortune_slip");
            file.to_rust_source(name)
        }
    };
    fs::write(path, contents)?;
    Ok(asset)
}
