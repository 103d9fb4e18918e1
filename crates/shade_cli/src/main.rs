//! Shade CLI
//!
//! Storefront theme customization from the command line: keep theme
//! settings in a local store, generate and export the stylesheet, check
//! hand-edited CSS, render a simulated storefront and live-sync a CSS file.

mod commands;
mod config;
mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shade_preview::{ContentOverrides, PreviewPage, Viewport};

use crate::commands::{PreviewRequest, Session};
use crate::config::ShadeConfig;

/// Storefront theme CSS generator and live editor
#[derive(Parser, Debug)]
#[command(name = "shade")]
#[command(about = "Generate, check, preview and live-sync storefront theme CSS")]
#[command(version)]
struct Cli {
    /// Config file, or directory containing shade.toml
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    /// Settings store file (overrides [store] path)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the stylesheet generated from the current settings
    Generate {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a CSS file and report diagnostics
    Check {
        /// CSS file to check
        file: PathBuf,

        /// Merge the parsed values into the stored settings when clean
        #[arg(long)]
        apply: bool,
    },

    /// List theme presets
    Presets,

    /// List the offered fonts
    Fonts,

    /// Apply a theme preset's colours
    Apply {
        /// Preset key, e.g. neonNights
        preset: String,
    },

    /// Set one settings field
    Set {
        /// Field name: custom property (border-radius) or key (borderRadius)
        field: String,
        /// New value, e.g. "#ff0000" or 12px
        value: String,
    },

    /// Print the stored settings as JSON
    Show,

    /// Print the effective configuration as TOML
    Config,

    /// Restore the default settings
    Reset,

    /// Write the stylesheet into a directory
    Export {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// File name (overrides [export] filename)
        #[arg(short, long)]
        filename: Option<String>,
    },

    /// Render the simulated storefront as HTML
    Preview {
        /// desktop, tablet or mobile
        #[arg(long)]
        viewport: Option<Viewport>,

        /// home, product, collection or blog
        #[arg(long)]
        page: Option<PreviewPage>,

        /// Store name shown in the header
        #[arg(long)]
        store_name: Option<String>,

        /// Hero headline on the home page
        #[arg(long)]
        hero_title: Option<String>,

        /// Image URL of the first featured product
        #[arg(long)]
        product_image: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List component templates, or export one as HTML + CSS
    Template {
        /// Template key, e.g. productCard
        key: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Also write a standalone preview page
        #[arg(long)]
        preview: bool,
    },

    /// Live-sync a CSS file with the stored settings
    Watch {
        /// CSS file to watch; created from the current settings if missing
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "shade=debug" } else { "shade=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ShadeConfig::load_from_dir(&cli.config)?;
    debug!(?config, "Resolved configuration");
    let session = Session::new(config, cli.store);
    let colored = !cli.no_color && io::stdout().is_terminal();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate { output } => commands::generate_css(&session, output.as_deref(), &mut out)?,
        Commands::Check { file, apply } => {
            if !commands::check(&session, &file, apply, colored, &mut out)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Presets => commands::list_presets(&session, &mut out)?,
        Commands::Fonts => commands::list_fonts(&mut out)?,
        Commands::Apply { preset } => commands::apply_preset(&session, &preset, &mut out)?,
        Commands::Set { field, value } => commands::set_field(&session, &field, &value, &mut out)?,
        Commands::Show => commands::show(&session, &mut out)?,
        Commands::Config => write!(out, "{}", session.config.to_toml()?)?,
        Commands::Reset => commands::reset(&session, &mut out)?,
        Commands::Export { dir, filename } => {
            commands::export(&session, &dir, filename.as_deref(), &mut out)?;
        }
        Commands::Preview {
            viewport,
            page,
            store_name,
            hero_title,
            product_image,
            output,
        } => {
            let request = PreviewRequest {
                viewport,
                page,
                content: ContentOverrides {
                    store_name,
                    hero_title,
                    product_image,
                    hero_background: None,
                },
                out_path: output,
            };
            commands::preview(&session, request, &mut out)?;
        }
        Commands::Template { key, dir, preview } => {
            commands::template(key.as_deref(), &dir, preview, &mut out)?;
        }
        Commands::Watch { file } => {
            drop(out);
            watch::run(&session, &file, colored)?;
            return Ok(ExitCode::SUCCESS);
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
