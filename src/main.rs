// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use pinkcam::app::{AppFlags, AppModel};
use pinkcam::backends::camera::CameraBackendType;
use pinkcam::i18n;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "pinkcam")]
#[command(about = "Selfie camera studio with a generated filter library")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Use the built-in test pattern instead of a real camera
    #[arg(long, global = true)]
    virtual_camera: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available cameras
    List,

    /// Print the filter library
    Filters {
        /// Number of procedural presets (default: from settings)
        #[arg(short, long)]
        count: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take a photo
    Photo {
        /// Filter preset name (from 'pinkcam filters')
        #[arg(short, long)]
        filter: Option<String>,

        /// Output file or directory (default: Downloads/pinkcam_TIMESTAMP.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=pinkcam=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let backend_override = cli.virtual_camera.then_some(CameraBackendType::Virtual);

    match cli.command {
        Some(Commands::List) => Ok(cli::list_cameras(backend_or_config(backend_override))?),
        Some(Commands::Filters { count, json }) => Ok(cli::list_filters(count, json)?),
        Some(Commands::Photo { filter, output }) => Ok(cli::take_photo(
            filter,
            output,
            backend_or_config(backend_override),
        )?),
        None => run_gui(backend_override),
    }
}

fn backend_or_config(backend_override: Option<CameraBackendType>) -> CameraBackendType {
    backend_override.unwrap_or_else(|| pinkcam::config::Config::load().1.backend)
}

fn run_gui(backend_override: Option<CameraBackendType>) -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(640.0)
            .min_height(480.0),
    );

    cosmic::app::run::<AppModel>(settings, AppFlags { backend_override })?;

    Ok(())
}
