//! Drive a headless carousel through a scripted gesture and print the
//! resulting snapshot as JSON.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glide_core::CarouselMessage;
use glide_runtime::{CarouselDriver, CarouselSettings, SettingsSource};
use tokio::time::{self, Instant};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "glide-sim")]
#[command(about = "Simulate carousel gestures and report the settled state")]
struct Cli {
    /// Settings file (TOML or JSON). Falls back to $GLIDE_CONFIG_PATH,
    /// $GLIDE_CONFIG_JSON and glide.toml in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of items in the track
    #[arg(long, default_value_t = 5)]
    items: usize,

    /// Container width (px)
    #[arg(long, default_value_t = 632.0)]
    container_width: f32,

    /// Print every intermediate snapshot, not only the settled one
    #[arg(long, default_value_t = false)]
    trace_frames: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Drag from one x to another over a duration, then release
    Fling {
        #[arg(long, allow_hyphen_values = true)]
        from: f32,
        #[arg(long, allow_hyphen_values = true)]
        to: f32,
        /// Gesture duration (ms)
        #[arg(long, default_value_t = 64)]
        duration_ms: u64,
    },
    /// Snap to an item, as if its indicator dot was clicked
    Snap { index: usize },
    /// Press the next arrow
    Next,
    /// Press the previous arrow
    Prev,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,glide_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (settings, source) = match &cli.config {
        Some(path) => (
            CarouselSettings::load_from_file(path)?,
            SettingsSource::File(path.clone()),
        ),
        None => CarouselSettings::load_from_env()
            .context("failed to load carousel settings")?,
    };
    match &source {
        SettingsSource::Default => info!("using default carousel settings"),
        SettingsSource::EnvInline => {
            info!("carousel settings loaded from inline environment json")
        }
        SettingsSource::EnvPath(path) | SettingsSource::File(path) => {
            info!(path = %path.display(), "carousel settings loaded from file")
        }
    }

    let driver = CarouselDriver::from_settings(
        &settings,
        cli.container_width,
        cli.items,
    )?;

    if cli.trace_frames {
        let mut rx = driver.subscribe();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                if let Ok(line) = serde_json::to_string(&snapshot) {
                    eprintln!("{line}");
                }
            }
        });
    }

    match cli.command {
        Command::Fling {
            from,
            to,
            duration_ms,
        } => fling(&driver, from, to, duration_ms).await,
        Command::Snap { index } => {
            driver.dispatch(CarouselMessage::SnapTo(index));
        }
        Command::Next => {
            driver.dispatch(CarouselMessage::ScrollNext);
        }
        Command::Prev => {
            driver.dispatch(CarouselMessage::ScrollPrev);
        }
    }

    let settled = driver.wait_until_idle().await;
    driver.shutdown();
    println!(
        "{}",
        serde_json::to_string_pretty(&settled)
            .context("failed to serialise snapshot")?
    );
    Ok(())
}

/// Replay a straight-line drag as pointer samples one frame apart.
async fn fling(
    driver: &CarouselDriver,
    from: f32,
    to: f32,
    duration_ms: u64,
) {
    const SAMPLE_MS: u64 = 16;
    let steps = (duration_ms / SAMPLE_MS).max(1);

    driver.dispatch(CarouselMessage::PointerDown {
        x: from,
        at: Instant::now().into_std(),
    });
    let mut ticker = time::interval(Duration::from_millis(SAMPLE_MS));
    ticker.tick().await;
    for step in 1..=steps {
        let now = ticker.tick().await;
        let x = from + (to - from) * (step as f32 / steps as f32);
        driver.dispatch(CarouselMessage::PointerMove {
            x,
            at: now.into_std(),
        });
    }
    driver.dispatch(CarouselMessage::PointerUp);
}
