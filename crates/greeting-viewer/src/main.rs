//! Entry point for the birthday greeting page.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use greeting_deck::ViewerConfig;
use tracing_subscriber::EnvFilter;

use greeting_viewer::components::App;
use greeting_viewer::STYLES_CSS;

/// Resolved configuration handed to the root component.
static CONFIG: OnceLock<ViewerConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "birthday-greeting")]
#[command(about = "Birthday greeting cards with music")]
struct Args {
    /// JSON config file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the card pictures and tracks
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Do not try to start the music when the page opens
    #[arg(long)]
    no_autoplay: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = match args.config.as_deref() {
        Some(path) => match ViewerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(2);
            }
        },
        None => ViewerConfig::default(),
    };
    if let Some(assets) = args.assets {
        config.asset_dir = assets;
    }
    if args.no_autoplay {
        config.autoplay = false;
    }

    tracing::info!(
        assets = %config.asset_dir.display(),
        autoplay = config.autoplay,
        "Starting birthday greeting"
    );

    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height));

    CONFIG.set(config).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(RootApp);
}

#[component]
fn RootApp() -> Element {
    let config = CONFIG.get().cloned().unwrap_or_default();
    rsx! {
        App { config }
    }
}
