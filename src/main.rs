#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod content;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lions_core::MapConfig;

/// Global map configuration, resolved once from CLI args and environment
static MAP_CONFIG: OnceLock<MapConfig> = OnceLock::new();

/// Get the resolved map configuration.
pub fn map_config() -> MapConfig {
    MAP_CONFIG.get().cloned().unwrap_or_else(MapConfig::from_env)
}

/// Dancing with Lions - data journalism atlas of North Africa
#[derive(Parser, Debug)]
#[command(name = "lions-desktop")]
#[command(about = "Dancing with Lions - stories of North African history, culture, and wildlife")]
struct Args {
    /// Map provider access token (overrides LIONS_MAP_TOKEN / MAPBOX_ACCESS_TOKEN).
    /// Without a token the map views render a placeholder and the stories
    /// remain fully readable.
    #[arg(long)]
    map_token: Option<String>,

    /// Print a story's content store as GeoJSON and exit
    #[arg(long, value_name = "SLUG")]
    export_geojson: Option<String>,

    /// List available story slugs and exit
    #[arg(long)]
    list_stories: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.list_stories {
        for story in content::STORIES {
            println!("{}  {}", story.slug, story.title);
        }
        return;
    }

    if let Some(slug) = args.export_geojson {
        match content::story_by_slug(&slug) {
            Some(story) => {
                let collection = lions_core::store::to_geojson(story.store);
                match serde_json::to_string_pretty(&collection) {
                    Ok(geojson) => println!("{geojson}"),
                    Err(e) => {
                        eprintln!("Failed to serialize {slug}: {e}");
                        std::process::exit(1);
                    }
                }
            }
            None => {
                eprintln!("Unknown story: {slug}");
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match args.map_token {
        Some(token) => MapConfig::with_token(token),
        None => MapConfig::from_env(),
    };
    tracing::info!(
        "Starting Dancing with Lions (maps {})",
        if config.is_enabled() { "enabled" } else { "disabled" }
    );
    let _ = MAP_CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("Dancing with Lions")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
