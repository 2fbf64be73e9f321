// src/main.rs
use std::path::Path;

use clap::Parser;

use passfield::cli::{self, Args};
use passfield::strength;
use passfield::style::StyleConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .format_timestamp_secs()
        .init();

    let config = StyleConfig::default();

    // One-shot classification mode
    if let Some(password) = args.classify {
        let category = strength::classify(&password);
        if args.json {
            let out = serde_json::json!({
                "password": password,
                "strength": category,
                "label": category.description(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{}", cli::render::render_meter(category, &config, None));
        }
        return Ok(());
    }

    log::info!("🔐 Starting passfield interactive demo");
    cli::menu::run_demo(&config, args.show_text)
}
