// src/cli/mod.rs
use clap::Parser;

pub mod menu;
pub mod render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Classify a password and exit instead of running the interactive field
    #[arg(long, value_name = "PASSWORD")]
    pub classify: Option<String>,

    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Start with the text visible instead of masked
    #[arg(long)]
    pub show_text: bool,

    /// Log filter
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
