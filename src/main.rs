//! CS2KZ Mapping Tools launcher.
//!
//! Usage:
//!   cs2-tools                               # Open the launcher
//!   cs2-tools --open point_worldtext        # Open straight into a dialog
//!   cs2-tools --addons-dir D:\cs2\content\csgo_addons --theme dracula

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cs2_mapping_tools::addons::default_addons_path;
use cs2_mapping_tools::iced_app::Tool;
use cs2_mapping_tools::theme::theme_colors;
use cs2_mapping_tools::{run_launcher, LaunchOptions};

#[derive(Parser)]
#[command(name = "cs2-tools")]
#[command(about = "Counter-Strike 2 mapping utilities")]
struct Cli {
    /// Settings file (defaults to the shared file in the temp directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// CS2 addon content directory
    #[arg(long, default_value_os_t = default_addons_path())]
    addons_dir: PathBuf,

    /// Theme for this session (grey, black, white, dracula, ...)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<String>,

    /// Open a tool dialog at startup
    #[arg(long, value_parser = parse_tool)]
    open: Option<Tool>,
}

fn parse_theme(s: &str) -> Result<String, String> {
    theme_colors(s)
        .map(|_| s.to_string())
        .ok_or_else(|| format!("unknown theme '{s}'"))
}

fn parse_tool(s: &str) -> Result<Tool, String> {
    Tool::from_key(s).ok_or_else(|| format!("unknown tool '{s}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run_launcher(LaunchOptions {
        settings_path: cli.settings,
        addons_path: cli.addons_dir,
        theme: cli.theme,
        open: cli.open,
    })?;

    Ok(())
}
