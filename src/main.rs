use atlas::core::config::{self, AtlasConfig, CliOverrides};
use atlas::core::route::Route;
use atlas::core::theme::Theme;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the countries of the world from the terminal")]
struct Args {
    /// Base URL of the country service
    #[arg(long)]
    base_url: Option<String>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Screen to open at startup, e.g. "/" or "/country/Japan"
    #[arg(short, long, value_parser = parse_route)]
    route: Option<Route>,
}

fn parse_route(raw: &str) -> Result<Route, String> {
    Route::parse(raw).ok_or_else(|| format!("unknown route '{raw}'"))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, load_error) = match config::load_config() {
        Ok(file_config) => (file_config, None),
        Err(e) => (AtlasConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        theme: args.theme,
        route: args.route,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Log to a file; the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = load_error {
        log::warn!("Using default config: {}", e);
    }
    log::info!(
        "Atlas starting up (base_url: {}, theme: {}, route: {})",
        resolved.base_url,
        resolved.theme,
        resolved.start_route
    );

    atlas::tui::run(resolved)
}
