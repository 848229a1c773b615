use clap::Parser;
use groundcrew::core::config;
use groundcrew::error::AppError;
use groundcrew::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "groundcrew", about = "Terminal front-end for the GroundCrew API")]
struct Args {
    /// Feature to open at startup
    #[arg(short, long)]
    feature: Option<String>,

    /// Base URL prepended to menu targets
    #[arg(long)]
    base_url: Option<String>,

    /// Where to write the debug log
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config();
    let log_path = match &file_config {
        Ok(c) => config::resolve_log_file(c, args.log_file.as_deref()),
        Err(_) => args
            .log_file
            .clone()
            .unwrap_or_else(|| config::DEFAULT_LOG_FILE.to_string()),
    };

    // The TUI owns stdout, so logs go to a file.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("GroundCrew starting up, logging to {}", log_path);

    let resolved = config::resolve(
        &file_config?,
        args.feature.as_deref(),
        args.base_url.as_deref(),
        config::process_env,
    )?;

    if let Err(e) = tui::run(resolved) {
        log::error!("Fatal: {}", e);
        return Err(e);
    }
    Ok(())
}
