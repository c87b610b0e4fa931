use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use artchat::core::config;
use artchat::tui;

#[derive(Parser)]
#[command(name = "artchat", about = "Terminal chat client for conjuring ascii art from an LLM")]
struct Args {
    /// Completion model to use
    #[arg(short, long)]
    model: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger - stdout belongs to the terminal UI (and the final quit line)
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("artchat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.model.as_deref());
    log::info!("artchat starting up (model: {})", resolved.model);

    tui::run(&resolved)
}
