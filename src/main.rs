// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Load config, prompt for a search, run the pipeline and report

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use config::Config;
use dotenv::dotenv;
use services::{PlacesPipeline, ReqwestTransport};
use std::io;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    // A bad configuration ends the run, not the process status
    if let Err(e) = config.check() {
        eprintln!("{}", e);
        return Ok(());
    }

    // 4. Ask the operator what to look for
    let request = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match handlers::prompt_search_request(&mut input, &mut output) {
            Some(request) => request,
            None => return Ok(()),
        }
    };

    // 5. Run and report
    let transport = match ReqwestTransport::new(config.request_timeout()) {
        Ok(transport) => Arc::new(transport),
        Err(e) => {
            log::error!("{}", e);
            return Ok(());
        }
    };
    let pipeline = PlacesPipeline::new(&config, transport);
    let stats = pipeline.run(&request.keyword, &request.city).await;

    handlers::print_summary(&stats);
    Ok(())
}
