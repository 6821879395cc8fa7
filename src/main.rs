mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let _log_guard = startup::init_logging();

    match run().await {
        Ok(()) => {
            info!("Shut down cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    startup::ensure_data_dir()?;

    let config = Arc::new(Config::load()?);
    let db = startup::connect_to_database(&config).await?;

    bot::start::start_bot(config, db).await
}
