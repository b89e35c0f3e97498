use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;

use errpipe_api::app::{create_app, AppState};
use errpipe_api::config::Config;
use errpipe_shared::{LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    init_logging(&config.logging);

    info!("Starting Errpipe API Server ({})", config.environment);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(AppState::in_memory(config.token.clone()));
    let error_config = config.errors.clone();
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), error_config.clone(), max_payload_size)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}

/// Initialize env_logger; `RUST_LOG` takes precedence over the configured level
fn init_logging(logging: &LoggingConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()));

    if logging.timestamp {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None);
    }
    builder.format_module_path(logging.source_location);
    if logging.format == LogFormat::Compact {
        builder.format_target(false);
    }

    builder.init();
}
