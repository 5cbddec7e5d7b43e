//! Instance Directory Server Binary

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use instance_directory::{routes, AppState, Cli, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env().with_cli(Cli::parse());

    initialize_tracing(&config.log_level);

    info!("Starting instance directory v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    info!(
        "Directory configuration - Tests: {}, API list: {}, Frontends: {}, Official domain: {}",
        config.tests_path.display(),
        config.api_path.display(),
        config.frontends_path.display(),
        config.official_domain
    );

    let bind = (config.bind_address.clone(), config.port);
    let state = web::Data::new(AppState::new(config));

    info!("Server is live at http://{}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::NormalizePath::trim())
            .configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}

/// Initialize structured logging
fn initialize_tracing(fallback_level: &str) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
