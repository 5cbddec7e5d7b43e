//! Instance Directory Library
//!
//! Reads precomputed health-check results for service instances and serves
//! scored official/community overviews, per-instance detail and a catalog of
//! known checks.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;

use actix_web::web;

pub use config::{Cli, Config};
pub use errors::{DirectoryError, Result};
pub use models::instance::{Instance, ServiceResult, Snapshot};
pub use services::fingerprint::fingerprint;
pub use services::official::is_official;
pub use state::AppState;

/// Register every route on an actix app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(controllers::views::overview))
        .route("/instance/{id}", web::get().to(controllers::views::instance_detail))
        .route("/service", web::get().to(controllers::views::service_catalog))
        .route("/service/{key}", web::get().to(controllers::views::service_detail))
        .route("/api/tests", web::get().to(controllers::api::tests))
        .route("/api/working", web::get().to(controllers::api::working))
        .route("/api.json", web::get().to(controllers::api::api_json))
        .route("/health", web::get().to(services::health::health_check));
}
