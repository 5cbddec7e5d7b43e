use actix_web::{web, HttpResponse};
use tracing::{error, info};

use crate::errors::Result;
use crate::models::instance::Snapshot;
use crate::services::{aggregator, catalog, detail, snapshot};
use crate::state::AppState;

async fn current_snapshot(data: &AppState) -> Result<Snapshot> {
    snapshot::load_snapshot(&data.config.tests_path)
        .await
        .inspect_err(|e| {
            error!("Error reading {}: {}", data.config.tests_path.display(), e);
        })
}

// Official and community instances with scores
pub async fn overview(data: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Request for instance overview");
    let snapshot = current_snapshot(&data).await?;
    let view = aggregator::overview(data.official_domain(), &snapshot);
    info!(
        "Returning {} official and {} community instances",
        view.official.len(),
        view.community.len()
    );

    Ok(HttpResponse::Ok().json(view))
}

// Detail page for one instance, addressed by its fingerprint
pub async fn instance_detail(
    data: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    info!("Request for instance: {}", id);
    let snapshot = current_snapshot(&data).await?;
    let view = detail::detail(data.official_domain(), &snapshot, &id);

    if view.not_found {
        info!("Instance not found: {}", id);
        return Ok(HttpResponse::NotFound().json(view));
    }

    Ok(HttpResponse::Ok().json(view))
}

// Known checks plus the raw instance list
pub async fn service_catalog(data: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Request for service catalog");
    let snapshot = current_snapshot(&data).await?;
    let view = catalog::catalog(&snapshot);
    info!("Returning {} services", view.services.len());

    Ok(HttpResponse::Ok().json(view))
}

// Every instance's result for one check
pub async fn service_detail(
    data: web::Data<AppState>,
    key: web::Path<String>,
) -> Result<HttpResponse> {
    let key = key.into_inner();
    info!("Request for service: {}", key);
    let snapshot = current_snapshot(&data).await?;
    let view = catalog::service_view(data.official_domain(), &snapshot, &key);

    if view.not_found {
        info!("Service not found: {}", key);
        return Ok(HttpResponse::NotFound().json(view));
    }

    Ok(HttpResponse::Ok().json(view))
}
