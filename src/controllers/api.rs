use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::errors::{DirectoryError, Result};
use crate::services::snapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WorkingQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// Health-check results exactly as the checker wrote them, with their update time
pub async fn tests(data: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Request for raw test results");
    let stamped = snapshot::read_stamped::<serde_json::Value>(&data.config.tests_path)
        .await
        .inspect_err(|e| error!("Error reading {}: {}", data.config.tests_path.display(), e))?;

    Ok(HttpResponse::Ok().json(stamped))
}

// Working API or frontend lists, selected by `?type=`
pub async fn working(
    data: web::Data<AppState>,
    query: web::Query<WorkingQuery>,
) -> Result<HttpResponse> {
    let kind = query.kind.as_deref().unwrap_or("api");
    info!("Request for working list: {}", kind);

    let path = match kind {
        "api" => &data.config.api_path,
        "frontends" => &data.config.frontends_path,
        _ => {
            return Err(DirectoryError::InvalidQuery(
                "Invalid type parameter. Must be \"api\" or \"frontends\".".to_string(),
            ));
        }
    };

    match snapshot::read_stamped::<serde_json::Value>(path).await {
        Ok(stamped) => Ok(HttpResponse::Ok().json(stamped)),
        Err(e) => {
            error!("Error reading {}: {}", path.display(), e);
            Ok(HttpResponse::InternalServerError()
                .json(json!({ "error": format!("Failed to read file for type: {}", kind) })))
        }
    }
}

// The working API list exactly as written on disk
pub async fn api_json(data: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Request for api.json");
    let body = snapshot::read_raw(&data.config.api_path).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/json; charset=utf-8")
        .body(body))
}
