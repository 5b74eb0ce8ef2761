//! Tally Healthcheck Handler

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Whether `MongoDB` answered a ping
    pub database: bool,

    /// Whether Redis answered a ping
    pub cache: bool,
}

/// Healthcheck handler
///
/// Returns `200` when every backing service is reachable, `503` otherwise.
#[handler]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let report = state.app.health.check().await;

    let status = if report.is_healthy() {
        "ok"
    } else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);

        "degraded"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        database: report.database,
        cache: report.cache,
    }))
}
