//! HTTP routes for the indicator gateway.

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State, rejection::PathRejection},
    response::IntoResponse,
    routing::get,
};
use macrodata_core::{ASEAN_COUNTRIES, IndicatorSummary, NormalizedResult, RawParams, catalog};
use serde_json::json;
use tracing::debug;

use super::error::GatewayError;
use crate::server::AppState;

/// Routes served under `/api`. Unknown indicators and paths fall through to a 404
/// envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/indicators",
            get(list_indicators).fallback(not_found_handler),
        )
        .route(
            "/api/countries",
            get(list_countries).fallback(not_found_handler),
        )
        .route(
            "/api/{indicator}",
            get(indicator_handler).fallback(not_found_handler),
        )
}

/// `GET /api/{indicator}`: one data-driven handler for every catalog entry.
pub async fn indicator_handler(
    State(state): State<AppState>,
    indicator: Result<Path<String>, PathRejection>,
    RawQuery(query): RawQuery,
) -> Result<Json<NormalizedResult>, GatewayError> {
    // A segment that does not decode (e.g. invalid UTF-8) cannot name a catalog entry.
    let Path(indicator) = indicator.map_err(|rejection| {
        debug!(%rejection, "Undecodable indicator segment");
        GatewayError::NotFound
    })?;
    let params = parse_params(query.as_deref());
    debug!(indicator = %indicator, ?params, "Indicator request");
    let result = state.gateway.fetch_indicator(&indicator, &params).await?;
    Ok(Json(result))
}

pub async fn list_indicators() -> impl IntoResponse {
    let data: Vec<IndicatorSummary> = catalog::all().iter().map(IndicatorSummary::from).collect();
    Json(json!({ "data": data }))
}

pub async fn list_countries() -> impl IntoResponse {
    Json(json!({ "data": ASEAN_COUNTRIES }))
}

/// Fallback for any unmatched route or method.
pub async fn not_found_handler() -> GatewayError {
    GatewayError::NotFound
}

fn parse_params(query: Option<&str>) -> RawParams {
    let pairs = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes());
    RawParams::from_pairs(pairs)
}
