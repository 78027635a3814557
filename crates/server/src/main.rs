use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use brew_core::{
    clamp_to_slider, grid_template_columns, layout_weights, plan_pours, update_quantity,
    BrewCalculator,
};
use shared::{
    domain::{Concentration, Flavor, PourPlan, QuantityEdit, QuantityTuple},
    error::{ApiError, CalcError, ErrorCode},
    protocol::{
        BrewRequest, BrewSummary, LayoutRequest, LayoutResponse, OptionsResponse, PlanRequest,
        QuantityRequest,
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

type ApiFailure = (StatusCode, Json<ApiError>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, issues) = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();
    for issue in &issues {
        warn!(%issue, "configuration");
    }

    let app = build_router(Arc::new(AppState::from(&settings)));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(
        %addr,
        flavor = %settings.default_preferences.flavor,
        concentration = %settings.default_preferences.concentration,
        roast = %settings.default_roast,
        "server listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/options", get(options))
        .route("/quantities", post(http_update_quantity))
        .route("/pours", post(http_plan_pours))
        .route("/layout", post(http_layout_weights))
        .route("/brew", post(http_brew))
        .with_state(state)
}

fn reject(error: CalcError) -> ApiFailure {
    (StatusCode::BAD_REQUEST, Json(ApiError::from(error)))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse::catalogue())
}

async fn http_update_quantity(
    Json(req): Json<QuantityRequest>,
) -> Result<Json<QuantityTuple>, ApiFailure> {
    let edit = QuantityEdit::parse(&req.field, req.value).map_err(reject)?;
    Ok(Json(update_quantity(clamp_to_slider(edit))))
}

async fn http_plan_pours(Json(req): Json<PlanRequest>) -> Result<Json<PourPlan>, ApiFailure> {
    if !req.water_grams.is_finite() || req.water_grams <= 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                ErrorCode::Validation,
                "water_grams must be a positive number",
            )),
        ));
    }
    let flavor: Flavor = req.flavor.parse().map_err(reject)?;
    let concentration: Concentration = req.concentration.parse().map_err(reject)?;
    Ok(Json(plan_pours(req.water_grams, flavor, concentration)))
}

async fn http_layout_weights(
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, ApiFailure> {
    let weights = layout_weights(&req.plan, req.water_grams).map_err(reject)?;
    Ok(Json(LayoutResponse {
        grid_template_columns: grid_template_columns(&weights),
        weights,
    }))
}

async fn http_brew(
    State(state): State<Arc<AppState>>,
    Json(mut req): Json<BrewRequest>,
) -> Result<Json<BrewSummary>, ApiFailure> {
    let edit = req
        .edit
        .take()
        .map(|edit| QuantityEdit::parse(&edit.field, edit.value))
        .transpose()
        .map_err(reject)?;

    let mut calculator =
        BrewCalculator::from_request(&req, state.default_preferences, state.default_roast)
            .map_err(reject)?;
    if let Some(edit) = edit {
        calculator.apply_edit(clamp_to_slider(edit));
    }

    calculator.summary().map(Json).map_err(reject)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
