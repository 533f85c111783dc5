use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::views::{PlantPayload, PlantView};
use crate::AppState;

fn scoped_plant_not_found(portfolio_id: Uuid, plant_id: Uuid) -> ApiError {
    ApiError::not_found(format!(
        "Plant with plantId '{plant_id}' and portfolioId '{portfolio_id}' was not found"
    ))
}

async fn require_portfolio(app_state: &AppState, portfolio_id: Uuid) -> Result<(), ApiError> {
    match app_state.portfolios.get_portfolio(portfolio_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found(format!(
            "Portfolio with portfolioId '{portfolio_id}' was not found"
        ))),
    }
}

// GET /api/portfolios/{portfolio_id}/plants
pub async fn handle_list_plants(
    State(app_state): State<AppState>,
    Path(portfolio_id): Path<Uuid>,
) -> Result<Json<Vec<PlantView>>, ApiError> {
    require_portfolio(&app_state, portfolio_id).await?;
    let plants = app_state
        .plants
        .list_plants_by_portfolio(portfolio_id)
        .await?;
    Ok(Json(plants.into_iter().map(PlantView::from).collect()))
}

// POST /api/portfolios/{portfolio_id}/plants
pub async fn handle_create_plant(
    State(app_state): State<AppState>,
    Path(portfolio_id): Path<Uuid>,
    payload: Result<Json<PlantPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<PlantView>), ApiError> {
    let Json(payload) = payload?;
    require_portfolio(&app_state, portfolio_id).await?;

    let plant = payload.into_plant(portfolio_id)?;
    let created = app_state.plants.add_plant(plant).await?;
    info!("Plant {} created in portfolio {}", created.id, portfolio_id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

// GET /api/portfolios/{portfolio_id}/plants/{plant_id}
pub async fn handle_get_plant(
    State(app_state): State<AppState>,
    Path((portfolio_id, plant_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<PlantView>, ApiError> {
    let plant = app_state
        .plants
        .get_plant_for_portfolio(portfolio_id, plant_id)
        .await?
        .ok_or_else(|| scoped_plant_not_found(portfolio_id, plant_id))?;
    Ok(Json(plant.into()))
}

// DELETE /api/portfolios/{portfolio_id}/plants/{plant_id}
pub async fn handle_delete_plant(
    State(app_state): State<AppState>,
    Path((portfolio_id, plant_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    if app_state
        .plants
        .get_plant_for_portfolio(portfolio_id, plant_id)
        .await?
        .is_none()
    {
        return Err(scoped_plant_not_found(portfolio_id, plant_id));
    }

    app_state.plants.delete_plant(plant_id).await?;
    info!("Plant {} deleted from portfolio {}", plant_id, portfolio_id);
    Ok(StatusCode::NO_CONTENT)
}
