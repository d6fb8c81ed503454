//! HTTP handlers for city endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{City, CityId, CityReadings};

use crate::error::AppResult;
use crate::services::city::{CityService, CreateCityInput};
use crate::AppState;

/// List all cities
pub async fn list_cities(State(state): State<AppState>) -> AppResult<Json<Vec<City>>> {
    let service = CityService::new(state.db);
    let cities = service.list_cities().await?;
    Ok(Json(cities))
}

/// Get a city by ID
pub async fn get_city(
    State(state): State<AppState>,
    Path(city_id): Path<CityId>,
) -> AppResult<Json<City>> {
    let service = CityService::new(state.db);
    let city = service.get_city(city_id).await?;
    Ok(Json(city))
}

/// Create a city
pub async fn create_city(
    State(state): State<AppState>,
    Json(input): Json<CreateCityInput>,
) -> AppResult<(StatusCode, Json<City>)> {
    let service = CityService::new(state.db);
    let city = service.create_city(input).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

/// Update a city's weather readings
pub async fn update_city(
    State(state): State<AppState>,
    Path(city_id): Path<CityId>,
    Json(readings): Json<CityReadings>,
) -> AppResult<Json<City>> {
    let service = CityService::new(state.db);
    let city = service.update_readings(city_id, readings).await?;
    Ok(Json(city))
}

/// Delete a city
pub async fn delete_city(
    State(state): State<AppState>,
    Path(city_id): Path<CityId>,
) -> AppResult<Json<City>> {
    let service = CityService::new(state.db);
    let city = service.delete_city(city_id).await?;
    Ok(Json(city))
}
