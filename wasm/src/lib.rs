//! WebAssembly module for the Počasie browser front-end
//!
//! Exposes the client-side pieces that need no network:
//! - Weather animation selection
//! - Rendering of the city list and detail panel
//! - Input form validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;
pub use shared::view::*;

/// Animation name for a city's readings, or an empty string when no rule matches
#[wasm_bindgen]
pub fn select_weather_animation(mm_zrazky: f64, teplota: f64, sila_vetra: f64) -> String {
    select_animation(mm_zrazky, teplota, sila_vetra)
        .map(|animation| animation.name().to_string())
        .unwrap_or_default()
}

/// Relative path of the animation file, or an empty string when no rule matches
#[wasm_bindgen]
pub fn animation_asset_path(mm_zrazky: f64, teplota: f64, sila_vetra: f64) -> String {
    select_animation(mm_zrazky, teplota, sila_vetra)
        .map(|animation| animation.asset_path(ANIMATIONS_DIR))
        .unwrap_or_default()
}

/// Markup for the `/mesta` response body
#[wasm_bindgen]
pub fn render_city_list_html(cities_json: &str) -> Result<String, JsValue> {
    city_list_html(cities_json).map_err(|e| JsValue::from_str(&e))
}

/// Markup for the `/mesto/{id}` response body
#[wasm_bindgen]
pub fn render_city_detail_html(city_json: &str) -> Result<String, JsValue> {
    city_detail_html(city_json).map_err(|e| JsValue::from_str(&e))
}

/// Whether the form may be submitted as a new city
#[wasm_bindgen]
pub fn validate_city_form(name: &str, wind: &str, rain: &str, temp: &str) -> bool {
    CityForm::new(name, wind, rain, temp).to_new_city().is_ok()
}

/// Whether the numeric fields may be submitted as an update
#[wasm_bindgen]
pub fn validate_city_readings(wind: &str, rain: &str, temp: &str) -> bool {
    CityForm::new("", wind, rain, temp).to_readings().is_ok()
}

fn city_list_html(cities_json: &str) -> Result<String, String> {
    let cities: Vec<CitySummary> = serde_json::from_str(cities_json)
        .map_err(|e| format!("Invalid cities JSON: {}", e))?;
    Ok(render_city_list(&cities).to_html())
}

fn city_detail_html(city_json: &str) -> Result<String, String> {
    let city: City =
        serde_json::from_str(city_json).map_err(|e| format!("Invalid city JSON: {}", e))?;
    Ok(render_city_detail(&city).to_html())
}
