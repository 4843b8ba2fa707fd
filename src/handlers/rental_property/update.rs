// handlers/rental_property/update.rs - PUT /api/rental-properties handler

use axum::response::Json;
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::database::models::RentalProperty;
use crate::error::ApiError;
use crate::services::rental_property_service::RentalPropertyService;

/// Replace an existing rental property wholesale. Fields omitted from the
/// body are written as their zero values; this is not a merge.
pub async fn rental_property_update(Json(payload): Json<Value>) -> Result<Json<Value>, ApiError> {
    let property: RentalProperty = serde_json::from_value(payload)
        .map_err(|_| ApiError::bad_request("Rental property details are missing."))?;

    let pool = DatabaseManager::pool().await?;
    RentalPropertyService::update(&pool, &property).await?;

    Ok(Json(json!({ "success": true, "message": "Rental property updated successfully!" })))
}
