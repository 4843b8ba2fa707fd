// handlers/rental_property/create.rs - POST /api/rental-properties handler

use axum::response::Json;
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::database::models::RentalProperty;
use crate::error::ApiError;
use crate::services::rental_property_service::RentalPropertyService;

/// Create a new rental property. The store assigns the id; the response
/// carries only an acknowledgment.
pub async fn rental_property_create(Json(payload): Json<Value>) -> Result<Json<Value>, ApiError> {
    // Decode explicitly so a null body gets the contract message, not a
    // framework rejection
    let property: RentalProperty = serde_json::from_value(payload)
        .map_err(|_| ApiError::bad_request("Rental property details are missing."))?;

    let pool = DatabaseManager::pool().await?;
    RentalPropertyService::create(&pool, &property).await?;

    Ok(Json(json!({ "success": true, "message": "Rental property added successfully!" })))
}
