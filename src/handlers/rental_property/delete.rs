// handlers/rental_property/delete.rs - DELETE /api/rental-properties/:id handler

use axum::extract::Path;
use axum::response::Json;
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::services::rental_property_service::RentalPropertyService;

/// Remove a rental property by id
pub async fn rental_property_delete(Path(id): Path<i32>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    RentalPropertyService::delete(&pool, id).await?;

    Ok(Json(json!({ "success": true, "message": "Rental property deleted successfully!" })))
}
