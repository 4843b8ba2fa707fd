// handlers/rental_property/list.rs - GET /api/rental-properties handler

use axum::response::Json;
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::services::rental_property_service::RentalPropertyService;

/// List all rental properties, each with its tenant attached (null when
/// vacant or when the referenced tenant does not exist).
pub async fn rental_property_list() -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let properties = RentalPropertyService::list_all(&pool).await?;

    Ok(Json(json!({ "success": true, "data": properties })))
}
