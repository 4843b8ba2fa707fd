// handlers/rental_property/show.rs - GET /api/rental-properties/:id handler

use axum::extract::Path;
use axum::response::Json;
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;
use crate::error::ApiError;
use crate::services::rental_property_service::RentalPropertyService;

/// Fetch a single rental property by id with its tenant attached
pub async fn rental_property_show(Path(id): Path<i32>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let property = RentalPropertyService::get_by_id(&pool, id).await?;

    Ok(Json(json!({ "success": true, "data": property })))
}
