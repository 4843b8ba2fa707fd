use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tenant row. Owned and mutated by the tenant subsystem; this crate only
/// reads it to attach to rental property responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub tenant_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}
