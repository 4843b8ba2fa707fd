use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::tenant::Tenant;

/// A rental property row. The same shape is used for request bodies: omitted
/// fields deserialize to their zero values, which the full-replace update
/// then writes back wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalProperty {
    /// Assigned by the store on insert; ignored on create requests.
    pub id: i32,
    pub property_name: String,
    pub property_address: String,
    pub description: Option<String>,
    pub square_footage: f64,
    pub is_available: bool,
    pub rental_price: f64,
    pub deposit: f64,
    pub aconto: f64,
    pub pets_allowed: bool,
    pub room_size: f64,
    pub date_available: NaiveDate,
    /// References a tenant by convention only; a dangling id resolves to a
    /// null tenant at read time.
    pub tenant_id: Option<i32>,
}

/// Read model for list/show responses: every property field at the top level
/// plus the joined tenant (null when unassigned or dangling).
#[derive(Debug, Clone, Serialize)]
pub struct RentalPropertyWithTenant {
    #[serde(flatten)]
    pub property: RentalProperty,
    pub tenant: Option<Tenant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_field_names() {
        let property = RentalProperty {
            id: 7,
            property_name: "Harbor View".to_string(),
            property_address: "1 Dock St".to_string(),
            rental_price: 1250.0,
            tenant_id: Some(3),
            ..Default::default()
        };

        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["propertyName"], "Harbor View");
        assert_eq!(value["propertyAddress"], "1 Dock St");
        assert_eq!(value["rentalPrice"], 1250.0);
        assert_eq!(value["tenantId"], 3);
        assert_eq!(value["dateAvailable"], "1970-01-01");
    }

    #[test]
    fn omitted_fields_deserialize_to_defaults() {
        let body = json!({
            "propertyName": "Harbor View",
            "propertyAddress": "1 Dock St",
            "rentalPrice": 1250.0
        });

        let property: RentalProperty = serde_json::from_value(body).unwrap();
        assert_eq!(property.id, 0);
        assert_eq!(property.description, None);
        assert_eq!(property.square_footage, 0.0);
        assert!(!property.is_available);
        assert_eq!(property.deposit, 0.0);
        assert_eq!(property.aconto, 0.0);
        assert!(!property.pets_allowed);
        assert_eq!(property.date_available, NaiveDate::default());
        assert_eq!(property.tenant_id, None);
    }

    #[test]
    fn composite_flattens_property_and_carries_null_tenant() {
        let composite = RentalPropertyWithTenant {
            property: RentalProperty {
                id: 1,
                property_name: "Harbor View".to_string(),
                ..Default::default()
            },
            tenant: None,
        };

        let value = serde_json::to_value(&composite).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["propertyName"], "Harbor View");
        assert!(value["tenant"].is_null());
    }
}
