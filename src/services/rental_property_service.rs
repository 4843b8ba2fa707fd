use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::database::models::{RentalProperty, RentalPropertyWithTenant};
use crate::services::tenant_service::TenantService;

/// Client-facing messages, kept stable as part of the API contract
const MISSING_DETAILS: &str = "Rental property details are missing.";
const MISSING_ID: &str = "Rental property ID is missing.";
const NOT_FOUND: &str = "Rental property not found.";

#[derive(Debug, Error)]
pub enum RentalPropertyError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// All five rental property operations. Each takes the store handle as an
/// argument; nothing here owns a connection.
pub struct RentalPropertyService;

impl RentalPropertyService {
    /// List every rental property in the store's natural order, each with its
    /// tenant attached. Tenants are fetched in a single batched query keyed
    /// by the set of referenced ids.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<RentalPropertyWithTenant>, RentalPropertyError> {
        let properties = sqlx::query_as::<_, RentalProperty>("SELECT * FROM rental_properties")
            .fetch_all(pool)
            .await?;

        let mut tenant_ids: Vec<i32> = properties.iter().filter_map(|p| p.tenant_id).collect();
        tenant_ids.sort_unstable();
        tenant_ids.dedup();

        let tenants = TenantService::get_by_ids(pool, &tenant_ids).await?;

        Ok(properties
            .into_iter()
            .map(|property| {
                // A dangling tenant_id misses the map and yields a null tenant
                let tenant = property.tenant_id.and_then(|id| tenants.get(&id).cloned());
                RentalPropertyWithTenant { property, tenant }
            })
            .collect())
    }

    /// Fetch one rental property by id with its tenant attached
    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<RentalPropertyWithTenant, RentalPropertyError> {
        let property =
            sqlx::query_as::<_, RentalProperty>("SELECT * FROM rental_properties WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?
                .ok_or_else(|| RentalPropertyError::NotFound(NOT_FOUND.to_string()))?;

        let tenant = match property.tenant_id {
            Some(tenant_id) => TenantService::get_by_id(pool, tenant_id).await?,
            None => None,
        };

        Ok(RentalPropertyWithTenant { property, tenant })
    }

    /// Insert a new rental property; the store assigns the id. The id is not
    /// echoed to the caller, so it is logged here for traceability.
    pub async fn create(pool: &PgPool, property: &RentalProperty) -> Result<(), RentalPropertyError> {
        Self::validate(property)?;

        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO rental_properties \
             (property_name, property_address, description, square_footage, is_available, \
              rental_price, deposit, aconto, pets_allowed, room_size, date_available, tenant_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING id",
        )
        .bind(&property.property_name)
        .bind(&property.property_address)
        .bind(&property.description)
        .bind(property.square_footage)
        .bind(property.is_available)
        .bind(property.rental_price)
        .bind(property.deposit)
        .bind(property.aconto)
        .bind(property.pets_allowed)
        .bind(property.room_size)
        .bind(property.date_available)
        .bind(property.tenant_id)
        .fetch_one(pool)
        .await?;

        info!("Created rental property {} ({})", id, property.property_name);
        Ok(())
    }

    /// Overwrite every mutable field of an existing rental property with the
    /// incoming values. This is a full replace, not a merge.
    pub async fn update(pool: &PgPool, property: &RentalProperty) -> Result<(), RentalPropertyError> {
        if property.id == 0 {
            return Err(RentalPropertyError::InvalidInput(MISSING_DETAILS.to_string()));
        }
        Self::validate(property)?;

        let result = sqlx::query(
            "UPDATE rental_properties SET \
             property_name = $1, property_address = $2, description = $3, square_footage = $4, \
             is_available = $5, rental_price = $6, deposit = $7, aconto = $8, pets_allowed = $9, \
             room_size = $10, date_available = $11, tenant_id = $12 \
             WHERE id = $13",
        )
        .bind(&property.property_name)
        .bind(&property.property_address)
        .bind(&property.description)
        .bind(property.square_footage)
        .bind(property.is_available)
        .bind(property.rental_price)
        .bind(property.deposit)
        .bind(property.aconto)
        .bind(property.pets_allowed)
        .bind(property.room_size)
        .bind(property.date_available)
        .bind(property.tenant_id)
        .bind(property.id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RentalPropertyError::NotFound(NOT_FOUND.to_string()));
        }

        Ok(())
    }

    /// Remove a rental property by id
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), RentalPropertyError> {
        if id == 0 {
            return Err(RentalPropertyError::InvalidInput(MISSING_ID.to_string()));
        }

        let result = sqlx::query("DELETE FROM rental_properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RentalPropertyError::NotFound(NOT_FOUND.to_string()));
        }

        Ok(())
    }

    /// Required-field validation shared by create and update: name and
    /// address must be non-empty, rental price must be non-zero.
    fn validate(property: &RentalProperty) -> Result<(), RentalPropertyError> {
        if property.property_name.is_empty()
            || property.property_address.is_empty()
            || property.rental_price == 0.0
        {
            return Err(RentalPropertyError::InvalidInput(MISSING_DETAILS.to_string()));
        }
        Ok(())
    }
}
