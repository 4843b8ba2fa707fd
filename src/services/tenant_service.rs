use std::collections::HashMap;

use sqlx::PgPool;

use crate::database::models::Tenant;

/// Read-only lookups into the tenant table. The tenant subsystem owns these
/// rows; rental property responses only attach them.
pub struct TenantService;

impl TenantService {
    /// Point lookup by tenant id
    pub async fn get_by_id(pool: &PgPool, tenant_id: i32) -> Result<Option<Tenant>, sqlx::Error> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// Batched lookup keyed by the id set, one query for any number of ids
    pub async fn get_by_ids(
        pool: &PgPool,
        tenant_ids: &[i32],
    ) -> Result<HashMap<i32, Tenant>, sqlx::Error> {
        if tenant_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let tenants =
            sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE tenant_id = ANY($1)")
                .bind(tenant_ids)
                .fetch_all(pool)
                .await?;

        Ok(tenants.into_iter().map(|t| (t.tenant_id, t)).collect())
    }
}
