pub mod rental_property_service;
pub mod tenant_service;

pub use rental_property_service::{RentalPropertyError, RentalPropertyService};
pub use tenant_service::TenantService;
