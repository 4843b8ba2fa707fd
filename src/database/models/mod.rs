pub mod rental_property;
pub mod tenant;

pub use rental_property::{RentalProperty, RentalPropertyWithTenant};
pub use tenant::Tenant;
