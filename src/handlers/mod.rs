pub mod rental_property;

pub use rental_property::*;
