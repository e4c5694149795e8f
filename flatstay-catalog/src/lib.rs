pub mod property;
pub mod seed;

pub use property::{Apartment, Catalog, CatalogError, Flat, FlatType};
pub use seed::seed_catalog;
