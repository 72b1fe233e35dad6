mod catalog;

pub use catalog::{Catalog, CatalogService, get_catalog};
