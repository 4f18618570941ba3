pub mod catalog;

pub use self::catalog::{catalog_info, retail_catalog, CatalogInfo, ColumnDef, TableDef};
