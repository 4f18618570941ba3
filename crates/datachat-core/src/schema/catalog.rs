//! Static retail catalog the assistant answers questions about. The
//! classifier does not consult it today; it exists for the schema sidebar
//! and as the metadata a production classifier would reason over.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub column_type: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub primary_key: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub name: &'static str,
    pub tables: usize,
    pub records: u64,
    pub last_updated: &'static str,
}

fn col(name: &'static str, column_type: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        column_type,
        primary_key: false,
        nullable: false,
        references: None,
    }
}

fn pk(name: &'static str, column_type: &'static str) -> ColumnDef {
    ColumnDef {
        primary_key: true,
        ..col(name, column_type)
    }
}

fn fk(name: &'static str, column_type: &'static str, references: &'static str) -> ColumnDef {
    ColumnDef {
        references: Some(references),
        ..col(name, column_type)
    }
}

pub fn retail_catalog() -> Vec<TableDef> {
    vec![
        TableDef {
            name: "products",
            columns: vec![
                pk("id", "INTEGER"),
                col("name", "TEXT"),
                col("description", "TEXT"),
                col("price", "REAL"),
                fk("category_id", "INTEGER", "product_categories.id"),
                col("created_at", "DATETIME"),
            ],
        },
        TableDef {
            name: "product_categories",
            columns: vec![
                pk("id", "INTEGER"),
                col("name", "TEXT"),
                ColumnDef {
                    nullable: true,
                    ..col("parent_category_id", "INTEGER")
                },
            ],
        },
        TableDef {
            name: "customers",
            columns: vec![
                pk("id", "INTEGER"),
                col("first_name", "TEXT"),
                col("last_name", "TEXT"),
                col("email", "TEXT"),
                col("acquisition_channel", "TEXT"),
                col("created_at", "DATETIME"),
                fk("region_id", "INTEGER", "regions.id"),
            ],
        },
        TableDef {
            name: "regions",
            columns: vec![pk("id", "INTEGER"), col("name", "TEXT"), col("country", "TEXT")],
        },
        TableDef {
            name: "orders",
            columns: vec![
                pk("id", "INTEGER"),
                fk("customer_id", "INTEGER", "customers.id"),
                col("order_date", "DATETIME"),
                col("status", "TEXT"),
                col("total_amount", "REAL"),
            ],
        },
        TableDef {
            name: "order_items",
            columns: vec![
                pk("id", "INTEGER"),
                fk("order_id", "INTEGER", "orders.id"),
                fk("product_id", "INTEGER", "products.id"),
                col("quantity", "INTEGER"),
                col("price", "REAL"),
            ],
        },
        TableDef {
            name: "returns",
            columns: vec![
                pk("id", "INTEGER"),
                fk("order_item_id", "INTEGER", "order_items.id"),
                col("return_date", "DATETIME"),
                col("reason", "TEXT"),
            ],
        },
    ]
}

pub fn catalog_info() -> CatalogInfo {
    CatalogInfo {
        name: "Sample Retail Database",
        tables: retail_catalog().len(),
        records: 1250,
        last_updated: "2025-05-01T12:00:00Z",
    }
}
