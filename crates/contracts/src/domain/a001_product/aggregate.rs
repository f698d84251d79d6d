use serde::{Deserialize, Serialize};

use crate::shared::money::deserialize_money;
use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_money")]
    pub price: f64,
    pub stock: i64,
    pub is_active: bool,
    pub created_at: String,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
}

pub const PRODUCT_SCHEMA: FormSchema = FormSchema {
    name: "product",
    rules: &[
        FieldRule::new("name", "Name", FieldKind::Text).required().length(2, 120),
        FieldRule::new("sku", "SKU", FieldKind::Text)
            .required()
            .pattern(r"^[A-Z0-9-]{3,32}$", "SKU uses 3-32 capital letters, digits or dashes"),
        FieldRule::new("category", "Category", FieldKind::Text)
            .required()
            .max_length(60),
        FieldRule::new("description", "Description", FieldKind::TextArea).max_length(2000),
        FieldRule::new("price", "Price", FieldKind::Number).required().min(0.0),
        FieldRule::new("stock", "Stock", FieldKind::Integer).required().min(0.0),
    ],
};

impl FromForm for ProductDraft {
    fn schema() -> &'static FormSchema {
        &PRODUCT_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            sku: fields.text("sku"),
            category: fields.text("category"),
            description: fields.opt_text("description"),
            price: fields.number("price"),
            stock: fields.integer("stock"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("name", self.name.as_str())
            .with("sku", self.sku.as_str())
            .with("category", self.category.as_str())
            .with("description", self.description.clone().unwrap_or_default())
            .with("price", format!("{:.2}", self.price))
            .with("stock", self.stock.to_string())
    }
}

// ============================================================================
// Table / REST integration
// ============================================================================

impl Sortable for Product {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => (&self.name).into(),
            "sku" => (&self.sku).into(),
            "category" => (&self.category).into(),
            "price" => self.price.into(),
            "stock" => self.stock.into(),
            "is_active" => self.is_active.into(),
            "created_at" => (&self.created_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Product {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.sku, needle)
            || contains_ci(&self.category, needle)
    }
}

impl Resource for Product {
    const COLLECTION: &'static str = "products";
    const TITLE: &'static str = "Product";
    type Draft = ProductDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            sku: self.sku.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: self.price,
            stock: self.stock,
        }
    }

    fn supports_status_toggle() -> bool {
        true
    }

    fn is_enabled(&self) -> Option<bool> {
        Some(self.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{PaginationOptions, SortDirection, TableViewModel};

    fn product(name: &str, price: f64) -> Product {
        Product {
            id: name.to_lowercase(),
            name: name.to_string(),
            sku: format!("SKU-{}", name.len()),
            category: "Shoes".to_string(),
            description: None,
            price,
            stock: 3,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_price_accepts_string_payload() {
        let json = r#"{"id":"p1","name":"Boot","sku":"BOOT-1","category":"Shoes",
            "price":"129.90","stock":4,"is_active":true,"created_at":"2024-01-01"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price, 129.9);
        assert_eq!(p.description, None);
    }

    #[test]
    fn test_sorted_by_price_page() {
        let items = vec![
            product("Boot", 120.0),
            product("Sandal", 35.5),
            product("Sneaker", 80.0),
        ];
        let mut model = TableViewModel::new(PaginationOptions {
            initial_rows_per_page: 5,
            min_rows_per_page: 1,
            max_rows_per_page: 50,
        })
        .with_sort("price", SortDirection::Asc);
        let view = model.view(&items);
        let names: Vec<_> = view.page.rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sandal", "Sneaker", "Boot"]);
    }

    #[test]
    fn test_draft_from_form() {
        let fields = FormFields::new()
            .with("name", "Trail Boot")
            .with("sku", "TB-001")
            .with("category", "Shoes")
            .with("price", "149.99")
            .with("stock", "12");
        let draft = ProductDraft::from_form(&fields).unwrap();
        assert_eq!(draft.price, 149.99);
        assert_eq!(draft.stock, 12);
        assert_eq!(draft.description, None);
        assert_eq!(ProductDraft::from_form(&draft.to_form()).unwrap(), draft);

        let bad = fields.with("sku", "tb 1").with("stock", "-1");
        let errors = ProductDraft::from_form(&bad).unwrap_err();
        assert!(errors.for_field("sku").is_some());
        assert_eq!(errors.for_field("stock"), Some("Stock must be at least 0"));
    }
}
