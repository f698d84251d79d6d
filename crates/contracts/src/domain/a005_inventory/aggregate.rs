use serde::{Deserialize, Serialize};

use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

/// Stock level of a product at a warehouse location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub sku: String,
    pub quantity: i64,
    pub reorder_level: i64,
    #[serde(default)]
    pub location: Option<String>,
    pub updated_at: String,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDraft {
    pub product_id: String,
    pub sku: String,
    pub quantity: i64,
    pub reorder_level: i64,
    pub location: Option<String>,
}

pub const INVENTORY_SCHEMA: FormSchema = FormSchema {
    name: "inventory",
    rules: &[
        FieldRule::new("product_id", "Product ID", FieldKind::Text).required(),
        FieldRule::new("sku", "SKU", FieldKind::Text)
            .required()
            .pattern(r"^[A-Z0-9-]{3,32}$", "SKU uses 3-32 capital letters, digits or dashes"),
        FieldRule::new("quantity", "Quantity", FieldKind::Integer)
            .required()
            .min(0.0),
        FieldRule::new("reorder_level", "Reorder level", FieldKind::Integer)
            .required()
            .min(0.0),
        FieldRule::new("location", "Location", FieldKind::Text).max_length(60),
    ],
};

impl FromForm for InventoryDraft {
    fn schema() -> &'static FormSchema {
        &INVENTORY_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            product_id: fields.text("product_id"),
            sku: fields.text("sku"),
            quantity: fields.integer("quantity"),
            reorder_level: fields.integer("reorder_level"),
            location: fields.opt_text("location"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("product_id", self.product_id.as_str())
            .with("sku", self.sku.as_str())
            .with("quantity", self.quantity.to_string())
            .with("reorder_level", self.reorder_level.to_string())
            .with("location", self.location.clone().unwrap_or_default())
    }
}

impl Sortable for InventoryItem {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "product_name" => (&self.product_name).into(),
            "sku" => (&self.sku).into(),
            "quantity" => self.quantity.into(),
            "reorder_level" => self.reorder_level.into(),
            "low_stock" => self.is_low_stock().into(),
            "location" => self.location.as_ref().into(),
            "updated_at" => (&self.updated_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for InventoryItem {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.product_name, needle)
            || contains_ci(&self.sku, needle)
            || self
                .location
                .as_deref()
                .is_some_and(|l| contains_ci(l, needle))
    }
}

impl Resource for InventoryItem {
    const COLLECTION: &'static str = "inventory";
    const TITLE: &'static str = "Inventory item";
    type Draft = InventoryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> InventoryDraft {
        InventoryDraft {
            product_id: self.product_id.clone(),
            sku: self.sku.clone(),
            quantity: self.quantity,
            reorder_level: self.reorder_level,
            location: self.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{sort_items, SortConfig, SortDirection};

    fn item(sku: &str, quantity: i64, location: Option<&str>) -> InventoryItem {
        InventoryItem {
            id: sku.to_string(),
            product_id: sku.to_string(),
            product_name: sku.to_string(),
            sku: sku.to_string(),
            quantity,
            reorder_level: 5,
            location: location.map(str::to_string),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_low_stock_first_when_descending() {
        let items = vec![item("A", 50, None), item("B", 5, None), item("C", 2, None)];
        let sorted = sort_items(&items, &SortConfig::new("low_stock", SortDirection::Desc));
        let skus: Vec<_> = sorted.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_missing_location_sorts_last_both_ways() {
        let items = vec![item("A", 1, None), item("B", 1, Some("R2")), item("C", 1, Some("R1"))];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_items(&items, &SortConfig::new("location", direction));
            assert_eq!(sorted.last().map(|i| i.sku.as_str()), Some("A"));
        }
    }
}
