use serde::{Deserialize, Serialize};

use crate::shared::money::{deserialize_money, round_cents};
use crate::shared::resource::{contains_ci, Resource, Searchable};
use crate::shared::table::{SortValue, Sortable};
use crate::shared::validation::{FieldKind, FieldRule, FormFields, FormSchema, FromForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
    pub const NAMES: &'static [&'static str] =
        &["pending", "processing", "shipped", "delivered", "cancelled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s.trim())
    }

    /// Delivered and cancelled orders no longer change.
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Forward step in fulfilment, `None` for final states.
    pub fn next(&self) -> Option<Self> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Position in the fulfilment flow; sorting by status follows it.
    fn rank(&self) -> i32 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::Delivered => 3,
            OrderStatus::Cancelled => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    #[serde(deserialize_with = "deserialize_money")]
    pub unit_price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        round_cents(self.unit_price * self.quantity as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(deserialize_with = "deserialize_money")]
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: String,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// Body of `PATCH /api/orders/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: OrderStatus,
}

/// Back-office edit of an existing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub shipping_address: Option<String>,
    pub status: OrderStatus,
}

pub const ORDER_SCHEMA: FormSchema = FormSchema {
    name: "order",
    rules: &[
        FieldRule::new("customer_name", "Customer", FieldKind::Text)
            .required()
            .length(2, 120),
        FieldRule::new("customer_email", "Email", FieldKind::Email).required(),
        FieldRule::new("shipping_address", "Shipping address", FieldKind::TextArea)
            .max_length(500),
        FieldRule::new("status", "Status", FieldKind::Text)
            .required()
            .choices(OrderStatus::NAMES),
    ],
};

impl FromForm for OrderDraft {
    fn schema() -> &'static FormSchema {
        &ORDER_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            customer_name: fields.text("customer_name"),
            customer_email: fields.text("customer_email"),
            shipping_address: fields.opt_text("shipping_address"),
            status: OrderStatus::parse(&fields.text("status")).unwrap_or_default(),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("customer_name", self.customer_name.as_str())
            .with("customer_email", self.customer_email.as_str())
            .with("shipping_address", self.shipping_address.clone().unwrap_or_default())
            .with("status", self.status.as_str())
    }
}

impl Sortable for Order {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "order_number" => (&self.order_number).into(),
            "customer_name" => (&self.customer_name).into(),
            "customer_email" => (&self.customer_email).into(),
            "items" => self.item_count().into(),
            "total" => self.total.into(),
            "status" => self.status.rank().into(),
            "created_at" => (&self.created_at).into(),
            _ => SortValue::Missing,
        }
    }
}

impl Searchable for Order {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(&self.order_number, needle)
            || contains_ci(&self.customer_name, needle)
            || contains_ci(&self.customer_email, needle)
            || self.status.as_str().contains(needle)
    }
}

impl Resource for Order {
    const COLLECTION: &'static str = "orders";
    const TITLE: &'static str = "Order";
    type Draft = OrderDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            shipping_address: self.shipping_address.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{sort_items, SortConfig, SortDirection};

    fn order(number: &str, status: OrderStatus, total: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": number,
            "order_number": number,
            "customer_name": "Ann",
            "customer_email": "ann@example.com",
            "total": total,
            "status": status,
            "created_at": "2024-01-01T00:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_status_flow() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::Delivered.next(), None);
        assert!(OrderStatus::Cancelled.is_final());
        assert_eq!(OrderStatus::parse("shipped"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::parse("lost"), None);
    }

    #[test]
    fn test_sort_by_status_follows_flow() {
        let orders = vec![
            order("A-3", OrderStatus::Delivered, "10"),
            order("A-1", OrderStatus::Pending, "20"),
            order("A-2", OrderStatus::Shipped, "30"),
        ];
        let sorted = sort_items(&orders, &SortConfig::new("status", SortDirection::Asc));
        let numbers: Vec<_> = sorted.iter().map(|o| o.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["A-1", "A-2", "A-3"]);
    }

    #[test]
    fn test_line_totals() {
        let line = OrderLine {
            product_id: "p".into(),
            product_name: "Sock".into(),
            quantity: 3,
            unit_price: 0.1,
        };
        assert_eq!(line.line_total(), 0.3);
        let mut o = order("A-1", OrderStatus::Pending, "0.30");
        o.lines.push(line);
        assert_eq!(o.item_count(), 3);
        assert_eq!(o.total, 0.3);
    }
}
