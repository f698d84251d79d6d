//! Customer checkout: the cart kept in the browser and the request that
//! turns it into an order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::money::{deserialize_money, round_cents};
use crate::shared::validation::{
    validate, FieldError, FieldKind, FieldRule, FormFields, FormSchema, FromForm, ValidationErrors,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub product_name: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        round_cents(self.unit_price * self.quantity as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Adding a product already in the cart increases its quantity.
    pub fn add(&mut self, line: CartLine) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
    }

    /// Quantity 0 removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|l| l.product_id != product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn total(&self) -> f64 {
        round_cents(self.lines.iter().map(CartLine::line_total).sum())
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    CashOnDelivery,
}

impl PaymentMethod {
    pub const NAMES: &'static [&'static str] = &["card", "cash_on_delivery"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::CashOnDelivery => "cash_on_delivery",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.trim() == "cash_on_delivery" {
            PaymentMethod::CashOnDelivery
        } else {
            PaymentMethod::Card
        }
    }
}

/// Customer details entered on the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub customer_name: String,
    pub customer_email: String,
    pub phone: String,
    pub shipping_address: String,
    pub city: String,
    pub postal_code: String,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

pub const CHECKOUT_SCHEMA: FormSchema = FormSchema {
    name: "checkout",
    rules: &[
        FieldRule::new("customer_name", "Full name", FieldKind::Text)
            .required()
            .length(2, 120),
        FieldRule::new("customer_email", "Email", FieldKind::Email).required(),
        FieldRule::new("phone", "Phone", FieldKind::Text)
            .required()
            .pattern(r"^\+?[0-9 ()-]{7,20}$", "Phone may contain digits, spaces, dashes and a leading +"),
        FieldRule::new("shipping_address", "Address", FieldKind::Text)
            .required()
            .length(5, 300),
        FieldRule::new("city", "City", FieldKind::Text).required().max_length(80),
        FieldRule::new("postal_code", "Postal code", FieldKind::Text)
            .required()
            .pattern(r"^[A-Za-z0-9 -]{3,10}$", "Postal code looks invalid"),
        FieldRule::new("payment_method", "Payment method", FieldKind::Text)
            .required()
            .choices(PaymentMethod::NAMES),
        FieldRule::new("notes", "Notes", FieldKind::TextArea).max_length(1000),
        FieldRule::new("accept_terms", "Terms and conditions", FieldKind::Bool).required(),
    ],
};

impl FromForm for CheckoutDetails {
    fn schema() -> &'static FormSchema {
        &CHECKOUT_SCHEMA
    }

    fn build(fields: &FormFields) -> Self {
        Self {
            customer_name: fields.text("customer_name"),
            customer_email: fields.text("customer_email").to_lowercase(),
            phone: fields.text("phone"),
            shipping_address: fields.text("shipping_address"),
            city: fields.text("city"),
            postal_code: fields.text("postal_code"),
            payment_method: PaymentMethod::parse(&fields.text("payment_method")),
            notes: fields.opt_text("notes"),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::new()
            .with("customer_name", self.customer_name.as_str())
            .with("customer_email", self.customer_email.as_str())
            .with("phone", self.phone.as_str())
            .with("shipping_address", self.shipping_address.as_str())
            .with("city", self.city.as_str())
            .with("postal_code", self.postal_code.as_str())
            .with("payment_method", self.payment_method.as_str())
            .with("notes", self.notes.clone().unwrap_or_default())
    }
}

/// Body of `POST /api/checkout`. `request_id` makes retries idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub request_id: Uuid,
    #[serde(flatten)]
    pub details: CheckoutDetails,
    pub lines: Vec<CartLine>,
    pub expected_total: f64,
}

impl CheckoutRequest {
    /// Validates the form and refuses an empty cart.
    pub fn new(fields: &FormFields, cart: &Cart) -> Result<Self, ValidationErrors> {
        let mut errors = match validate(&CHECKOUT_SCHEMA, fields) {
            Ok(()) => ValidationErrors::default(),
            Err(e) => e,
        };
        if cart.is_empty() {
            errors.0.push(FieldError::new("cart", "Your cart is empty"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            request_id: Uuid::new_v4(),
            details: CheckoutDetails::build(fields),
            lines: cart.lines.clone(),
            expected_total: cart.total(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub order_number: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product_id: id.to_string(),
            product_name: id.to_uppercase(),
            unit_price: price,
            quantity,
        }
    }

    fn details() -> FormFields {
        FormFields::new()
            .with("customer_name", "Ann Lee")
            .with("customer_email", "Ann@Example.com")
            .with("phone", "+1 (555) 123-4567")
            .with("shipping_address", "1 Main Street")
            .with("city", "Springfield")
            .with("postal_code", "12345")
            .with("payment_method", "cash_on_delivery")
            .with("accept_terms", "true")
    }

    #[test]
    fn test_cart_merges_and_totals() {
        let mut cart = Cart::default();
        cart.add(line("a", 10.5, 1));
        cart.add(line("b", 2.0, 3));
        cart.add(line("a", 10.5, 1));
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), 27.0);

        cart.set_quantity("b", 0);
        assert_eq!(cart.total(), 21.0);
        cart.set_quantity("missing", 4);
        assert_eq!(cart.lines.len(), 1);
    }

    #[test]
    fn test_checkout_request() {
        let mut cart = Cart::default();
        cart.add(line("a", 19.99, 2));
        let request = CheckoutRequest::new(&details(), &cart).unwrap();
        assert_eq!(request.details.customer_email, "ann@example.com");
        assert_eq!(request.details.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(request.expected_total, 39.98);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["payment_method"], "cash_on_delivery");
        assert_eq!(json["lines"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_empty_cart_and_missing_terms() {
        let fields = details().with("accept_terms", "false");
        let errors = CheckoutRequest::new(&fields, &Cart::default()).unwrap_err();
        assert!(errors.for_field("accept_terms").is_some());
        assert_eq!(errors.for_field("cart"), Some("Your cart is empty"));
    }
}
