//! Customer cart persisted in localStorage between visits.

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_order::checkout::{Cart, CartLine};

use crate::shared::storage;

const CART_KEY: &str = "checkout_cart";

pub fn load_cart() -> Cart {
    storage::get_json(CART_KEY).unwrap_or_default()
}

pub fn save_cart(cart: &Cart) {
    if cart.is_empty() {
        storage::clear(CART_KEY);
    } else {
        storage::set_json(CART_KEY, cart);
    }
}

pub fn line_for(product: &Product, quantity: u32) -> CartLine {
    CartLine {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        unit_price: product.price,
        quantity,
    }
}
