use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_order::checkout::{CheckoutRequest, CheckoutResponse};

use crate::shared::{api_utils, crud_api};

const CHECKOUT_PATH: &str = "/api/checkout";

/// Products a customer can put in the cart.
pub async fn fetch_available_products() -> Result<Vec<Product>, String> {
    let products = crud_api::fetch_all::<Product>().await?;
    Ok(products
        .into_iter()
        .filter(|p| p.is_active && p.is_in_stock())
        .collect())
}

pub async fn submit_checkout(request: &CheckoutRequest) -> Result<CheckoutResponse, String> {
    log::info!(
        "checkout {}: {} lines, expected total {:.2}",
        request.request_id,
        request.lines.len(),
        request.expected_total
    );
    api_utils::post_json(CHECKOUT_PATH, request).await
}
