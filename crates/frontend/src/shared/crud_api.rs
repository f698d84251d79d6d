//! REST calls shared by every managed collection.

use contracts::shared::resource::Resource;

use super::api_utils;

pub fn collection_path<R: Resource>() -> String {
    format!("/api/{}", R::COLLECTION)
}

pub fn item_path<R: Resource>(id: &str) -> String {
    format!("/api/{}/{}", R::COLLECTION, urlencoding::encode(id))
}

pub async fn fetch_all<R: Resource>() -> Result<Vec<R>, String> {
    api_utils::get_json(&collection_path::<R>()).await
}

pub async fn create<R: Resource>(draft: &R::Draft) -> Result<(), String> {
    api_utils::post(&collection_path::<R>(), draft).await
}

pub async fn update<R: Resource>(id: &str, draft: &R::Draft) -> Result<(), String> {
    api_utils::put(&item_path::<R>(id), draft).await
}

pub async fn remove<R: Resource>(id: &str) -> Result<(), String> {
    api_utils::delete(&item_path::<R>(id)).await
}

pub async fn toggle_status<R: Resource>(id: &str) -> Result<(), String> {
    api_utils::patch(&format!("{}/toggle-status", item_path::<R>(id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;

    #[test]
    fn test_paths() {
        assert_eq!(collection_path::<Product>(), "/api/products");
        assert_eq!(item_path::<Product>("a b/c"), "/api/products/a%20b%2Fc");
    }
}
