use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x300?text=No+Image";

/// Product as rendered by search and recommendation views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub title: String,
    pub price: String,
    pub website: String,
    pub rating: String,
    pub rating_count: Option<String>,
    pub image_url: String,
    pub link: String,
}

impl Product {
    /// Build from an arbitrary backend object. Field names differ between
    /// scrapers, so each field walks a list of candidate keys.
    pub fn from_value(value: &Value) -> Self {
        let empty = Map::new();
        let object = value.as_object().unwrap_or(&empty);

        Self {
            id: first_text(object, &["id", "_id"]),
            title: first_text(object, &["title", "name", "product_name"])
                .unwrap_or_else(|| "Product".to_string()),
            price: first_text(object, &["price"]).unwrap_or_else(|| "$0.00".to_string()),
            website: first_text(object, &["website"]).unwrap_or_else(|| "Unknown".to_string()),
            rating: first_text(object, &["rating"]).unwrap_or_default(),
            rating_count: first_text(object, &["rating_count", "ratingCount"]),
            image_url: first_text(object, &["image_url", "img_link", "img"])
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            link: first_text(object, &["link", "url"]).unwrap_or_else(|| "#".to_string()),
        }
    }

    /// Normalize a JSON array; non-objects become all-default products.
    pub fn list_from_values(values: &[Value]) -> Vec<Self> {
        values.iter().map(Self::from_value).collect()
    }

    /// Key for per-item UI state. Unique within one result list even when
    /// the backend repeats an id.
    pub fn key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("{id}-{index}"),
            None => format!("product-{index}"),
        }
    }

    pub fn has_rating(&self) -> bool {
        !self.rating.is_empty()
    }
}

/// Text of the first key holding a non-empty string or a number.
fn first_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_fallback_chain() {
        assert_eq!(Product::from_value(&json!({"title": "Lamp"})).title, "Lamp");
        assert_eq!(Product::from_value(&json!({"title": "", "name": "Desk"})).title, "Desk");
        assert_eq!(
            Product::from_value(&json!({"title": null, "product_name": "Chair"})).title,
            "Chair"
        );
        assert_eq!(Product::from_value(&json!({})).title, "Product");
        assert_eq!(Product::from_value(&json!("not an object")).title, "Product");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let product = Product::from_value(&json!({"title": "Lamp"}));
        assert_eq!(product.price, "$0.00");
        assert_eq!(product.website, "Unknown");
        assert_eq!(product.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(product.link, "#");
        assert!(!product.has_rating());
        assert_eq!(product.id, None);
    }

    #[test]
    fn test_alternate_keys_and_numbers() {
        let product = Product::from_value(&json!({
            "id": 42,
            "name": "Mouse",
            "img_link": "https://img.test/m.png",
            "url": "https://shop.test/m",
            "rating": 4.5,
            "price": "$19.99",
            "website": "Shop"
        }));
        assert_eq!(product.id.as_deref(), Some("42"));
        assert_eq!(product.image_url, "https://img.test/m.png");
        assert_eq!(product.link, "https://shop.test/m");
        assert_eq!(product.rating, "4.5");
    }

    #[test]
    fn test_key_uses_id_or_index() {
        let with_id = Product::from_value(&json!({"id": "abc"}));
        let without_id = Product::from_value(&json!({}));
        assert_eq!(with_id.key(3), "abc-3");
        assert_eq!(without_id.key(3), "product-3");
    }

    #[test]
    fn test_keys_unique_for_repeated_ids() {
        let products = Product::list_from_values(&[json!({"id": 7}), json!({"id": 7})]);
        let keys: Vec<String> = products
            .iter()
            .enumerate()
            .map(|(index, product)| product.key(index))
            .collect();
        assert_ne!(keys[0], keys[1]);
    }
}
