use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::product::PLACEHOLDER_IMAGE;

/// Saved product as the wishlist endpoint describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub title: String,
    pub img: String,
    pub price: String,
    pub website: String,
    pub rating: String,
    pub url: String,
}

impl WishlistItem {
    /// Item from a JSON `products` entry. `index` stands in for a missing id.
    pub fn from_value(value: &Value, index: usize) -> Self {
        let text = |key: &str| match value.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Self {
            id: text("id").unwrap_or_else(|| index.to_string()),
            title: text("title").unwrap_or_else(|| "Unknown Product".to_string()),
            img: text("img")
                .or_else(|| text("image_url"))
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            price: text("price").unwrap_or_else(|| "$0.00".to_string()),
            website: text("website").unwrap_or_else(|| "Unknown Source".to_string()),
            rating: text("rating").unwrap_or_else(|| "Not Rated".to_string()),
            url: text("url")
                .or_else(|| text("link"))
                .unwrap_or_else(|| "#".to_string()),
        }
    }

    /// Item from the cells of a legacy HTML table row; blanks get defaults.
    pub fn from_cells(index: usize, cells: ScrapedCells) -> Self {
        let or = |value: String, default: &str| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.trim().to_string()
            }
        };

        Self {
            id: index.to_string(),
            title: or(cells.title, "Unknown Product"),
            img: or(cells.img, PLACEHOLDER_IMAGE),
            price: or(cells.price, "$0.00"),
            website: or(cells.website, "Unknown Source"),
            rating: or(cells.rating, "Not Rated"),
            url: or(cells.url, "#"),
        }
    }
}

/// Raw text pulled out of one `<tr>` of the wishlist table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapedCells {
    pub title: String,
    pub url: String,
    pub img: String,
    pub price: String,
    pub website: String,
    pub rating: String,
}

/// What a `GET /wishlist` body turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistPayload {
    Json(Vec<WishlistItem>),
    ScrapedHtml(Vec<WishlistItem>),
    Unrecognized,
}

impl WishlistPayload {
    pub fn format(&self) -> &'static str {
        match self {
            WishlistPayload::Json(_) => "json",
            WishlistPayload::ScrapedHtml(_) => "html",
            WishlistPayload::Unrecognized => "unrecognized",
        }
    }

    pub fn into_items(self) -> Option<Vec<WishlistItem>> {
        match self {
            WishlistPayload::Json(items) | WishlistPayload::ScrapedHtml(items) => Some(items),
            WishlistPayload::Unrecognized => None,
        }
    }
}

/// Outcome of a removal attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// Another removal of the same item was still running.
    pub skipped: bool,
    pub direct_ok: bool,
    pub fallback_used: bool,
    /// Message for the user when the direct request never got an answer.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_item_with_numeric_id() {
        let item = WishlistItem::from_value(
            &json!({"id": 12, "title": "Kettle", "img": "k.png", "price": "$20", "website": "Shop", "rating": "4", "url": "https://shop.test/k"}),
            0,
        );
        assert_eq!(item.id, "12");
        assert_eq!(item.title, "Kettle");
        assert_eq!(item.url, "https://shop.test/k");
    }

    #[test]
    fn test_json_item_defaults() {
        let item = WishlistItem::from_value(&json!({}), 4);
        assert_eq!(item.id, "4");
        assert_eq!(item.title, "Unknown Product");
        assert_eq!(item.img, PLACEHOLDER_IMAGE);
        assert_eq!(item.rating, "Not Rated");
        assert_eq!(item.url, "#");
    }

    #[test]
    fn test_scraped_cells_defaults() {
        let item = WishlistItem::from_cells(
            2,
            ScrapedCells {
                title: "  Toaster ".into(),
                ..Default::default()
            },
        );
        assert_eq!(item.id, "2");
        assert_eq!(item.title, "Toaster");
        assert_eq!(item.price, "$0.00");
        assert_eq!(item.website, "Unknown Source");
    }
}
