//! Wishlist loading, removal and sharing
//!
//! The backend answers `GET /wishlist` with JSON when asked, but older
//! deployments still render an HTML table; both are accepted.

use serde::Serialize;
use serde_json::Value;

use crate::domain::models::{
    OperationStatus, OperationStore, RemovalReport, ScrapedCells, WishlistItem, WishlistPayload,
};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_fallback, log_operation_in_flight, log_wishlist_format, LogOperation};
use crate::shared::services::{ApiClient, Transport};
use crate::shared::utils::html_table::{scraper, HtmlScraper};

pub const REMOVE_FAILED: &str = "Failed to remove item. Please try again.";

pub async fn fetch_wishlist<T: Transport>(api: &ApiClient<T>) -> Result<Vec<WishlistItem>> {
    let response = api.get(LogOperation::WishlistFetch, "/wishlist", &[]).await?;
    if response.status == 401 {
        return Err(AppError::Unauthorized);
    }
    if !response.ok() {
        return Err(AppError::Backend(format!("Server returned {}", response.status)));
    }

    let payload = parse_wishlist(&response.body);
    let format = payload.format();
    match payload.into_items() {
        Some(items) => {
            log_wishlist_format(format, items.len());
            Ok(items)
        }
        None => Err(AppError::InvalidResponse(
            "Could not find wishlist table".to_string(),
        )),
    }
}

/// Text shown in place of the list when loading fails.
pub fn load_error_message(error: &AppError) -> String {
    let reason = match error {
        AppError::Backend(reason) | AppError::InvalidResponse(reason) => reason.clone(),
        other => other.to_string(),
    };
    format!("Failed to load your wishlist: {reason}")
}

/// Classify a wishlist body as JSON, legacy HTML or neither.
pub fn parse_wishlist(body: &str) -> WishlistPayload {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(products) = value.get("products").and_then(Value::as_array) {
            let items = products
                .iter()
                .enumerate()
                .map(|(index, product)| WishlistItem::from_value(product, index))
                .collect();
            return WishlistPayload::Json(items);
        }
    }

    match scraper() {
        Some(scraper) => scrape_wishlist(scraper, body),
        None => WishlistPayload::Unrecognized,
    }
}

fn scrape_wishlist(scraper: &HtmlScraper, html: &str) -> WishlistPayload {
    let Some(table) = scraper.first_table(html) else {
        let says_empty = scraper
            .paragraphs(html)
            .iter()
            .any(|text| text.contains("empty"));
        return if says_empty {
            WishlistPayload::ScrapedHtml(Vec::new())
        } else {
            WishlistPayload::Unrecognized
        };
    };

    // Row index, not item count, so ids match the server's row order
    let items = scraper
        .body_rows(table)
        .into_iter()
        .enumerate()
        .filter(|(_, cells)| cells.len() >= 5)
        .map(|(index, cells)| {
            let scraped = ScrapedCells {
                title: scraper.text(cells[0]),
                url: scraper.link_href(cells[0]).unwrap_or_default(),
                img: scraper.image_src(cells[1]).unwrap_or_default(),
                price: scraper.text(cells[2]),
                website: scraper.text(cells[3]),
                rating: scraper.text(cells[4]),
            };
            WishlistItem::from_cells(index, scraped)
        })
        .collect();

    WishlistPayload::ScrapedHtml(items)
}

/// Remove one item. If the direct request fails, the same form is also
/// posted through the browser as a plain HTML form.
pub async fn remove_wishlist_item<T: Transport, S: OperationStore>(
    api: &ApiClient<T>,
    ops: &mut S,
    item: &WishlistItem,
) -> RemovalReport {
    if !ops.try_begin(&item.id, OperationStatus::Removing) {
        log_operation_in_flight(LogOperation::WishlistRemove, &item.id);
        return RemovalReport {
            skipped: true,
            ..Default::default()
        };
    }

    let fields = vec![("id".to_string(), item.id.clone())];
    let mut report = RemovalReport::default();

    match api
        .post_form(LogOperation::WishlistRemove, "/remove-wishlist-item", fields.clone())
        .await
    {
        Ok(response) if response.ok() => report.direct_ok = true,
        Ok(_) => {}
        Err(_) => report.error = Some(REMOVE_FAILED.to_string()),
    }

    if !report.direct_ok {
        log_fallback(LogOperation::WishlistRemove, &item.id);
        report.fallback_used = true;
        // Nothing to read back from a form post
        let _ = api
            .submit_form(LogOperation::WishlistRemove, "/remove-wishlist-item", &fields)
            .await;
    }

    ops.finish(&item.id);
    report
}

/// Remove one item, then load the list again whatever the removal did.
pub async fn remove_and_reload<T: Transport, S: OperationStore>(
    api: &ApiClient<T>,
    ops: &mut S,
    item: &WishlistItem,
) -> (RemovalReport, Result<Vec<WishlistItem>>) {
    let report = remove_wishlist_item(api, ops, item).await;
    let items = fetch_wishlist(api).await;
    (report, items)
}

#[derive(Debug, Serialize)]
struct ShareRequest<'a> {
    email: &'a str,
    wishlist: &'a [WishlistItem],
}

/// Ask the backend to email the list. Any HTTP answer counts as sent.
pub async fn share_wishlist<T: Transport>(
    api: &ApiClient<T>,
    email: &str,
    items: &[WishlistItem],
) -> Result<()> {
    let body = ShareRequest {
        email: email.trim(),
        wishlist: items,
    };
    let response = api
        .post_json(LogOperation::WishlistShare, "/share", &body)
        .await?;

    tracing::info!(
        operation = LogOperation::WishlistShare.as_str(),
        status = response.status,
        item_count = items.len(),
        "Wishlist share requested"
    );
    Ok(())
}
