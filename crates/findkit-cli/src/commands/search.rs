use findkit_core::prelude::*;
use findkit_core::SearchResponse;

use crate::cli::{AdvancedArgs, CategoryArgs, FilterArgs, KeywordsArgs, PageArgs};
use crate::error::CliError;

use super::Output;

pub async fn advanced(
    args: &AdvancedArgs,
    service: &FindingService,
    dry_run: bool,
) -> Result<Output, CliError> {
    let keywords = args.keywords.as_deref().map(str::trim).unwrap_or_default();
    let request = service
        .advanced_request()
        .with_keywords(keywords)
        .with_category_ids(args.categories.iter().cloned())
        .with_description_search(args.description_search);
    if request.keywords().is_empty() && request.categories().ids().is_empty() {
        return Err(CliError::Command(String::from(
            "advanced search needs keywords of at least two characters or a --category",
        )));
    }
    let mut request = apply_page(apply_filters(request, &args.filters), &args.page);

    if dry_run {
        return Ok(Output::Body(request.body()?));
    }
    render(request.get_page(args.page.page).await?)
}

pub async fn keywords(
    args: &KeywordsArgs,
    service: &FindingService,
    dry_run: bool,
) -> Result<Output, CliError> {
    let request = service
        .by_keywords_request()
        .with_keywords(args.keywords.trim());
    if request.keywords().is_empty() {
        return Err(CliError::Command(String::from(
            "keywords must be at least two characters",
        )));
    }
    let mut request = apply_page(apply_filters(request, &args.filters), &args.page);

    if dry_run {
        return Ok(Output::Body(request.body()?));
    }
    render(request.get_page(args.page.page).await?)
}

pub async fn category(
    args: &CategoryArgs,
    service: &FindingService,
    dry_run: bool,
) -> Result<Output, CliError> {
    let request = service
        .by_category_request()
        .with_category_ids(args.categories.iter().cloned());
    let mut request = apply_page(apply_filters(request, &args.filters), &args.page);

    if dry_run {
        return Ok(Output::Body(request.body()?));
    }
    render(request.get_page(args.page.page).await?)
}

fn apply_filters<R: ItemFilterBuilder>(mut request: R, filters: &FilterArgs) -> R {
    request = request
        .with_item_filter_condition(filters.conditions.iter().copied())
        .with_item_filter_listing_type(filters.listing_types.iter().copied())
        .with_item_filter_seller(filters.sellers.iter().cloned());

    request = match (filters.max_price, filters.currency) {
        (Some(price), Some(currency)) => {
            request.with_item_filter_max_price_with_currency(price, currency)
        }
        (Some(price), None) => request.with_item_filter_max_price(price),
        (None, _) => request,
    };
    request = match (filters.min_price, filters.currency) {
        (Some(price), Some(currency)) => {
            request.with_item_filter_min_price_with_currency(price, currency)
        }
        (Some(price), None) => request.with_item_filter_min_price(price),
        (None, _) => request,
    };

    if filters.free_shipping {
        request = request.with_item_filter_free_shipping_only(true);
    }
    request
}

fn apply_page<R: StandardBuilder>(mut request: R, page: &PageArgs) -> R {
    request = request.with_page_number(page.page);
    if let Some(limit) = page.limit {
        request = request.with_page_limit(limit);
    }
    if let Some(order) = page.sort {
        request = request.with_sort_order(order);
    }
    request
}

fn render(response: SearchResponse) -> Result<Output, CliError> {
    tracing::debug!(
        ack = %response.ack,
        items = response.items().len(),
        "search completed"
    );
    Ok(Output::Document(serde_json::to_value(response)?))
}
