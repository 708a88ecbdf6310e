//! Typed response documents.
//!
//! Every field is optional on the wire and defaults when absent. Histogram
//! containers are carried through as returned without further processing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::WireFormat;
use crate::domain::from_wire_datetime;
use crate::FindingError;

/// Parses a response body in the configured wire format.
pub fn decode<R: DeserializeOwned>(body: &str, format: WireFormat) -> Result<R, FindingError> {
    match format {
        WireFormat::Json => serde_json::from_str(body)
            .map_err(|error| FindingError::Deserialization(error.to_string())),
        WireFormat::Xml => quick_xml::de::from_str(body)
            .map_err(|error| FindingError::Deserialization(error.to_string())),
    }
}

/// Acknowledgement fields present on every response.
pub trait Acknowledged {
    fn ack(&self) -> &str;
    fn error_messages(&self) -> &[ErrorData];
    fn timestamp(&self) -> &str;

    /// `Success` and `Warning` both carry usable data.
    fn is_success(&self) -> bool {
        matches!(self.ack(), "Success" | "Warning")
    }

    /// Time the service processed the request, if the timestamp parses.
    fn processed_at(&self) -> Option<OffsetDateTime> {
        from_wire_datetime(self.timestamp()).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub error: Vec<ErrorData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorData {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub error_id: String,
    #[serde(default)]
    pub exception_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub parameter: Vec<ErrorParameter>,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub subdomain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorParameter {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Response of the five item search operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub ack: String,
    #[serde(default)]
    pub error_message: Option<ErrorMessage>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "itemSearchURL", default)]
    pub item_search_url: String,
    #[serde(default)]
    pub pagination_output: PaginationOutput,
    #[serde(default)]
    pub search_result: SearchResult,
    #[serde(default)]
    pub aspect_histogram_container: Option<AspectHistogramContainer>,
    #[serde(default)]
    pub category_histogram_container: Option<CategoryHistogramContainer>,
    #[serde(default)]
    pub condition_histogram_container: Option<ConditionHistogramContainer>,
}

pub type AdvancedResponse = SearchResponse;
pub type ByCategoryResponse = SearchResponse;
pub type ByKeywordsResponse = SearchResponse;
pub type ByProductResponse = SearchResponse;
pub type InStoresResponse = SearchResponse;

impl SearchResponse {
    pub fn items(&self) -> &[Item] {
        &self.search_result.item
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramsResponse {
    #[serde(default)]
    pub ack: String,
    #[serde(default)]
    pub error_message: Option<ErrorMessage>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub aspect_histogram_container: Option<AspectHistogramContainer>,
    #[serde(default)]
    pub category_histogram_container: Option<CategoryHistogramContainer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsRecommendationResponse {
    #[serde(default)]
    pub ack: String,
    #[serde(default)]
    pub error_message: Option<ErrorMessage>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    #[serde(default)]
    pub ack: String,
    #[serde(default)]
    pub error_message: Option<ErrorMessage>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
}

fn errors_of(message: &Option<ErrorMessage>) -> &[ErrorData] {
    message
        .as_ref()
        .map(|message| message.error.as_slice())
        .unwrap_or_default()
}

impl Acknowledged for SearchResponse {
    fn ack(&self) -> &str {
        &self.ack
    }

    fn error_messages(&self) -> &[ErrorData] {
        errors_of(&self.error_message)
    }

    fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl Acknowledged for HistogramsResponse {
    fn ack(&self) -> &str {
        &self.ack
    }

    fn error_messages(&self) -> &[ErrorData] {
        errors_of(&self.error_message)
    }

    fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl Acknowledged for KeywordsRecommendationResponse {
    fn ack(&self) -> &str {
        &self.ack
    }

    fn error_messages(&self) -> &[ErrorData] {
        errors_of(&self.error_message)
    }

    fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl Acknowledged for VersionResponse {
    fn ack(&self) -> &str {
        &self.ack
    }

    fn error_messages(&self) -> &[ErrorData] {
        errors_of(&self.error_message)
    }

    fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOutput {
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub entries_per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_entries: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "@count", default)]
    pub count: u32,
    #[serde(default)]
    pub item: Vec<Item>,
}

/// One matching listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub global_id: String,
    #[serde(default)]
    pub primary_category: Option<Category>,
    #[serde(default)]
    pub secondary_category: Option<Category>,
    #[serde(rename = "galleryURL", default)]
    pub gallery_url: Option<String>,
    #[serde(rename = "galleryPlusPictureURL", default)]
    pub gallery_plus_picture_url: Vec<String>,
    #[serde(rename = "pictureURLLarge", default)]
    pub picture_url_large: Option<String>,
    #[serde(rename = "pictureURLSuperSize", default)]
    pub picture_url_super_size: Option<String>,
    #[serde(rename = "viewItemURL", default)]
    pub view_item_url: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub charity_id: Option<String>,
    #[serde(default)]
    pub payment_method: Vec<String>,
    #[serde(default)]
    pub auto_pay: bool,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub distance: Option<Distance>,
    #[serde(default)]
    pub attribute: Vec<ItemAttribute>,
    #[serde(default)]
    pub condition: Option<ItemCondition>,
    #[serde(default)]
    pub discount_price_info: Option<DiscountPriceInfo>,
    #[serde(default)]
    pub eek_status: Vec<String>,
    #[serde(default)]
    pub seller_info: Option<SellerInfo>,
    #[serde(default)]
    pub selling_status: Option<SellingStatus>,
    #[serde(default)]
    pub shipping_info: Option<ShippingInfo>,
    #[serde(default)]
    pub listing_info: Option<ListingInfo>,
    #[serde(default)]
    pub store_info: Option<StoreInfo>,
    #[serde(default)]
    pub unit_price: Option<UnitPriceInfo>,
    #[serde(default)]
    pub returns_accepted: bool,
    #[serde(rename = "eBayPlusEnabled", default)]
    pub ebay_plus_enabled: bool,
    #[serde(default)]
    pub top_rated_listing: bool,
}

/// Amount with its currency attribute, e.g. `<currentPrice currencyId="USD">9.99</currentPrice>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(rename = "@currencyId", default)]
    pub currency_id: String,
    #[serde(rename = "$text", default)]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    #[serde(rename = "@unit", default)]
    pub unit: String,
    #[serde(rename = "$text", default)]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub category_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCondition {
    #[serde(default)]
    pub condition_id: String,
    #[serde(default)]
    pub condition_display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPriceInfo {
    #[serde(default)]
    pub minimum_advertised_price_exposure: String,
    #[serde(default)]
    pub original_retail_price: Option<Amount>,
    #[serde(default)]
    pub pricing_treatment: String,
    #[serde(default)]
    pub sold_off_ebay: bool,
    #[serde(default)]
    pub sold_on_ebay: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfo {
    #[serde(default)]
    pub seller_user_name: String,
    #[serde(default)]
    pub feedback_score: i64,
    #[serde(default)]
    pub positive_feedback_percent: f64,
    #[serde(default)]
    pub feedback_rating_star: String,
    #[serde(default)]
    pub top_rated_seller: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingStatus {
    #[serde(default)]
    pub current_price: Option<Amount>,
    #[serde(default)]
    pub converted_current_price: Option<Amount>,
    #[serde(default)]
    pub bid_count: Option<u32>,
    #[serde(default)]
    pub selling_state: String,
    #[serde(default)]
    pub time_left: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    #[serde(default)]
    pub shipping_service_cost: Option<Amount>,
    #[serde(default)]
    pub shipping_type: String,
    #[serde(default)]
    pub ship_to_locations: Vec<String>,
    #[serde(default)]
    pub expedited_shipping: bool,
    #[serde(default)]
    pub one_day_shipping_available: bool,
    #[serde(default)]
    pub handling_time: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInfo {
    #[serde(default)]
    pub best_offer_enabled: bool,
    #[serde(default)]
    pub buy_it_now_available: bool,
    #[serde(default)]
    pub buy_it_now_price: Option<Amount>,
    #[serde(default)]
    pub converted_buy_it_now_price: Option<Amount>,
    #[serde(default)]
    pub gift: bool,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub listing_type: String,
    #[serde(default)]
    pub watch_count: Option<u32>,
}

impl ListingInfo {
    pub fn started_at(&self) -> Option<OffsetDateTime> {
        from_wire_datetime(&self.start_time).ok()
    }

    pub fn ends_at(&self) -> Option<OffsetDateTime> {
        from_wire_datetime(&self.end_time).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    #[serde(default)]
    pub store_name: String,
    #[serde(rename = "storeURL", default)]
    pub store_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPriceInfo {
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectHistogramContainer {
    #[serde(default)]
    pub domain_display_name: String,
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub aspect: Vec<Aspect>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(default)]
    pub value_histogram: Vec<ValueHistogram>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueHistogram {
    #[serde(rename = "@valueName", default)]
    pub value_name: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHistogramContainer {
    #[serde(default)]
    pub category_histogram: Vec<CategoryHistogram>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHistogram {
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub child_category_histogram: Vec<CategoryHistogram>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionHistogramContainer {
    #[serde(default)]
    pub condition_histogram: Vec<ConditionHistogram>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionHistogram {
    #[serde(default)]
    pub condition: ItemCondition,
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    const SEARCH_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<findItemsAdvancedResponse xmlns="http://www.ebay.com/marketplace/search/v1/services">
  <ack>Success</ack>
  <version>1.13.0</version>
  <timestamp>2021-11-27T00:28:30.123Z</timestamp>
  <searchResult count="1">
    <item>
      <itemId>110123456789</itemId>
      <title>The Hobbit first edition</title>
      <globalId>EBAY-US</globalId>
      <primaryCategory>
        <categoryId>29223</categoryId>
        <categoryName>Antiquarian &amp; Collectible</categoryName>
      </primaryCategory>
      <viewItemURL>https://www.ebay.com/itm/110123456789</viewItemURL>
      <paymentMethod>PayPal</paymentMethod>
      <location>London,United Kingdom</location>
      <country>GB</country>
      <sellingStatus>
        <currentPrice currencyId="USD">75.0</currentPrice>
        <bidCount>3</bidCount>
        <sellingState>Active</sellingState>
        <timeLeft>P2DT3H</timeLeft>
      </sellingStatus>
      <listingInfo>
        <bestOfferEnabled>false</bestOfferEnabled>
        <startTime>2021-11-20T10:00:00.000Z</startTime>
        <endTime>2021-11-30T10:00:00.000Z</endTime>
        <listingType>Auction</listingType>
      </listingInfo>
      <topRatedListing>true</topRatedListing>
    </item>
  </searchResult>
  <paginationOutput>
    <pageNumber>1</pageNumber>
    <entriesPerPage>2</entriesPerPage>
    <totalPages>40</totalPages>
    <totalEntries>80</totalEntries>
  </paginationOutput>
  <itemSearchURL>https://www.ebay.com/sch/i.html?_nkw=tolkien</itemSearchURL>
</findItemsAdvancedResponse>"#;

    #[test]
    fn search_response_parses_items_and_pagination() {
        let response: SearchResponse = decode(SEARCH_XML, WireFormat::Xml).expect("valid xml");

        assert!(response.is_success());
        assert_eq!(response.version, "1.13.0");
        assert_eq!(
            response.processed_at(),
            Some(datetime!(2021-11-27 00:28:30.123 UTC))
        );
        assert_eq!(response.pagination_output.total_entries, 80);
        assert_eq!(response.search_result.count, 1);

        let item = &response.items()[0];
        assert_eq!(item.item_id, "110123456789");
        assert!(item.top_rated_listing);
        let price = item
            .selling_status
            .as_ref()
            .and_then(|status| status.current_price.as_ref())
            .expect("price");
        assert_eq!(price.currency_id, "USD");
        assert_eq!(price.value, 75.0);
        let listing = item.listing_info.as_ref().expect("listing info");
        assert_eq!(listing.ends_at(), Some(datetime!(2021-11-30 10:00:00 UTC)));
    }

    #[test]
    fn failure_response_exposes_error_messages() {
        let body = r#"<getVersionResponse>
  <ack>Failure</ack>
  <errorMessage>
    <error>
      <errorId>5</errorId>
      <domain>Marketplace</domain>
      <severity>Error</severity>
      <message>Invalid operation</message>
      <parameter name="op">getVersion</parameter>
    </error>
  </errorMessage>
</getVersionResponse>"#;

        let response: VersionResponse = decode(body, WireFormat::Xml).expect("valid xml");

        assert!(!response.is_success());
        let errors = response.error_messages();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid operation");
        assert_eq!(errors[0].parameter[0].name, "op");
        assert_eq!(response.processed_at(), None);
    }

    #[test]
    fn json_responses_use_the_same_field_names() {
        let body = r#"{"ack":"Warning","version":"1.13.0","keywords":"harry potter"}"#;
        let response: KeywordsRecommendationResponse =
            decode(body, WireFormat::Json).expect("valid json");

        assert!(response.is_success());
        assert_eq!(response.keywords, "harry potter");
        assert!(response.error_messages().is_empty());
    }

    #[test]
    fn unexpected_document_is_a_deserialization_error() {
        let error = decode::<VersionResponse>("not json", WireFormat::Json).expect_err("garbage");
        assert!(error.to_string().starts_with("parsing response: "));
    }
}
