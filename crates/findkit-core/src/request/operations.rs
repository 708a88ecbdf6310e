use crate::domain::{Operation, ProductType};
use crate::filter::ItemFilters;
use crate::response::{
    HistogramsResponse, KeywordsRecommendationResponse, SearchResponse, VersionResponse,
};
use crate::service::Transport;
use crate::FindingError;

use super::blocks::{
    AspectFilters, Categories, Keywords, OutputSelectors, PayloadBlock, StandardInput,
};
use super::builders::{
    AspectFilterBuilder, CategoryBuilder, DescriptionSearchBuilder, ItemFilterBuilder,
    KeywordBuilder, OutputSelectorBuilder, StandardBuilder,
};
use super::payload::{ProductId, RequestPayload};
use super::{dispatch, FindingRequest};

fn item_filters_for(transport: &Transport) -> ItemFilters {
    ItemFilters::new(transport.config().filter_limits())
}

fn categories_for(transport: &Transport) -> Categories {
    Categories::new(transport.config().filter_limits().categories)
}

fn standard_for(transport: &Transport) -> StandardInput {
    StandardInput::new(transport.config().page_limit())
}

fn write_item_filters(filters: &mut ItemFilters, payload: &mut RequestPayload) {
    payload.item_filter = filters.finalize().to_vec();
}

fn read_item_filters(filters: &mut ItemFilters, payload: &RequestPayload) {
    *filters = ItemFilters::from_filters(*filters.limits(), payload.item_filter.iter().cloned());
}

/// `findItemsAdvanced`: keywords and/or categories with every filter.
#[derive(Debug, Clone)]
pub struct AdvancedRequest {
    transport: Transport,
    categories: Categories,
    keywords: Keywords,
    description_search: bool,
    item_filters: ItemFilters,
    aspect_filters: AspectFilters,
    output_selectors: OutputSelectors,
    standard: StandardInput,
}

impl AdvancedRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            categories: categories_for(&transport),
            keywords: Keywords::default(),
            description_search: false,
            item_filters: item_filters_for(&transport),
            aspect_filters: AspectFilters::default(),
            output_selectors: OutputSelectors::default(),
            standard: standard_for(&transport),
            transport,
        }
    }

    /// Fetches `page` (clamped to `[1, 100]`).
    pub async fn get_page(&mut self, page: i64) -> Result<SearchResponse, FindingError> {
        self.standard.set_page_number(page);
        dispatch(self).await
    }

    pub async fn execute(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub async fn first(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    /// Drops the finalized filter list so the next body rebuilds it.
    pub fn reset(&mut self) {
        self.item_filters.reset();
    }

    pub fn item_filters(&self) -> &ItemFilters {
        &self.item_filters
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn keywords(&self) -> &str {
        self.keywords.get()
    }
}

impl FindingRequest for AdvancedRequest {
    const OPERATION: Operation = Operation::FindItemsAdvanced;
    type Response = SearchResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        let mut payload = RequestPayload::default();
        self.categories.write_to(&mut payload);
        self.keywords.write_to(&mut payload);
        payload.description_search = self.description_search.then_some(true);
        write_item_filters(&mut self.item_filters, &mut payload);
        self.aspect_filters.write_to(&mut payload);
        self.output_selectors.write_to(&mut payload);
        self.standard.write_to(&mut payload);
        payload
    }

    fn apply_payload(&mut self, payload: &RequestPayload) {
        self.categories.read_from(payload);
        self.keywords.read_from(payload);
        self.description_search = payload.description_search.unwrap_or(false);
        read_item_filters(&mut self.item_filters, payload);
        self.aspect_filters.read_from(payload);
        self.output_selectors.read_from(payload);
        self.standard.read_from(payload);
    }
}

impl CategoryBuilder for AdvancedRequest {
    fn categories_mut(&mut self) -> &mut Categories {
        &mut self.categories
    }
}

impl KeywordBuilder for AdvancedRequest {
    fn keywords_mut(&mut self) -> &mut Keywords {
        &mut self.keywords
    }
}

impl DescriptionSearchBuilder for AdvancedRequest {
    fn description_search_mut(&mut self) -> &mut bool {
        &mut self.description_search
    }
}

impl ItemFilterBuilder for AdvancedRequest {
    fn item_filters_mut(&mut self) -> &mut ItemFilters {
        &mut self.item_filters
    }
}

impl AspectFilterBuilder for AdvancedRequest {
    fn aspect_filters_mut(&mut self) -> &mut AspectFilters {
        &mut self.aspect_filters
    }
}

impl OutputSelectorBuilder for AdvancedRequest {
    fn output_selectors_mut(&mut self) -> &mut OutputSelectors {
        &mut self.output_selectors
    }
}

impl StandardBuilder for AdvancedRequest {
    fn standard_mut(&mut self) -> &mut StandardInput {
        &mut self.standard
    }
}

/// `findItemsByCategory`: browse up to three categories.
#[derive(Debug, Clone)]
pub struct ByCategoryRequest {
    transport: Transport,
    categories: Categories,
    item_filters: ItemFilters,
    aspect_filters: AspectFilters,
    output_selectors: OutputSelectors,
    standard: StandardInput,
}

impl ByCategoryRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            categories: categories_for(&transport),
            item_filters: item_filters_for(&transport),
            aspect_filters: AspectFilters::default(),
            output_selectors: OutputSelectors::default(),
            standard: standard_for(&transport),
            transport,
        }
    }

    pub async fn get_page(&mut self, page: i64) -> Result<SearchResponse, FindingError> {
        self.standard.set_page_number(page);
        dispatch(self).await
    }

    pub async fn execute(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub async fn first(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub fn reset(&mut self) {
        self.item_filters.reset();
    }

    pub fn item_filters(&self) -> &ItemFilters {
        &self.item_filters
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }
}

impl FindingRequest for ByCategoryRequest {
    const OPERATION: Operation = Operation::FindItemsByCategory;
    type Response = SearchResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        let mut payload = RequestPayload::default();
        self.categories.write_to(&mut payload);
        write_item_filters(&mut self.item_filters, &mut payload);
        self.aspect_filters.write_to(&mut payload);
        self.output_selectors.write_to(&mut payload);
        self.standard.write_to(&mut payload);
        payload
    }

    fn apply_payload(&mut self, payload: &RequestPayload) {
        self.categories.read_from(payload);
        read_item_filters(&mut self.item_filters, payload);
        self.aspect_filters.read_from(payload);
        self.output_selectors.read_from(payload);
        self.standard.read_from(payload);
    }
}

impl CategoryBuilder for ByCategoryRequest {
    fn categories_mut(&mut self) -> &mut Categories {
        &mut self.categories
    }
}

impl ItemFilterBuilder for ByCategoryRequest {
    fn item_filters_mut(&mut self) -> &mut ItemFilters {
        &mut self.item_filters
    }
}

impl AspectFilterBuilder for ByCategoryRequest {
    fn aspect_filters_mut(&mut self) -> &mut AspectFilters {
        &mut self.aspect_filters
    }
}

impl OutputSelectorBuilder for ByCategoryRequest {
    fn output_selectors_mut(&mut self) -> &mut OutputSelectors {
        &mut self.output_selectors
    }
}

impl StandardBuilder for ByCategoryRequest {
    fn standard_mut(&mut self) -> &mut StandardInput {
        &mut self.standard
    }
}

/// `findItemsByKeywords`: free-text search.
#[derive(Debug, Clone)]
pub struct ByKeywordsRequest {
    transport: Transport,
    keywords: Keywords,
    item_filters: ItemFilters,
    aspect_filters: AspectFilters,
    output_selectors: OutputSelectors,
    standard: StandardInput,
}

impl ByKeywordsRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            keywords: Keywords::default(),
            item_filters: item_filters_for(&transport),
            aspect_filters: AspectFilters::default(),
            output_selectors: OutputSelectors::default(),
            standard: standard_for(&transport),
            transport,
        }
    }

    pub async fn get_page(&mut self, page: i64) -> Result<SearchResponse, FindingError> {
        self.standard.set_page_number(page);
        dispatch(self).await
    }

    pub async fn execute(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub async fn first(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub fn reset(&mut self) {
        self.item_filters.reset();
    }

    pub fn item_filters(&self) -> &ItemFilters {
        &self.item_filters
    }

    pub fn keywords(&self) -> &str {
        self.keywords.get()
    }
}

impl FindingRequest for ByKeywordsRequest {
    const OPERATION: Operation = Operation::FindItemsByKeywords;
    type Response = SearchResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        let mut payload = RequestPayload::default();
        self.keywords.write_to(&mut payload);
        write_item_filters(&mut self.item_filters, &mut payload);
        self.aspect_filters.write_to(&mut payload);
        self.output_selectors.write_to(&mut payload);
        self.standard.write_to(&mut payload);
        payload
    }

    fn apply_payload(&mut self, payload: &RequestPayload) {
        self.keywords.read_from(payload);
        read_item_filters(&mut self.item_filters, payload);
        self.aspect_filters.read_from(payload);
        self.output_selectors.read_from(payload);
        self.standard.read_from(payload);
    }
}

impl KeywordBuilder for ByKeywordsRequest {
    fn keywords_mut(&mut self) -> &mut Keywords {
        &mut self.keywords
    }
}

impl ItemFilterBuilder for ByKeywordsRequest {
    fn item_filters_mut(&mut self) -> &mut ItemFilters {
        &mut self.item_filters
    }
}

impl AspectFilterBuilder for ByKeywordsRequest {
    fn aspect_filters_mut(&mut self) -> &mut AspectFilters {
        &mut self.aspect_filters
    }
}

impl OutputSelectorBuilder for ByKeywordsRequest {
    fn output_selectors_mut(&mut self) -> &mut OutputSelectors {
        &mut self.output_selectors
    }
}

impl StandardBuilder for ByKeywordsRequest {
    fn standard_mut(&mut self) -> &mut StandardInput {
        &mut self.standard
    }
}

/// `findItemsByProduct`: listings for one catalog product.
#[derive(Debug, Clone)]
pub struct ByProductRequest {
    transport: Transport,
    product: Option<ProductId>,
    item_filters: ItemFilters,
    output_selectors: OutputSelectors,
    standard: StandardInput,
}

impl ByProductRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            product: None,
            item_filters: item_filters_for(&transport),
            output_selectors: OutputSelectors::default(),
            standard: standard_for(&transport),
            transport,
        }
    }

    /// Sets the product reference, replacing any previous one.
    pub fn with_product_id(mut self, kind: ProductType, id: impl Into<String>) -> Self {
        self.product = Some(ProductId {
            kind: kind.as_str().to_owned(),
            value: id.into(),
        });
        self
    }

    pub async fn get_page(&mut self, page: i64) -> Result<SearchResponse, FindingError> {
        self.standard.set_page_number(page);
        dispatch(self).await
    }

    pub async fn execute(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub async fn first(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub fn reset(&mut self) {
        self.item_filters.reset();
    }

    pub fn item_filters(&self) -> &ItemFilters {
        &self.item_filters
    }

    pub fn product(&self) -> Option<&ProductId> {
        self.product.as_ref()
    }
}

impl FindingRequest for ByProductRequest {
    const OPERATION: Operation = Operation::FindItemsByProduct;
    type Response = SearchResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        let mut payload = RequestPayload {
            product_id: self.product.clone(),
            ..RequestPayload::default()
        };
        write_item_filters(&mut self.item_filters, &mut payload);
        self.output_selectors.write_to(&mut payload);
        self.standard.write_to(&mut payload);
        payload
    }

    fn apply_payload(&mut self, payload: &RequestPayload) {
        self.product = payload.product_id.clone();
        read_item_filters(&mut self.item_filters, payload);
        self.output_selectors.read_from(payload);
        self.standard.read_from(payload);
    }
}

impl ItemFilterBuilder for ByProductRequest {
    fn item_filters_mut(&mut self) -> &mut ItemFilters {
        &mut self.item_filters
    }
}

impl OutputSelectorBuilder for ByProductRequest {
    fn output_selectors_mut(&mut self) -> &mut OutputSelectors {
        &mut self.output_selectors
    }
}

impl StandardBuilder for ByProductRequest {
    fn standard_mut(&mut self) -> &mut StandardInput {
        &mut self.standard
    }
}

/// `findItemsIneBayStores`: search within one store or across stores.
#[derive(Debug, Clone)]
pub struct InStoresRequest {
    transport: Transport,
    store_name: Option<String>,
    categories: Categories,
    keywords: Keywords,
    item_filters: ItemFilters,
    aspect_filters: AspectFilters,
    output_selectors: OutputSelectors,
    standard: StandardInput,
}

impl InStoresRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            store_name: None,
            categories: categories_for(&transport),
            keywords: Keywords::default(),
            item_filters: item_filters_for(&transport),
            aspect_filters: AspectFilters::default(),
            output_selectors: OutputSelectors::default(),
            standard: standard_for(&transport),
            transport,
        }
    }

    /// An empty name clears the field.
    pub fn with_store_name(mut self, name: &str) -> Self {
        self.store_name = (!name.is_empty()).then(|| name.to_owned());
        self
    }

    pub async fn get_page(&mut self, page: i64) -> Result<SearchResponse, FindingError> {
        self.standard.set_page_number(page);
        dispatch(self).await
    }

    pub async fn execute(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub async fn first(&mut self) -> Result<SearchResponse, FindingError> {
        self.get_page(1).await
    }

    pub fn reset(&mut self) {
        self.item_filters.reset();
    }

    pub fn item_filters(&self) -> &ItemFilters {
        &self.item_filters
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }
}

impl FindingRequest for InStoresRequest {
    const OPERATION: Operation = Operation::FindItemsInEbayStores;
    type Response = SearchResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        let mut payload = RequestPayload {
            store_name: self.store_name.clone(),
            ..RequestPayload::default()
        };
        self.categories.write_to(&mut payload);
        self.keywords.write_to(&mut payload);
        write_item_filters(&mut self.item_filters, &mut payload);
        self.aspect_filters.write_to(&mut payload);
        self.output_selectors.write_to(&mut payload);
        self.standard.write_to(&mut payload);
        payload
    }

    fn apply_payload(&mut self, payload: &RequestPayload) {
        self.store_name = payload.store_name.clone();
        self.categories.read_from(payload);
        self.keywords.read_from(payload);
        read_item_filters(&mut self.item_filters, payload);
        self.aspect_filters.read_from(payload);
        self.output_selectors.read_from(payload);
        self.standard.read_from(payload);
    }
}

impl CategoryBuilder for InStoresRequest {
    fn categories_mut(&mut self) -> &mut Categories {
        &mut self.categories
    }
}

impl KeywordBuilder for InStoresRequest {
    fn keywords_mut(&mut self) -> &mut Keywords {
        &mut self.keywords
    }
}

impl ItemFilterBuilder for InStoresRequest {
    fn item_filters_mut(&mut self) -> &mut ItemFilters {
        &mut self.item_filters
    }
}

impl AspectFilterBuilder for InStoresRequest {
    fn aspect_filters_mut(&mut self) -> &mut AspectFilters {
        &mut self.aspect_filters
    }
}

impl OutputSelectorBuilder for InStoresRequest {
    fn output_selectors_mut(&mut self) -> &mut OutputSelectors {
        &mut self.output_selectors
    }
}

impl StandardBuilder for InStoresRequest {
    fn standard_mut(&mut self) -> &mut StandardInput {
        &mut self.standard
    }
}

/// `getHistograms`: category and aspect counts for one category.
#[derive(Debug, Clone)]
pub struct HistogramsRequest {
    transport: Transport,
    category_id: Option<String>,
}

impl HistogramsRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            category_id: None,
        }
    }

    /// Replaces the category; this operation takes exactly one.
    pub fn with_category_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.category_id = (!id.is_empty()).then_some(id);
        self
    }

    pub async fn execute(&mut self) -> Result<HistogramsResponse, FindingError> {
        dispatch(self).await
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }
}

impl FindingRequest for HistogramsRequest {
    const OPERATION: Operation = Operation::GetHistograms;
    type Response = HistogramsResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        RequestPayload {
            category_id: self.category_id.iter().cloned().collect(),
            ..RequestPayload::default()
        }
    }

    fn apply_payload(&mut self, payload: &RequestPayload) {
        self.category_id = payload.category_id.first().cloned();
    }
}

/// `getSearchKeywordsRecommendation`: spelling suggestions for a query.
#[derive(Debug, Clone)]
pub struct KeywordsRecommendationRequest {
    transport: Transport,
    keywords: Keywords,
}

impl KeywordsRecommendationRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            keywords: Keywords::default(),
        }
    }

    pub async fn execute(&mut self) -> Result<KeywordsRecommendationResponse, FindingError> {
        dispatch(self).await
    }

    pub fn keywords(&self) -> &str {
        self.keywords.get()
    }
}

impl FindingRequest for KeywordsRecommendationRequest {
    const OPERATION: Operation = Operation::GetSearchKeywordsRecommendation;
    type Response = KeywordsRecommendationResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        let mut payload = RequestPayload::default();
        self.keywords.write_to(&mut payload);
        payload
    }

    fn apply_payload(&mut self, payload: &RequestPayload) {
        self.keywords.read_from(payload);
    }
}

impl KeywordBuilder for KeywordsRecommendationRequest {
    fn keywords_mut(&mut self) -> &mut Keywords {
        &mut self.keywords
    }
}

/// `getVersion`: current service version. The body is empty.
#[derive(Debug, Clone)]
pub struct VersionRequest {
    transport: Transport,
}

impl VersionRequest {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn execute(&mut self) -> Result<VersionResponse, FindingError> {
        dispatch(self).await
    }
}

impl FindingRequest for VersionRequest {
    const OPERATION: Operation = Operation::GetVersion;
    type Response = VersionResponse;

    fn transport(&self) -> &Transport {
        &self.transport
    }

    fn payload(&mut self) -> RequestPayload {
        RequestPayload::default()
    }

    fn apply_payload(&mut self, _payload: &RequestPayload) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::{ServiceConfig, WireFormat};
    use crate::domain::{Currency, OutputSelector, SortOrder};
    use crate::filter::ItemFilterKind;
    use crate::http_client::{HttpResponse, StubHttpClient};

    fn json_transport() -> Transport {
        let config = ServiceConfig::new("app")
            .expect("valid app id")
            .with_wire_format(WireFormat::Json);
        Transport::new(
            config,
            Arc::new(StubHttpClient::responding(HttpResponse::ok("{}"))),
        )
    }

    fn body_json<R: FindingRequest>(request: &mut R) -> serde_json::Value {
        let body = request.body().expect("body encodes");
        serde_json::from_str(&body).expect("valid json")
    }

    #[test]
    fn advanced_request_writes_every_block() {
        let mut request = AdvancedRequest::new(json_transport())
            .with_category_id("267")
            .with_keywords("tolkien")
            .with_description_search(true)
            .with_item_filter_min_price_with_currency(5.0, Currency::Gbp)
            .with_aspect_filter("Format", ["Hardcover"])
            .with_output_selectors([OutputSelector::SellerInfo])
            .with_sort_order(SortOrder::EndTimeSoonest)
            .with_buyer_postal_code("SW1A 1AA");

        let body = body_json(&mut request);
        assert_eq!(body["categoryId"], serde_json::json!(["267"]));
        assert_eq!(body["keywords"], "tolkien");
        assert_eq!(body["descriptionSearch"], true);
        assert_eq!(body["itemFilter"][0]["name"], "MinPrice");
        assert_eq!(body["itemFilter"][0]["paramValue"], "GBP");
        assert_eq!(body["aspectFilter"][0]["aspectName"], "Format");
        assert_eq!(body["outputSelector"], serde_json::json!(["SellerInfo"]));
        assert_eq!(body["sortOrder"], "EndTimeSoonest");
        assert_eq!(body["buyerPostalCode"], "SW1A 1AA");
        assert_eq!(body["paginationInput"]["pageNumber"], 1);
        assert_eq!(body["paginationInput"]["entriesPerPage"], 100);
    }

    #[test]
    fn description_search_false_is_omitted() {
        let mut request = AdvancedRequest::new(json_transport()).with_description_search(false);
        let body = body_json(&mut request);
        assert!(body.get("descriptionSearch").is_none());
    }

    #[test]
    fn by_product_request_carries_product_reference() {
        let mut request = ByProductRequest::new(json_transport())
            .with_product_id(ProductType::Isbn, "9780261102385");

        let body = body_json(&mut request);
        assert_eq!(body["productId"]["type"], "ISBN");
        assert_eq!(body["productId"]["#text"], "9780261102385");
        assert!(body["productId"].get("@type").is_none());
    }

    #[test]
    fn in_stores_request_includes_store_name() {
        let mut request = InStoresRequest::new(json_transport())
            .with_store_name("Middle Earth Books")
            .with_keywords("hobbit");

        let body = body_json(&mut request);
        assert_eq!(body["storeName"], "Middle Earth Books");
        assert_eq!(body["keywords"], "hobbit");
    }

    #[test]
    fn histograms_request_takes_a_single_category() {
        let mut request = HistogramsRequest::new(json_transport())
            .with_category_id("267")
            .with_category_id("11116");

        let body = body_json(&mut request);
        assert_eq!(body["categoryId"], serde_json::json!(["11116"]));
        assert!(body.get("paginationInput").is_none());
    }

    #[test]
    fn version_request_body_is_empty() {
        let mut request = VersionRequest::new(json_transport());
        assert_eq!(request.body().expect("body"), "{}");
    }

    #[test]
    fn load_body_restores_request_state() {
        let mut original = ByCategoryRequest::new(json_transport())
            .with_category_ids(["1", "2"])
            .with_item_filter_seller(["alpha", "beta"])
            .with_page_limit(25);
        let body = original.body().expect("body");

        let mut restored = ByCategoryRequest::new(json_transport());
        restored.load_body(&body).expect("load");

        assert_eq!(restored.categories().ids(), ["1", "2"]);
        assert_eq!(
            restored
                .item_filters()
                .get(ItemFilterKind::Seller)
                .map(|filter| filter.values().to_vec()),
            Some(vec![String::from("alpha"), String::from("beta")])
        );
        assert_eq!(restored.body().expect("body"), body);
    }

    #[test]
    fn page_limit_defaults_to_service_configuration() {
        let config = ServiceConfig::new("app")
            .expect("valid app id")
            .with_page_limit(20)
            .with_wire_format(WireFormat::Json);
        let transport = Transport::new(
            config,
            Arc::new(StubHttpClient::responding(HttpResponse::ok("{}"))),
        );

        let mut request = ByKeywordsRequest::new(transport);
        let body = body_json(&mut request);
        assert_eq!(body["paginationInput"]["entriesPerPage"], 20);
    }
}
