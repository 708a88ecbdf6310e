//! Building blocks shared by the operation request shapes.
//!
//! Each block owns one slice of the request state and knows how to copy it
//! into (and back out of) a [`RequestPayload`].

use crate::domain::{OutputSelector, SortOrder};
use crate::filter::policy;

use super::payload::{Affiliate, AspectFilter, PaginationInput, RequestPayload};

pub(crate) trait PayloadBlock {
    fn write_to(&self, payload: &mut RequestPayload);
    fn read_from(&mut self, payload: &RequestPayload);
}

/// Category ids in call order, capped. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories {
    ids: Vec<String>,
    cap: usize,
}

impl Categories {
    pub fn new(cap: usize) -> Self {
        Self {
            ids: Vec::new(),
            cap,
        }
    }

    /// Appends `id` unless the list is full.
    pub fn push(&mut self, id: impl Into<String>) {
        policy::push_capped(&mut self.ids, id.into(), self.cap);
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl PayloadBlock for Categories {
    fn write_to(&self, payload: &mut RequestPayload) {
        payload.category_id = self.ids.clone();
    }

    fn read_from(&mut self, payload: &RequestPayload) {
        self.ids.clear();
        for id in &payload.category_id {
            self.push(id.clone());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    value: String,
}

impl Keywords {
    /// See [`policy::keywords`] for the length rules.
    pub fn set(&mut self, input: &str) {
        self.value = policy::keywords(&self.value, input);
    }

    pub fn get(&self) -> &str {
        &self.value
    }
}

impl PayloadBlock for Keywords {
    fn write_to(&self, payload: &mut RequestPayload) {
        payload.keywords = (!self.value.is_empty()).then(|| self.value.clone());
    }

    fn read_from(&mut self, payload: &RequestPayload) {
        self.value = payload.keywords.clone().unwrap_or_default();
    }
}

/// Pagination, sort order, affiliate and buyer postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardInput {
    page_number: u32,
    page_limit: u32,
    sort_order: Option<SortOrder>,
    affiliate: Option<Affiliate>,
    buyer_postal_code: Option<String>,
}

impl StandardInput {
    pub fn new(page_limit: u32) -> Self {
        Self {
            page_number: 1,
            page_limit: policy::page(i64::from(page_limit)),
            sort_order: None,
            affiliate: None,
            buyer_postal_code: None,
        }
    }

    pub fn set_page_number(&mut self, page: i64) {
        self.page_number = policy::page(page);
    }

    pub fn set_page_limit(&mut self, limit: i64) {
        self.page_limit = policy::page(limit);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = Some(order);
    }

    pub fn set_affiliate(&mut self, affiliate: Affiliate) {
        self.affiliate = Some(affiliate);
    }

    /// An empty code clears the field.
    pub fn set_buyer_postal_code(&mut self, code: &str) {
        self.buyer_postal_code = (!code.is_empty()).then(|| code.to_owned());
    }

    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    pub const fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub const fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }
}

impl PayloadBlock for StandardInput {
    fn write_to(&self, payload: &mut RequestPayload) {
        payload.pagination_input = Some(PaginationInput {
            entries_per_page: self.page_limit,
            page_number: self.page_number,
        });
        payload.sort_order = self.sort_order.map(|order| order.as_str().to_owned());
        payload.affiliate = self.affiliate.clone();
        payload.buyer_postal_code = self.buyer_postal_code.clone();
    }

    fn read_from(&mut self, payload: &RequestPayload) {
        if let Some(pagination) = payload.pagination_input {
            self.set_page_number(i64::from(pagination.page_number));
            self.set_page_limit(i64::from(pagination.entries_per_page));
        }
        self.sort_order = payload
            .sort_order
            .as_deref()
            .and_then(|order| order.parse().ok());
        self.affiliate = payload.affiliate.clone();
        self.buyer_postal_code = payload.buyer_postal_code.clone();
    }
}

/// Output selectors in call order. Repeats are sent as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSelectors {
    selectors: Vec<OutputSelector>,
}

impl OutputSelectors {
    pub fn extend(&mut self, selectors: impl IntoIterator<Item = OutputSelector>) {
        self.selectors.extend(selectors);
    }

    pub fn selectors(&self) -> &[OutputSelector] {
        &self.selectors
    }
}

impl PayloadBlock for OutputSelectors {
    fn write_to(&self, payload: &mut RequestPayload) {
        payload.output_selector = self
            .selectors
            .iter()
            .map(|selector| selector.as_str().to_owned())
            .collect();
    }

    fn read_from(&mut self, payload: &RequestPayload) {
        self.selectors = payload
            .output_selector
            .iter()
            .filter_map(|selector| selector.parse().ok())
            .collect();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspectFilters {
    filters: Vec<AspectFilter>,
}

impl AspectFilters {
    /// Appends an aspect filter. Empty names and empty value lists are ignored.
    pub fn push<I, S>(&mut self, aspect_name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if aspect_name.is_empty() || values.is_empty() {
            return;
        }
        self.filters.push(AspectFilter {
            aspect_name: aspect_name.to_owned(),
            aspect_value_name: values,
        });
    }

    pub fn filters(&self) -> &[AspectFilter] {
        &self.filters
    }
}

impl PayloadBlock for AspectFilters {
    fn write_to(&self, payload: &mut RequestPayload) {
        payload.aspect_filter = self.filters.clone();
    }

    fn read_from(&mut self, payload: &RequestPayload) {
        self.filters = payload.aspect_filter.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_the_first_ids_in_call_order() {
        let mut categories = Categories::new(3);
        for id in ["10", "20", "10", "30"] {
            categories.push(id);
        }
        assert_eq!(categories.ids(), ["10", "20", "10"]);
    }

    #[test]
    fn standard_input_clamps_pagination() {
        let mut standard = StandardInput::new(100);
        standard.set_page_number(0);
        standard.set_page_limit(250);

        assert_eq!(standard.page_number(), 1);
        assert_eq!(standard.page_limit(), 100);
    }

    #[test]
    fn aspect_filters_need_a_name_and_values() {
        let mut aspects = AspectFilters::default();
        aspects.push("", ["Red"]);
        aspects.push("Color", Vec::<String>::new());
        aspects.push("Color", ["Red", "Blue"]);

        assert_eq!(aspects.filters().len(), 1);
        assert_eq!(aspects.filters()[0].aspect_value_name, ["Red", "Blue"]);
    }

    #[test]
    fn empty_keywords_are_left_out_of_the_payload() {
        let mut payload = RequestPayload::default();
        Keywords::default().write_to(&mut payload);
        assert_eq!(payload.keywords, None);
    }

    #[test]
    fn output_selectors_read_back_known_tokens_only() {
        let payload = RequestPayload {
            output_selector: vec![String::from("SellerInfo"), String::from("Bogus")],
            ..RequestPayload::default()
        };
        let mut selectors = OutputSelectors::default();
        selectors.read_from(&payload);

        assert_eq!(selectors.selectors(), [OutputSelector::SellerInfo]);
    }
}
