//! Chained setters shared across operations.
//!
//! Every trait asks for a single accessor to the block it configures and
//! provides the consuming `with_*` methods on top of it. Setters never fail;
//! out-of-range input is dropped as described in [`crate::filter::policy`].

use time::OffsetDateTime;

use crate::domain::{
    to_wire_datetime, Condition, ConditionName, Currency, ExpeditedShippingType, GlobalId,
    ListingType, OutputSelector, PaymentMethod, SellerBusinessType, SortOrder,
};
use crate::filter::{policy, ItemFilterKind, ItemFilters};

use super::blocks::{AspectFilters, Categories, Keywords, OutputSelectors, StandardInput};
use super::payload::Affiliate;

pub trait CategoryBuilder: Sized {
    fn categories_mut(&mut self) -> &mut Categories;

    /// Adds one category id. Ids past the category cap are dropped.
    fn with_category_id(mut self, id: impl Into<String>) -> Self {
        self.categories_mut().push(id);
        self
    }

    fn with_category_id_int(self, id: i64) -> Self {
        self.with_category_id(id.to_string())
    }

    fn with_category_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = self.categories_mut();
        for id in ids {
            categories.push(id);
        }
        self
    }
}

pub trait KeywordBuilder: Sized {
    fn keywords_mut(&mut self) -> &mut Keywords;

    /// Sets the query string. Longer than 350 characters is truncated, empty
    /// clears, and a single character leaves the previous value in place.
    fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords_mut().set(keywords);
        self
    }
}

pub trait DescriptionSearchBuilder: Sized {
    fn description_search_mut(&mut self) -> &mut bool;

    /// Also match keywords against item descriptions.
    fn with_description_search(mut self, enabled: bool) -> Self {
        *self.description_search_mut() = enabled;
        self
    }
}

pub trait StandardBuilder: Sized {
    fn standard_mut(&mut self) -> &mut StandardInput;

    /// Clamped to `[1, 100]`.
    fn with_page_number(mut self, page: i64) -> Self {
        self.standard_mut().set_page_number(page);
        self
    }

    /// Clamped to `[1, 100]`.
    fn with_page_limit(mut self, limit: i64) -> Self {
        self.standard_mut().set_page_limit(limit);
        self
    }

    fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.standard_mut().set_sort_order(order);
        self
    }

    fn with_affiliate(mut self, network_id: &str, tracking_id: &str, custom_id: &str) -> Self {
        self.standard_mut()
            .set_affiliate(Affiliate::new(network_id, tracking_id, custom_id));
        self
    }

    fn with_buyer_postal_code(mut self, code: &str) -> Self {
        self.standard_mut().set_buyer_postal_code(code);
        self
    }
}

pub trait OutputSelectorBuilder: Sized {
    fn output_selectors_mut(&mut self) -> &mut OutputSelectors;

    fn with_output_selectors(mut self, selectors: impl IntoIterator<Item = OutputSelector>) -> Self {
        self.output_selectors_mut().extend(selectors);
        self
    }
}

pub trait AspectFilterBuilder: Sized {
    fn aspect_filters_mut(&mut self) -> &mut AspectFilters;

    fn with_aspect_filter<I, S>(mut self, aspect_name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aspect_filters_mut().push(aspect_name, values);
        self
    }
}

fn set_flag(filters: &mut ItemFilters, kind: ItemFilterKind, enabled: bool) {
    filters.set_single_value(kind, enabled.to_string());
}

fn set_integer(filters: &mut ItemFilters, kind: ItemFilterKind, value: i64, min: i64) {
    if let Some(encoded) = policy::integer_at_least(value, min) {
        filters.set_single_value(kind, encoded);
    }
}

fn set_price(filters: &mut ItemFilters, kind: ItemFilterKind, price: f64, currency: Option<Currency>) {
    let Some(encoded) = policy::price(price) else {
        return;
    };
    match currency {
        Some(currency) => filters.set_single_value_with_param(
            kind,
            encoded,
            ItemFilterKind::Currency.as_str(),
            currency.as_str(),
        ),
        None => filters.set_single_value(kind, encoded),
    }
}

fn set_time(filters: &mut ItemFilters, kind: ItemFilterKind, at: OffsetDateTime) {
    filters.set_single_value(kind, to_wire_datetime(at));
}

/// Typed setters for every item filter kind.
pub trait ItemFilterBuilder: Sized {
    fn item_filters_mut(&mut self) -> &mut ItemFilters;

    fn with_item_filter_authorized_seller_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::AuthorizedSellerOnly, enabled);
        self
    }

    /// Two-letter ISO 3166 country code. Not combinable with `LocatedIn`.
    fn with_item_filter_available_to(mut self, country_code: &str) -> Self {
        self.item_filters_mut()
            .set_single_value(ItemFilterKind::AvailableTo, country_code);
        self
    }

    fn with_item_filter_best_offer_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::BestOfferOnly, enabled);
        self
    }

    fn with_item_filter_charity_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::CharityOnly, enabled);
        self
    }

    fn with_item_filter_condition(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.item_filters_mut().add_capped_values(
            ItemFilterKind::Condition,
            conditions.into_iter().map(Condition::as_str),
        );
        self
    }

    /// Condition names share the `Condition` entry and its cap with ids.
    fn with_item_filter_condition_name(
        mut self,
        names: impl IntoIterator<Item = ConditionName>,
    ) -> Self {
        self.item_filters_mut().add_capped_values(
            ItemFilterKind::Condition,
            names.into_iter().map(ConditionName::as_str),
        );
        self
    }

    fn with_item_filter_currency(mut self, currency: Currency) -> Self {
        self.item_filters_mut()
            .set_single_value(ItemFilterKind::Currency, currency.as_str());
        self
    }

    fn with_item_filter_end_time_from(mut self, at: OffsetDateTime) -> Self {
        set_time(self.item_filters_mut(), ItemFilterKind::EndTimeFrom, at);
        self
    }

    fn with_item_filter_end_time_to(mut self, at: OffsetDateTime) -> Self {
        set_time(self.item_filters_mut(), ItemFilterKind::EndTimeTo, at);
        self
    }

    fn with_item_filter_exclude_auto_pay(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::ExcludeAutoPay, enabled);
        self
    }

    fn with_item_filter_exclude_category<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_filters_mut()
            .add_capped_values(ItemFilterKind::ExcludeCategory, categories);
        self
    }

    fn with_item_filter_exclude_seller<I, S>(mut self, sellers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_filters_mut()
            .add_capped_values(ItemFilterKind::ExcludeSeller, sellers);
        self
    }

    fn with_item_filter_expedited_shipping_type(mut self, shipping: ExpeditedShippingType) -> Self {
        self.item_filters_mut()
            .set_single_value(ItemFilterKind::ExpeditedShippingType, shipping.as_str());
        self
    }

    fn with_item_filter_featured_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::FeaturedOnly, enabled);
        self
    }

    fn with_item_filter_feedback_score_max(mut self, score: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::FeedbackScoreMax,
            score,
            policy::MIN_FEEDBACK_SCORE,
        );
        self
    }

    fn with_item_filter_feedback_score_min(mut self, score: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::FeedbackScoreMin,
            score,
            policy::MIN_FEEDBACK_SCORE,
        );
        self
    }

    fn with_item_filter_free_shipping_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::FreeShippingOnly, enabled);
        self
    }

    fn with_item_filter_get_it_fast_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::GetItFastOnly, enabled);
        self
    }

    fn with_item_filter_hide_duplicate_items(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::HideDuplicateItems, enabled);
        self
    }

    fn with_item_filter_listed_in(mut self, site: GlobalId) -> Self {
        self.item_filters_mut()
            .set_single_value(ItemFilterKind::ListedIn, site.as_str());
        self
    }

    fn with_item_filter_listing_type(
        mut self,
        listing_types: impl IntoIterator<Item = ListingType>,
    ) -> Self {
        self.item_filters_mut().add_capped_values(
            ItemFilterKind::ListingType,
            listing_types.into_iter().map(ListingType::as_str),
        );
        self
    }

    fn with_item_filter_local_pickup_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::LocalPickupOnly, enabled);
        self
    }

    /// Needs `MaxDistance` and a buyer postal code to take effect.
    fn with_item_filter_local_search_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::LocalSearchOnly, enabled);
        self
    }

    fn with_item_filter_located_in<I, S>(mut self, country_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_filters_mut()
            .add_capped_values(ItemFilterKind::LocatedIn, country_codes);
        self
    }

    fn with_item_filter_lots_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::LotsOnly, enabled);
        self
    }

    fn with_item_filter_max_bids(mut self, bids: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::MaxBids,
            bids,
            policy::MIN_BID_COUNT,
        );
        self
    }

    fn with_item_filter_max_distance(mut self, distance: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::MaxDistance,
            distance,
            policy::MIN_DISTANCE,
        );
        self
    }

    fn with_item_filter_max_handling_time(mut self, days: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::MaxHandlingTime,
            days,
            policy::MIN_HANDLING_TIME,
        );
        self
    }

    fn with_item_filter_max_price(mut self, price: f64) -> Self {
        set_price(self.item_filters_mut(), ItemFilterKind::MaxPrice, price, None);
        self
    }

    fn with_item_filter_max_price_with_currency(mut self, price: f64, currency: Currency) -> Self {
        set_price(
            self.item_filters_mut(),
            ItemFilterKind::MaxPrice,
            price,
            Some(currency),
        );
        self
    }

    fn with_item_filter_max_quantity(mut self, quantity: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::MaxQuantity,
            quantity,
            policy::MIN_QUANTITY,
        );
        self
    }

    fn with_item_filter_min_bids(mut self, bids: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::MinBids,
            bids,
            policy::MIN_BID_COUNT,
        );
        self
    }

    fn with_item_filter_min_price(mut self, price: f64) -> Self {
        set_price(self.item_filters_mut(), ItemFilterKind::MinPrice, price, None);
        self
    }

    fn with_item_filter_min_price_with_currency(mut self, price: f64, currency: Currency) -> Self {
        set_price(
            self.item_filters_mut(),
            ItemFilterKind::MinPrice,
            price,
            Some(currency),
        );
        self
    }

    fn with_item_filter_min_quantity(mut self, quantity: i64) -> Self {
        set_integer(
            self.item_filters_mut(),
            ItemFilterKind::MinQuantity,
            quantity,
            policy::MIN_QUANTITY,
        );
        self
    }

    /// Active items whose status changed since `at`.
    fn with_item_filter_mod_time_from(mut self, at: OffsetDateTime) -> Self {
        set_time(self.item_filters_mut(), ItemFilterKind::ModTimeFrom, at);
        self
    }

    fn with_item_filter_outlet_seller_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::OutletSellerOnly, enabled);
        self
    }

    fn with_item_filter_payment_method(mut self, method: PaymentMethod) -> Self {
        self.item_filters_mut()
            .set_single_value(ItemFilterKind::PaymentMethod, method.as_str());
        self
    }

    fn with_item_filter_returns_accepted_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::ReturnsAcceptedOnly, enabled);
        self
    }

    /// Not combinable with `ExcludeSeller`, `TopRatedSellerOnly` or
    /// `OutletSellerOnly`; the service reports the conflict.
    fn with_item_filter_seller<I, S>(mut self, sellers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_filters_mut()
            .add_capped_values(ItemFilterKind::Seller, sellers);
        self
    }

    fn with_item_filter_seller_business_type(mut self, business_type: SellerBusinessType) -> Self {
        self.item_filters_mut()
            .set_single_value(ItemFilterKind::SellerBusinessType, business_type.as_str());
        self
    }

    fn with_item_filter_sold_items_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::SoldItemsOnly, enabled);
        self
    }

    fn with_item_filter_start_time_from(mut self, at: OffsetDateTime) -> Self {
        set_time(self.item_filters_mut(), ItemFilterKind::StartTimeFrom, at);
        self
    }

    fn with_item_filter_start_time_to(mut self, at: OffsetDateTime) -> Self {
        set_time(self.item_filters_mut(), ItemFilterKind::StartTimeTo, at);
        self
    }

    fn with_item_filter_top_rated_seller_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::TopRatedSellerOnly, enabled);
        self
    }

    fn with_item_filter_value_box_inventory(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::ValueBoxInventory, enabled);
        self
    }

    fn with_item_filter_world_of_good_only(mut self, enabled: bool) -> Self {
        set_flag(self.item_filters_mut(), ItemFilterKind::WorldOfGoodOnly, enabled);
        self
    }
}
