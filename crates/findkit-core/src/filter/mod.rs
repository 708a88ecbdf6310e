//! Item filter accumulation.
//!
//! [`ItemFilters`] keeps at most one [`ItemFilter`] per [`ItemFilterKind`] and
//! offers two update disciplines:
//!
//! | Operation | Semantics |
//! |-----------|-----------|
//! | [`ItemFilters::set_single_value`] | replace the entry with exactly one value (last write wins) |
//! | [`ItemFilters::set_single_value_with_param`] | same, plus one `paramName`/`paramValue` pair |
//! | [`ItemFilters::add_values`] | set-union append, silently capped |
//!
//! [`ItemFilters::finalize`] flattens the map into the list that is
//! serialized. The order of that list is not part of the contract.

pub mod policy;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Named search-narrowing directives accepted by the search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemFilterKind {
    AuthorizedSellerOnly,
    AvailableTo,
    BestOfferOnly,
    CharityOnly,
    Condition,
    Currency,
    EndTimeFrom,
    EndTimeTo,
    ExcludeAutoPay,
    ExcludeCategory,
    ExcludeSeller,
    ExpeditedShippingType,
    FeaturedOnly,
    FeedbackScoreMax,
    FeedbackScoreMin,
    FreeShippingOnly,
    GetItFastOnly,
    HideDuplicateItems,
    ListedIn,
    ListingType,
    LocalPickupOnly,
    LocalSearchOnly,
    LocatedIn,
    LotsOnly,
    MaxBids,
    MaxDistance,
    MaxHandlingTime,
    MaxPrice,
    MaxQuantity,
    MinBids,
    MinPrice,
    MinQuantity,
    ModTimeFrom,
    OutletSellerOnly,
    PaymentMethod,
    ReturnsAcceptedOnly,
    Seller,
    SellerBusinessType,
    SoldItemsOnly,
    StartTimeFrom,
    StartTimeTo,
    TopRatedSellerOnly,
    ValueBoxInventory,
    WorldOfGoodOnly,
}

impl ItemFilterKind {
    pub const ALL: [Self; 44] = [
        Self::AuthorizedSellerOnly,
        Self::AvailableTo,
        Self::BestOfferOnly,
        Self::CharityOnly,
        Self::Condition,
        Self::Currency,
        Self::EndTimeFrom,
        Self::EndTimeTo,
        Self::ExcludeAutoPay,
        Self::ExcludeCategory,
        Self::ExcludeSeller,
        Self::ExpeditedShippingType,
        Self::FeaturedOnly,
        Self::FeedbackScoreMax,
        Self::FeedbackScoreMin,
        Self::FreeShippingOnly,
        Self::GetItFastOnly,
        Self::HideDuplicateItems,
        Self::ListedIn,
        Self::ListingType,
        Self::LocalPickupOnly,
        Self::LocalSearchOnly,
        Self::LocatedIn,
        Self::LotsOnly,
        Self::MaxBids,
        Self::MaxDistance,
        Self::MaxHandlingTime,
        Self::MaxPrice,
        Self::MaxQuantity,
        Self::MinBids,
        Self::MinPrice,
        Self::MinQuantity,
        Self::ModTimeFrom,
        Self::OutletSellerOnly,
        Self::PaymentMethod,
        Self::ReturnsAcceptedOnly,
        Self::Seller,
        Self::SellerBusinessType,
        Self::SoldItemsOnly,
        Self::StartTimeFrom,
        Self::StartTimeTo,
        Self::TopRatedSellerOnly,
        Self::ValueBoxInventory,
        Self::WorldOfGoodOnly,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizedSellerOnly => "AuthorizedSellerOnly",
            Self::AvailableTo => "AvailableTo",
            Self::BestOfferOnly => "BestOfferOnly",
            Self::CharityOnly => "CharityOnly",
            Self::Condition => "Condition",
            Self::Currency => "Currency",
            Self::EndTimeFrom => "EndTimeFrom",
            Self::EndTimeTo => "EndTimeTo",
            Self::ExcludeAutoPay => "ExcludeAutoPay",
            Self::ExcludeCategory => "ExcludeCategory",
            Self::ExcludeSeller => "ExcludeSeller",
            Self::ExpeditedShippingType => "ExpeditedShippingType",
            Self::FeaturedOnly => "FeaturedOnly",
            Self::FeedbackScoreMax => "FeedbackScoreMax",
            Self::FeedbackScoreMin => "FeedbackScoreMin",
            Self::FreeShippingOnly => "FreeShippingOnly",
            Self::GetItFastOnly => "GetItFastOnly",
            Self::HideDuplicateItems => "HideDuplicateItems",
            Self::ListedIn => "ListedIn",
            Self::ListingType => "ListingType",
            Self::LocalPickupOnly => "LocalPickupOnly",
            Self::LocalSearchOnly => "LocalSearchOnly",
            Self::LocatedIn => "LocatedIn",
            Self::LotsOnly => "LotsOnly",
            Self::MaxBids => "MaxBids",
            Self::MaxDistance => "MaxDistance",
            Self::MaxHandlingTime => "MaxHandlingTime",
            Self::MaxPrice => "MaxPrice",
            Self::MaxQuantity => "MaxQuantity",
            Self::MinBids => "MinBids",
            Self::MinPrice => "MinPrice",
            Self::MinQuantity => "MinQuantity",
            Self::ModTimeFrom => "ModTimeFrom",
            Self::OutletSellerOnly => "OutletSellerOnly",
            Self::PaymentMethod => "PaymentMethod",
            Self::ReturnsAcceptedOnly => "ReturnsAcceptedOnly",
            Self::Seller => "Seller",
            Self::SellerBusinessType => "SellerBusinessType",
            Self::SoldItemsOnly => "SoldItemsOnly",
            Self::StartTimeFrom => "StartTimeFrom",
            Self::StartTimeTo => "StartTimeTo",
            Self::TopRatedSellerOnly => "TopRatedSellerOnly",
            Self::ValueBoxInventory => "ValueBoxInventory",
            Self::WorldOfGoodOnly => "WorldOfGoodOnly",
        }
    }
}

impl Display for ItemFilterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemFilterKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == trimmed)
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "item filter",
                value: trimmed.to_owned(),
                expected: String::from("a Finding item filter name"),
            })
    }
}

impl TryFrom<String> for ItemFilterKind {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemFilterKind> for String {
    fn from(value: ItemFilterKind) -> Self {
        value.as_str().to_owned()
    }
}

/// Per-kind caps for multi-valued filters and the category list.
///
/// Defaults follow the service's documented limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterLimits {
    pub categories: usize,
    pub sellers: usize,
    pub exclude_categories: usize,
    pub located_in: usize,
    pub conditions: usize,
    pub listing_types: usize,
}

impl FilterLimits {
    pub const fn cap_for(&self, kind: ItemFilterKind) -> Option<usize> {
        match kind {
            ItemFilterKind::Seller | ItemFilterKind::ExcludeSeller => Some(self.sellers),
            ItemFilterKind::ExcludeCategory => Some(self.exclude_categories),
            ItemFilterKind::LocatedIn => Some(self.located_in),
            ItemFilterKind::Condition => Some(self.conditions),
            ItemFilterKind::ListingType => Some(self.listing_types),
            _ => None,
        }
    }
}

impl Default for FilterLimits {
    fn default() -> Self {
        Self {
            categories: 3,
            sellers: 100,
            exclude_categories: 25,
            located_in: 25,
            // 14 known condition ids; names share the same slot.
            conditions: 14,
            listing_types: 6,
        }
    }
}

/// One named filter directive as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFilter {
    name: ItemFilterKind,
    #[serde(default)]
    value: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    param_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    param_value: Option<String>,
}

impl ItemFilter {
    fn single(kind: ItemFilterKind, value: String) -> Self {
        Self {
            name: kind,
            value: vec![value],
            param_name: None,
            param_value: None,
        }
    }

    pub const fn kind(&self) -> ItemFilterKind {
        self.name
    }

    pub fn values(&self) -> &[String] {
        &self.value
    }

    /// The auxiliary parameter pair, present only as a whole.
    pub fn param(&self) -> Option<(&str, &str)> {
        match (&self.param_name, &self.param_value) {
            (Some(name), Some(value)) => Some((name.as_str(), value.as_str())),
            _ => None,
        }
    }
}

/// Keyed accumulator of item filters owned by one request.
///
/// Not synchronized: a request and its filters are meant to be configured and
/// sent by one caller at a time. Clone the request for concurrent use.
#[derive(Debug, Clone, Default)]
pub struct ItemFilters {
    entries: BTreeMap<ItemFilterKind, ItemFilter>,
    built: Option<Vec<ItemFilter>>,
    limits: FilterLimits,
}

impl ItemFilters {
    pub fn new(limits: FilterLimits) -> Self {
        Self {
            entries: BTreeMap::new(),
            built: None,
            limits,
        }
    }

    pub const fn limits(&self) -> &FilterLimits {
        &self.limits
    }

    /// Replaces the entry for `kind` with exactly one value.
    pub fn set_single_value(&mut self, kind: ItemFilterKind, value: impl Into<String>) {
        self.entries
            .insert(kind, ItemFilter::single(kind, value.into()));
        self.built = None;
    }

    /// Replaces the entry for `kind` with one value and a parameter pair.
    pub fn set_single_value_with_param(
        &mut self,
        kind: ItemFilterKind,
        value: impl Into<String>,
        param_name: impl Into<String>,
        param_value: impl Into<String>,
    ) {
        let mut filter = ItemFilter::single(kind, value.into());
        filter.param_name = Some(param_name.into());
        filter.param_value = Some(param_value.into());
        self.entries.insert(kind, filter);
        self.built = None;
    }

    /// Merges `values` into the entry for `kind` until it holds `cap`
    /// distinct values; the remainder is dropped. An empty `values` leaves the
    /// accumulator untouched. Any parameter pair on the entry is cleared.
    pub fn add_values<I, S>(&mut self, kind: ItemFilterKind, cap: usize, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter().map(Into::into).peekable();
        if values.peek().is_none() {
            return;
        }

        let mut merged = self
            .entries
            .remove(&kind)
            .map(|filter| filter.value)
            .unwrap_or_default();
        policy::union_capped(&mut merged, values, cap);

        if merged.is_empty() {
            // Only reachable with a zero cap.
            return;
        }

        self.entries.insert(
            kind,
            ItemFilter {
                name: kind,
                value: merged,
                param_name: None,
                param_value: None,
            },
        );
        self.built = None;
    }

    /// [`Self::add_values`] using the configured cap for `kind`.
    ///
    /// Kinds without a configured cap are not limited.
    pub fn add_capped_values<I, S>(&mut self, kind: ItemFilterKind, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cap = self.limits.cap_for(kind).unwrap_or(usize::MAX);
        self.add_values(kind, cap, values);
    }

    /// Returns the flattened filter list, building it on first use.
    ///
    /// Repeated calls return the cached list until the accumulator is mutated
    /// or [`Self::reset`] is called.
    pub fn finalize(&mut self) -> &[ItemFilter] {
        let entries = &self.entries;
        self.built
            .get_or_insert_with(|| entries.values().cloned().collect())
    }

    /// Drops the cached list so the next [`Self::finalize`] rebuilds it.
    pub fn reset(&mut self) {
        self.built = None;
    }

    pub const fn is_finalized(&self) -> bool {
        self.built.is_some()
    }

    pub fn get(&self, kind: ItemFilterKind) -> Option<&ItemFilter> {
        self.entries.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds an accumulator from a decoded filter list. Later duplicates of
    /// a kind replace earlier ones.
    pub fn from_filters(limits: FilterLimits, filters: impl IntoIterator<Item = ItemFilter>) -> Self {
        let entries = filters
            .into_iter()
            .filter(|filter| !filter.value.is_empty())
            .map(|filter| (filter.kind(), filter))
            .collect();
        Self {
            entries,
            built: None,
            limits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_is_last_write_wins() {
        let mut filters = ItemFilters::default();
        filters.set_single_value(ItemFilterKind::Currency, "USD");
        filters.set_single_value(ItemFilterKind::Currency, "EUR");

        assert_eq!(filters.len(), 1);
        let entry = filters.get(ItemFilterKind::Currency).expect("entry");
        assert_eq!(entry.values(), ["EUR"]);
        assert_eq!(entry.param(), None);
    }

    #[test]
    fn single_value_drops_previous_parameter_pair() {
        let mut filters = ItemFilters::default();
        filters.set_single_value_with_param(ItemFilterKind::MaxPrice, "10.00", "Currency", "USD");
        filters.set_single_value(ItemFilterKind::MaxPrice, "12.00");

        let entry = filters.get(ItemFilterKind::MaxPrice).expect("entry");
        assert_eq!(entry.values(), ["12.00"]);
        assert_eq!(entry.param(), None);
    }

    #[test]
    fn param_pair_overwrites_previous_pair() {
        let mut filters = ItemFilters::default();
        filters.set_single_value_with_param(ItemFilterKind::MinPrice, "1.00", "Currency", "USD");
        filters.set_single_value_with_param(ItemFilterKind::MinPrice, "2.00", "Currency", "GBP");

        let entry = filters.get(ItemFilterKind::MinPrice).expect("entry");
        assert_eq!(entry.values(), ["2.00"]);
        assert_eq!(entry.param(), Some(("Currency", "GBP")));
    }

    #[test]
    fn add_values_with_empty_input_creates_nothing() {
        let mut filters = ItemFilters::default();
        filters.add_values(ItemFilterKind::Seller, 100, Vec::<String>::new());

        assert!(filters.is_empty());
        assert!(filters.finalize().is_empty());
    }

    #[test]
    fn add_values_deduplicates_and_caps() {
        let mut filters = ItemFilters::default();
        filters.add_values(ItemFilterKind::ListingType, 3, ["a", "b", "a"]);
        filters.add_values(ItemFilterKind::ListingType, 3, ["b", "c", "d"]);

        let entry = filters.get(ItemFilterKind::ListingType).expect("entry");
        assert_eq!(entry.values(), ["a", "b", "c"]);
    }

    #[test]
    fn capped_values_use_configured_limits() {
        let limits = FilterLimits {
            located_in: 2,
            ..FilterLimits::default()
        };
        let mut filters = ItemFilters::new(limits);
        filters.add_capped_values(ItemFilterKind::LocatedIn, ["US", "GB", "DE"]);

        let entry = filters.get(ItemFilterKind::LocatedIn).expect("entry");
        assert_eq!(entry.values(), ["US", "GB"]);
    }

    #[test]
    fn finalize_is_cached_until_mutation_or_reset() {
        let mut filters = ItemFilters::default();
        filters.set_single_value(ItemFilterKind::LotsOnly, "true");

        assert!(!filters.is_finalized());
        let first = filters.finalize().to_vec();
        assert!(filters.is_finalized());
        assert_eq!(filters.finalize(), first.as_slice());

        filters.reset();
        assert!(!filters.is_finalized());
        assert_eq!(filters.finalize(), first.as_slice());

        filters.set_single_value(ItemFilterKind::FeaturedOnly, "true");
        assert!(!filters.is_finalized());
        assert_eq!(filters.finalize().len(), 2);
    }

    #[test]
    fn finalize_never_duplicates_entries() {
        let mut filters = ItemFilters::default();
        filters.set_single_value(ItemFilterKind::Currency, "USD");
        for _ in 0..3 {
            assert_eq!(filters.finalize().len(), 1);
        }
    }

    #[test]
    fn kind_round_trips_through_its_wire_name() {
        for kind in ItemFilterKind::ALL {
            assert_eq!(kind.as_str().parse::<ItemFilterKind>(), Ok(kind));
        }
        assert!("maxprice".parse::<ItemFilterKind>().is_err());
    }

    #[test]
    fn from_filters_rebuilds_entries() {
        let mut original = ItemFilters::default();
        original.set_single_value_with_param(ItemFilterKind::MaxPrice, "75.00", "Currency", "USD");
        original.add_values(ItemFilterKind::Seller, 100, ["alpha", "beta"]);

        let rebuilt =
            ItemFilters::from_filters(FilterLimits::default(), original.finalize().to_vec());

        assert_eq!(rebuilt.len(), 2);
        assert_eq!(
            rebuilt.get(ItemFilterKind::MaxPrice),
            original.get(ItemFilterKind::MaxPrice)
        );
        assert_eq!(
            rebuilt.get(ItemFilterKind::Seller).map(ItemFilter::values),
            Some(["alpha".to_owned(), "beta".to_owned()].as_slice())
        );
    }
}
