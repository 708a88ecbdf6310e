//! Enumerated values accepted by the Finding service.
//!
//! Every option type exposes `as_str()` returning the exact wire token, an
//! `ALL` table and a case-insensitive `FromStr` over those tokens.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ValidationError;

fn parse_known<T: Copy>(
    kind: &'static str,
    all: &[T],
    token: fn(T) -> &'static str,
    value: &str,
) -> Result<T, ValidationError> {
    let trimmed = value.trim();
    all.iter()
        .copied()
        .find(|candidate| token(*candidate).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ValidationError::UnknownValue {
            kind,
            value: trimmed.to_owned(),
            expected: all
                .iter()
                .map(|candidate| token(*candidate))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Remote operation identifiers sent in the operation-name header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FindItemsAdvanced,
    FindItemsByCategory,
    FindItemsByKeywords,
    FindItemsByProduct,
    FindItemsInEbayStores,
    GetSearchKeywordsRecommendation,
    GetHistograms,
    GetVersion,
}

impl Operation {
    pub const ALL: [Self; 8] = [
        Self::FindItemsAdvanced,
        Self::FindItemsByCategory,
        Self::FindItemsByKeywords,
        Self::FindItemsByProduct,
        Self::FindItemsInEbayStores,
        Self::GetSearchKeywordsRecommendation,
        Self::GetHistograms,
        Self::GetVersion,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FindItemsAdvanced => "findItemsAdvanced",
            Self::FindItemsByCategory => "findItemsByCategory",
            Self::FindItemsByKeywords => "findItemsByKeywords",
            Self::FindItemsByProduct => "findItemsByProduct",
            Self::FindItemsInEbayStores => "findItemsIneBayStores",
            Self::GetSearchKeywordsRecommendation => "getSearchKeywordsRecommendation",
            Self::GetHistograms => "getHistograms",
            Self::GetVersion => "getVersion",
        }
    }

    /// Root element of the request document, e.g. `findItemsAdvancedRequest`.
    pub fn request_root(self) -> String {
        format!("{}Request", self.as_str())
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional response sections requested through `outputSelector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSelector {
    AspectHistogram,
    CategoryHistogram,
    ConditionHistogram,
    GalleryInfo,
    PictureUrlLarge,
    PictureUrlSuperSize,
    SellerInfo,
    StoreInfo,
    UnitPriceInfo,
}

impl OutputSelector {
    pub const ALL: [Self; 9] = [
        Self::AspectHistogram,
        Self::CategoryHistogram,
        Self::ConditionHistogram,
        Self::GalleryInfo,
        Self::PictureUrlLarge,
        Self::PictureUrlSuperSize,
        Self::SellerInfo,
        Self::StoreInfo,
        Self::UnitPriceInfo,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AspectHistogram => "AspectHistogram",
            Self::CategoryHistogram => "CategoryHistogram",
            Self::ConditionHistogram => "ConditionHistogram",
            Self::GalleryInfo => "GalleryInfo",
            Self::PictureUrlLarge => "PictureURLLarge",
            Self::PictureUrlSuperSize => "PictureURLSuperSize",
            Self::SellerInfo => "SellerInfo",
            Self::StoreInfo => "StoreInfo",
            Self::UnitPriceInfo => "UnitPriceInfo",
        }
    }
}

/// Result ordering; the service defaults to `BestMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    BestMatch,
    BidCountFewest,
    BidCountMost,
    CountryAscending,
    CountryDescending,
    CurrentPriceHighest,
    DistanceNearest,
    EndTimeSoonest,
    PricePlusShippingHighest,
    PricePlusShippingLowest,
    StartTimeNewest,
    WatchCountDecreaseSort,
}

impl SortOrder {
    pub const ALL: [Self; 12] = [
        Self::BestMatch,
        Self::BidCountFewest,
        Self::BidCountMost,
        Self::CountryAscending,
        Self::CountryDescending,
        Self::CurrentPriceHighest,
        Self::DistanceNearest,
        Self::EndTimeSoonest,
        Self::PricePlusShippingHighest,
        Self::PricePlusShippingLowest,
        Self::StartTimeNewest,
        Self::WatchCountDecreaseSort,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BestMatch => "BestMatch",
            Self::BidCountFewest => "BidCountFewest",
            Self::BidCountMost => "BidCountMost",
            Self::CountryAscending => "CountryAscending",
            Self::CountryDescending => "CountryDescending",
            Self::CurrentPriceHighest => "CurrentPriceHighest",
            Self::DistanceNearest => "DistanceNearest",
            Self::EndTimeSoonest => "EndTimeSoonest",
            Self::PricePlusShippingHighest => "PricePlusShippingHighest",
            Self::PricePlusShippingLowest => "PricePlusShippingLowest",
            Self::StartTimeNewest => "StartTimeNewest",
            Self::WatchCountDecreaseSort => "WatchCountDecreaseSort",
        }
    }
}

/// ISO currency codes accepted by the `Currency` filter and price parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Aud,
    Cad,
    Chf,
    Cny,
    Eur,
    Gbp,
    Hkd,
    Inr,
    Myr,
    Php,
    Pln,
    Sek,
    Sgd,
    Twd,
    /// Only valid for listings on the US, Motors and Canada sites.
    Usd,
}

impl Currency {
    pub const ALL: [Self; 15] = [
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
        Self::Eur,
        Self::Gbp,
        Self::Hkd,
        Self::Inr,
        Self::Myr,
        Self::Php,
        Self::Pln,
        Self::Sek,
        Self::Sgd,
        Self::Twd,
        Self::Usd,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Hkd => "HKD",
            Self::Inr => "INR",
            Self::Myr => "MYR",
            Self::Php => "PHP",
            Self::Pln => "PLN",
            Self::Sek => "SEK",
            Self::Sgd => "SGD",
            Self::Twd => "TWD",
            Self::Usd => "USD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpeditedShippingType {
    Expedited,
    OneDayShipping,
}

impl ExpeditedShippingType {
    pub const ALL: [Self; 2] = [Self::Expedited, Self::OneDayShipping];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expedited => "Expedited",
            Self::OneDayShipping => "OneDayShipping",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    PayPal,
    PaisaPay,
    PaisaPayEmi,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::PayPal, Self::PaisaPay, Self::PaisaPayEmi];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PayPal => "PayPal",
            Self::PaisaPay => "PaisaPay",
            Self::PaisaPayEmi => "PaisaPayEMI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SellerBusinessType {
    Business,
    Private,
}

impl SellerBusinessType {
    pub const ALL: [Self; 2] = [Self::Business, Self::Private];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Private => "Private",
        }
    }
}

/// Numeric item condition identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    NewOther,
    NewWithDefects,
    CertifiedRefurbished,
    /// Cell Phones & Smartphones (9355) on US, CA, UK, DE and AU only.
    ExcellentRefurbished,
    /// Cell Phones & Smartphones (9355) on US, CA, UK, DE and AU only.
    VeryGoodRefurbished,
    /// Cell Phones & Smartphones (9355) on US, CA, UK, DE and AU only.
    GoodRefurbished,
    /// Not accepted in Cell Phones & Smartphones (9355) on US, CA, UK, DE and AU.
    SellerRefurbished,
    LikeNew,
    Used,
    VeryGood,
    Good,
    Acceptable,
    ForPartsOrNotWorking,
}

impl Condition {
    pub const ALL: [Self; 14] = [
        Self::New,
        Self::NewOther,
        Self::NewWithDefects,
        Self::CertifiedRefurbished,
        Self::ExcellentRefurbished,
        Self::VeryGoodRefurbished,
        Self::GoodRefurbished,
        Self::SellerRefurbished,
        Self::LikeNew,
        Self::Used,
        Self::VeryGood,
        Self::Good,
        Self::Acceptable,
        Self::ForPartsOrNotWorking,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "1000",
            Self::NewOther => "1500",
            Self::NewWithDefects => "1750",
            Self::CertifiedRefurbished => "2000",
            Self::ExcellentRefurbished => "2010",
            Self::VeryGoodRefurbished => "2020",
            Self::GoodRefurbished => "2030",
            Self::SellerRefurbished => "2500",
            Self::LikeNew => "2750",
            Self::Used => "3000",
            Self::VeryGood => "4000",
            Self::Good => "5000",
            Self::Acceptable => "6000",
            Self::ForPartsOrNotWorking => "7000",
        }
    }
}

/// Condition names accepted by the `Condition` filter alongside numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionName {
    New,
    Used,
    Unspecified,
}

impl ConditionName {
    pub const ALL: [Self; 3] = [Self::New, Self::Used, Self::Unspecified];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Used => "Used",
            Self::Unspecified => "Unspecified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingType {
    Auction,
    AuctionWithBin,
    Classified,
    FixedPrice,
    StoreInventory,
    All,
}

impl ListingType {
    pub const ALL: [Self; 6] = [
        Self::Auction,
        Self::AuctionWithBin,
        Self::Classified,
        Self::FixedPrice,
        Self::StoreInventory,
        Self::All,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auction => "Auction",
            Self::AuctionWithBin => "AuctionWithBIN",
            Self::Classified => "Classified",
            Self::FixedPrice => "FixedPrice",
            Self::StoreInventory => "StoreInventory",
            Self::All => "All",
        }
    }
}

/// Identifier scheme of a `productId` in by-product searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    ReferenceId,
    Isbn,
    Upc,
    Ean,
}

impl ProductType {
    pub const ALL: [Self; 4] = [Self::ReferenceId, Self::Isbn, Self::Upc, Self::Ean];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReferenceId => "ReferenceID",
            Self::Isbn => "ISBN",
            Self::Upc => "UPC",
            Self::Ean => "EAN",
        }
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("operation", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for OutputSelector {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("output selector", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("sort order", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("currency", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for ExpeditedShippingType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("expedited shipping type", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("payment method", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for SellerBusinessType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("seller business type", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for Condition {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("condition", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for ConditionName {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("condition name", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for ListingType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("listing type", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for ProductType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_known("product type", &Self::ALL, Self::as_str, value)
    }
}
