//! # Findkit Core
//!
//! Typed client for the eBay Finding search service.
//!
//! ## Overview
//!
//! - **Request builders** for the eight Finding operations, configured through
//!   chained `with_*` setters
//! - **Item filter accumulation** with per-kind deduplication and caps
//! - **Two wire formats** (XML and JSON) over one request representation
//! - **HTTP transport** behind the [`HttpClient`] trait
//! - **Typed responses** for search results, histograms and service status
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Service configuration, endpoints and wire formats |
//! | [`domain`] | Site ids, enumerated filter options, wire timestamps |
//! | [`error`] | Fetch and validation errors |
//! | [`filter`] | Item filter accumulator and input policy |
//! | [`http_client`] | HTTP client abstraction |
//! | [`request`] | Per-operation request builders and payload codec |
//! | [`response`] | Response documents |
//! | [`service`] | Service entry point and transport |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use findkit_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = FindingService::new("my-app-id")?;
//!
//!     let mut request = service
//!         .advanced_request()
//!         .with_keywords("tolkien")
//!         .with_item_filter_condition([Condition::New, Condition::LikeNew])
//!         .with_page_limit(10);
//!
//!     let response = request.execute().await?;
//!     for item in response.items() {
//!         println!("{} {}", item.item_id, item.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Input Policy
//!
//! Setters never return errors. Out-of-range numbers are ignored, long
//! keyword strings are truncated and multi-valued filters stop growing at
//! their cap. Only the fetch path reports failures, as [`FindingError`]:
//!
//! ```rust
//! use findkit_core::FindingError;
//!
//! fn describe(error: &FindingError) -> &'static str {
//!     match error {
//!         FindingError::Serialization(_) => "request could not be encoded",
//!         FindingError::Transport { .. } => "service unreachable",
//!         FindingError::Status { .. } => "service rejected the call",
//!         FindingError::Deserialization(_) => "unexpected response",
//!     }
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod request;
pub mod response;
pub mod service;

// Configuration
pub use config::{ServiceConfig, WireFormat, PRODUCTION_ENDPOINT, SANDBOX_ENDPOINT};

// Domain vocabulary
pub use domain::{
    Condition, ConditionName, Currency, ExpeditedShippingType, GlobalId, ListingType, Operation,
    OutputSelector, PaymentMethod, ProductType, SellerBusinessType, SortOrder,
};

// Error types
pub use error::{FindingError, ValidationError};

// Item filters
pub use filter::{FilterLimits, ItemFilter, ItemFilterKind, ItemFilters};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StubHttpClient,
};

// Requests
pub use request::{
    AdvancedRequest, ByCategoryRequest, ByKeywordsRequest, ByProductRequest, FindingRequest,
    HistogramsRequest, InStoresRequest, KeywordsRecommendationRequest, RequestPayload,
    VersionRequest,
};

// Responses
pub use response::{
    Acknowledged, HistogramsResponse, Item, KeywordsRecommendationResponse, SearchResponse,
    VersionResponse,
};

// Service
pub use service::{FindingService, Transport};

/// Everything needed to build and send requests, including the builder
/// traits that provide the `with_*` setters.
pub mod prelude {
    pub use crate::request::{
        AspectFilterBuilder, CategoryBuilder, DescriptionSearchBuilder, FindingRequest,
        ItemFilterBuilder, KeywordBuilder, OutputSelectorBuilder, StandardBuilder,
    };
    pub use crate::response::Acknowledged;
    pub use crate::{
        Condition, ConditionName, Currency, ExpeditedShippingType, FindingError, FindingService,
        GlobalId, ListingType, OutputSelector, PaymentMethod, ProductType, SellerBusinessType,
        ServiceConfig, SortOrder, WireFormat,
    };
}
