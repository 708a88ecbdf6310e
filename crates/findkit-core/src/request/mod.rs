//! Per-operation request builders.
//!
//! A request is an aggregate of the [`blocks`] its operation accepts. The
//! builder traits in [`builders`] add the chained `with_*` setters on top of
//! those blocks, so every operation that embeds a block gets the same setters
//! and the same input policy.
//!
//! ```no_run
//! use findkit_core::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = FindingService::new("my-app-id")?;
//! let mut request = service
//!     .by_keywords_request()
//!     .with_keywords("tolkien")
//!     .with_item_filter_max_price_with_currency(10.0, Currency::Usd)
//!     .with_item_filter_free_shipping_only(true);
//!
//! let first = request.execute().await?;
//! let second = request.get_page(2).await?;
//! # let _ = (first, second);
//! # Ok(())
//! # }
//! ```

pub mod blocks;
pub mod builders;
pub mod operations;
pub mod payload;

use serde::de::DeserializeOwned;

use crate::domain::Operation;
use crate::service::Transport;
use crate::FindingError;

pub use blocks::{AspectFilters, Categories, Keywords, OutputSelectors, StandardInput};
pub use builders::{
    AspectFilterBuilder, CategoryBuilder, DescriptionSearchBuilder, ItemFilterBuilder,
    KeywordBuilder, OutputSelectorBuilder, StandardBuilder,
};
pub use operations::{
    AdvancedRequest, ByCategoryRequest, ByKeywordsRequest, ByProductRequest, HistogramsRequest,
    InStoresRequest, KeywordsRecommendationRequest, VersionRequest,
};
pub use payload::{Affiliate, AspectFilter, PaginationInput, ProductId, RequestPayload};

/// Behaviour common to all operation requests.
pub trait FindingRequest {
    const OPERATION: Operation;
    type Response: DeserializeOwned;

    fn transport(&self) -> &Transport;

    /// Finalizes item filters and collects every block into a payload.
    fn payload(&mut self) -> RequestPayload;

    /// Restores the request state from a decoded payload.
    fn apply_payload(&mut self, payload: &RequestPayload);

    /// Serialized body in the configured wire format, without sending it.
    fn body(&mut self) -> Result<String, FindingError> {
        let format = self.transport().wire_format();
        self.payload().encode(format, Self::OPERATION)
    }

    /// Parses `body` in the configured wire format and applies it.
    fn load_body(&mut self, body: &str) -> Result<(), FindingError> {
        let payload = RequestPayload::decode(body, self.transport().wire_format())?;
        self.apply_payload(&payload);
        Ok(())
    }
}

/// Encodes the request and performs one round trip.
pub(crate) async fn dispatch<R>(request: &mut R) -> Result<R::Response, FindingError>
where
    R: FindingRequest,
{
    let body = request.body()?;
    request.transport().send(R::OPERATION, body).await
}
