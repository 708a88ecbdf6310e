//! Domain vocabulary of the Finding service: site ids, enumerated filter
//! options and the wire timestamp format.

pub mod datetime;
pub mod global_id;
pub mod options;

pub use datetime::{from_wire_datetime, to_wire_datetime};
pub use global_id::GlobalId;
pub use options::{
    Condition, ConditionName, Currency, ExpeditedShippingType, ListingType, Operation,
    OutputSelector, PaymentMethod, ProductType, SellerBusinessType, SortOrder,
};
