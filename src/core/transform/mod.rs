//! Record transformation
//!
//! Turns raw catalog records into storefront pricing items. Transformation
//! is pure: it never touches the network and keeps the input order. Records
//! that cannot be priced are dropped rather than defaulted.

pub mod pricing;

pub use pricing::{parse_price, to_pricing_item, transform, TransformReport};
