// @file: src/lib.rs
// @description: Exposes the chart query builder, normalizer and clients for the binary and tests.
// @author: LAS.


pub mod core;
pub mod connectors;
pub mod tests;
pub mod utils;

pub use crate::core::errors::ChartError;
pub use crate::core::models::{Candle, DateRange, InstrumentMetadata, Interval, QueryOption, TimeSelection};
pub use crate::core::query::ChartQuery;
