// @file: src/connectors/mod.rs
// @description: HTTP transports and the chart endpoint client.
// @author: LAS.

pub mod http;
pub mod yahoo;

pub use http::{AsyncHttpTransport, HttpTransport, TransportSettings};
pub use yahoo::{AsyncYahooClient, YahooClient};
