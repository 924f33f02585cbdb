// @file: src/core/errors.rs
// @description: Typed failures for fetching and normalizing chart data.
// @author: LAS.

use thiserror::Error;

//
// ERROR TAXONOMY
//

#[derive(Debug, Error)]
pub enum ChartError {
    // Connection, DNS, TLS or body-read failure, passed through from reqwest
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Statuscode: {status} - Body: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    // The endpoint answered with a structured `chart.error` object
    #[error("endpoint error {code}: {description}")]
    Endpoint { code: String, description: String },

    #[error("series `{field}` has {len} values, expected {expected}")]
    Misaligned {
        field: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ChartError {
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ChartError::Decode(_) | ChartError::Misaligned { .. } | ChartError::InvalidTimestamp(_)
        )
    }
}
