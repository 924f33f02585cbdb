// @file: src/core/interfaces.rs
// @description: Transport seams used by the chart clients.
// @author: LAS.

use async_trait::async_trait;

use crate::core::errors::ChartError;

//
// RESPONSE ENVELOPE
//

// Body is read exactly once; both the error path and the success path use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_body(self) -> Result<Vec<u8>, ChartError> {
        if self.is_success() {
            return Ok(self.body);
        }
        Err(ChartError::HttpStatus {
            status: self.status,
            body: String::from_utf8_lossy(&self.body).into_owned(),
        })
    }
}


//
// TRAIT DEFINITIONS
//

pub trait ChartTransport {
    // One GET, no retries
    fn get(&self, url: &str) -> Result<HttpResponse, ChartError>;
}

#[async_trait]
pub trait AsyncChartTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, ChartError>;
}
