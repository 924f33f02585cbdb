// @file: src/connectors/http.rs
// @description: reqwest-backed transports, blocking and async.
// @author: LAS.

use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use crate::core::errors::ChartError;
use crate::core::interfaces::{AsyncChartTransport, ChartTransport, HttpResponse};

//
// SETTINGS
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub timeout: Option<Duration>, // None keeps the reqwest default
    pub user_agent: String,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}


//
// BLOCKING TRANSPORT
//

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(settings: &TransportSettings) -> Result<Self, ChartError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()? })
    }
}

impl ChartTransport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ChartError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let status: u16 = response.status().as_u16();
        let body: Vec<u8> = response.bytes()?.to_vec();
        Ok(HttpResponse { status, body })
    }
}


//
// ASYNC TRANSPORT
//

pub struct AsyncHttpTransport {
    client: reqwest::Client,
}

impl AsyncHttpTransport {
    pub fn new(settings: &TransportSettings) -> Result<Self, ChartError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()? })
    }
}

#[async_trait]
impl AsyncChartTransport for AsyncHttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ChartError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status: u16 = response.status().as_u16();
        let body: Vec<u8> = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
