// @file: src/connectors/yahoo.rs
// @description: Chart client tying the query builder, a transport and the normalizer together.
// @author: LAS.

use log::info;

use crate::connectors::http::{AsyncHttpTransport, HttpTransport, TransportSettings};
use crate::core::errors::ChartError;
use crate::core::interfaces::{AsyncChartTransport, ChartTransport};
use crate::core::matrix::PriceMatrix;
use crate::core::models::{Candle, InstrumentMetadata};
use crate::core::normalizer::parse_chart;
use crate::core::query::ChartQuery;

//
// BLOCKING CLIENT
//

pub struct YahooClient<T = HttpTransport> {
    query: ChartQuery,
    transport: T,
}

impl YahooClient<HttpTransport> {
    pub fn new(query: ChartQuery, settings: &TransportSettings) -> Result<Self, ChartError> {
        Ok(Self::with_transport(query, HttpTransport::new(settings)?))
    }
}

impl<T: ChartTransport> YahooClient<T> {
    pub fn with_transport(query: ChartQuery, transport: T) -> Self {
        Self { query, transport }
    }

    pub fn query(&self) -> &ChartQuery {
        &self.query
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn load(&self) -> Result<(InstrumentMetadata, Vec<Candle>), ChartError> {
        // #1. Render and fetch
        let url: String = self.query.render();
        info!("Loading chart for {}", self.query.symbol());
        let body: Vec<u8> = self.transport.get(&url)?.into_body()?;

        // #2. Normalize
        parse_chart(&body)
    }

    pub fn load_matrix(&self) -> Result<(InstrumentMetadata, PriceMatrix), ChartError> {
        let (metadata, candles) = self.load()?;
        Ok((metadata, PriceMatrix::from_candles(&candles)))
    }
}


//
// ASYNC CLIENT
//

pub struct AsyncYahooClient<T = AsyncHttpTransport> {
    query: ChartQuery,
    transport: T,
}

impl AsyncYahooClient<AsyncHttpTransport> {
    pub fn new(query: ChartQuery, settings: &TransportSettings) -> Result<Self, ChartError> {
        Ok(Self::with_transport(query, AsyncHttpTransport::new(settings)?))
    }
}

impl<T: AsyncChartTransport> AsyncYahooClient<T> {
    pub fn with_transport(query: ChartQuery, transport: T) -> Self {
        Self { query, transport }
    }

    pub fn query(&self) -> &ChartQuery {
        &self.query
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn load(&self) -> Result<(InstrumentMetadata, Vec<Candle>), ChartError> {
        let url: String = self.query.render();
        info!("Loading chart for {}", self.query.symbol());
        let body: Vec<u8> = self.transport.get(&url).await?.into_body()?;
        parse_chart(&body)
    }

    pub async fn load_matrix(&self) -> Result<(InstrumentMetadata, PriceMatrix), ChartError> {
        let (metadata, candles) = self.load().await?;
        Ok((metadata, PriceMatrix::from_candles(&candles)))
    }
}
