// @file: src/utils/config.rs
// @description: Layered configuration (defaults, config file, APP_* env) for the chart loader.
// @author: LAS.

use serde::Deserialize;
use config::{Config, ConfigError, File, Environment};
use std::time::Duration;

use crate::connectors::http::TransportSettings;
use crate::core::errors::ChartError;
use crate::core::models::{DateRange, Interval};
use crate::core::query::{ChartQuery, DEFAULT_CHART_URL};

//
// TYPE DEFINITIONS
//

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,

    // Endpoint & Transport
    pub base_url: String,
    pub request_timeout_secs: u64, // 0 disables the timeout
    pub user_agent: String,

    // Request
    pub symbol: String,
    pub interval: String,
    pub range: String,
    pub fixed_date: Option<String>,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

impl AppConfig {
    //
    // PUBLIC INTERFACE
    //

    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("base_url", DEFAULT_CHART_URL)?
            .set_default("request_timeout_secs", 30)?
            .set_default("user_agent", "Mozilla/5.0")?
            .set_default("symbol", "ZAL.DE")?
            .set_default("interval", "5m")?
            .set_default("range", "1d")?

            // File & Env Overrides
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP"));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn to_query(&self) -> Result<ChartQuery, ChartError> {
        let interval: Interval = self.interval.parse()?;
        let query: ChartQuery = ChartQuery::new(self.symbol.clone())
            .base_url(self.base_url.clone())
            .interval(interval);

        // #1. Period wins over a fixed date, which wins over a range
        let query = match (&self.period_start, &self.period_end, &self.fixed_date) {
            (Some(start), Some(end), _) => query.period(start.clone(), end.clone()),
            (None, None, Some(date)) => query.fixed_date(date.clone()),
            (None, None, None) => query.date_range(self.range.parse::<DateRange>()?),
            _ => {
                return Err(ChartError::InvalidConfig(
                    "period_start and period_end must be set together".to_string(),
                ))
            }
        };
        Ok(query)
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            timeout: match self.request_timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            user_agent: self.user_agent.clone(),
        }
    }
}
