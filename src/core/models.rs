// @file: src/core/models.rs
// @description: Request options, instrument metadata and candle structures.
// @author: LAS.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::ChartError;


//
// REQUEST OPTIONS
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Interval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::ThirtyMinutes => "30m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DateRange {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "1y")]
    OneYear,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::OneDay => "1d",
            DateRange::OneWeek => "1wk",
            DateRange::OneMonth => "1mo",
            DateRange::OneYear => "1y",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Interval::OneMinute),
            "5m" => Ok(Interval::FiveMinutes),
            "30m" => Ok(Interval::ThirtyMinutes),
            "1h" => Ok(Interval::OneHour),
            "4h" => Ok(Interval::FourHours),
            "1d" => Ok(Interval::OneDay),
            other => Err(ChartError::InvalidConfig(format!("unknown interval `{}`", other))),
        }
    }
}

impl FromStr for DateRange {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(DateRange::OneDay),
            "1wk" => Ok(DateRange::OneWeek),
            "1mo" => Ok(DateRange::OneMonth),
            "1y" => Ok(DateRange::OneYear),
            other => Err(ChartError::InvalidConfig(format!("unknown date range `{}`", other))),
        }
    }
}

// Exactly one selection is active; applying another one replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSelection {
    Range(DateRange),
    // "YYYY-MM-DD", expanded to the whole day at render time
    FixedDate(String),
    Period { start: String, end: String },
}

// Ordered option list, applied left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOption {
    Interval(Interval),
    DateRange(DateRange),
    FixedDate(String),
    Period(String, String),
}


//
// RESPONSE STRUCTURES
//

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InstrumentMetadata {
    pub currency: String,
    pub symbol: String,
    pub exchange_name: String,
    pub regular_market_price: f64,
    pub data_granularity: String,
    pub range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    pub timestamp: String, // local wall clock, "YYYY-MM-DD HH:MM"
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,       // always > 0
}

impl fmt::Display for InstrumentMetadata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {} [{} / {}]",
            self.symbol,
            self.exchange_name,
            self.regular_market_price,
            self.currency,
            self.data_granularity,
            self.range
        )
    }
}

impl fmt::Display for Candle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} O:{} H:{} L:{} C:{} V:{}",
            self.timestamp, self.open, self.high, self.low, self.close, self.volume
        )
    }
}
