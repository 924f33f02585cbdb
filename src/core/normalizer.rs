// @file: src/core/normalizer.rs
// @description: Decodes the chart payload and projects it into metadata and volume-filtered candles.
// @author: LAS.

use chrono::{Local, TimeZone};
use log::{debug, warn};
use serde::Deserialize;

use crate::core::errors::ChartError;
use crate::core::models::{Candle, InstrumentMetadata};

//
// CONSTANTS
//

const CANDLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";


//
// WIRE MODELS
//

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<EndpointError>,
}

#[derive(Debug, Deserialize)]
struct EndpointError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: InstrumentMetadata,
    #[serde(default, rename = "timestamp")]
    timestamps: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default, rename = "quote")]
    quotes: Vec<QuoteBlock>,
}

// Empty buckets arrive as JSON nulls
#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}


//
// PUBLIC INTERFACE
//

pub fn parse_chart(bytes: &[u8]) -> Result<(InstrumentMetadata, Vec<Candle>), ChartError> {
    parse_chart_in(bytes, &Local)
}

pub fn parse_chart_in<Tz>(
    bytes: &[u8],
    tz: &Tz,
) -> Result<(InstrumentMetadata, Vec<Candle>), ChartError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    // #1. Decode
    let envelope: ChartEnvelope = serde_json::from_slice(bytes)?;

    if let Some(err) = envelope.chart.error {
        return Err(ChartError::Endpoint {
            code: err.code,
            description: err.description,
        });
    }

    // #2. Project every result; the last metadata wins
    let mut metadata = InstrumentMetadata::default();
    let mut candles: Vec<Candle> = Vec::new();

    for result in envelope.chart.result.unwrap_or_default() {
        metadata = result.meta;
        for quote in &result.indicators.quotes {
            project_quote(quote, &result.timestamps, tz, &mut candles)?;
        }
    }

    debug!("Normalized {} candles for {}", candles.len(), metadata.symbol);
    Ok((metadata, candles))
}


//
// INTERNAL HELPERS
//

fn project_quote<Tz>(
    quote: &QuoteBlock,
    timestamps: &[i64],
    tz: &Tz,
    out: &mut Vec<Candle>,
) -> Result<(), ChartError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let len: usize = quote.open.len();
    check_aligned(quote, timestamps, len)?;

    if len < timestamps.len() {
        debug!("Quote block covers {} of {} timestamps", len, timestamps.len());
    }

    out.reserve(len);
    for i in 0..len {
        let volume: i64 = quote.volume[i].unwrap_or(0);
        if volume <= 0 {
            continue;
        }

        let (open, high, low, close) = match (quote.open[i], quote.high[i], quote.low[i], quote.close[i]) {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => {
                warn!("Skipping sample {} with volume {} but missing prices", timestamps[i], volume);
                continue;
            }
        };

        out.push(Candle {
            timestamp: format_timestamp(timestamps[i], tz)?,
            open,
            high,
            low,
            close,
            volume: volume as u64,
        });
    }
    Ok(())
}

// All series of a block share one length; the timestamp array must cover it.
fn check_aligned(quote: &QuoteBlock, timestamps: &[i64], len: usize) -> Result<(), ChartError> {
    let lengths: [(&'static str, usize); 4] = [
        ("high", quote.high.len()),
        ("low", quote.low.len()),
        ("close", quote.close.len()),
        ("volume", quote.volume.len()),
    ];

    for (field, field_len) in lengths {
        if field_len != len {
            return Err(ChartError::Misaligned {
                field,
                len: field_len,
                expected: len,
            });
        }
    }

    if timestamps.len() < len {
        return Err(ChartError::Misaligned {
            field: "timestamp",
            len: timestamps.len(),
            expected: len,
        });
    }
    Ok(())
}

pub fn format_timestamp<Tz>(unix_seconds: i64, tz: &Tz) -> Result<String, ChartError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(unix_seconds, 0)
        .single()
        .map(|instant| instant.format(CANDLE_TIME_FORMAT).to_string())
        .ok_or(ChartError::InvalidTimestamp(unix_seconds))
}
