// @file: src/core/query.rs
// @description: Builds the chart request descriptor and renders it into a query URL.
// @author: LAS.

use chrono::{Local, NaiveDateTime, TimeZone};
use url::form_urlencoded::byte_serialize;

use crate::core::models::{DateRange, Interval, QueryOption, TimeSelection};

//
// CONSTANTS
//

pub const DEFAULT_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const FIXED_PARAMS: &str = "includePrePost=true&events=div%7Csplit%7Cearn&corsDomain=finance.yahoo.com";


//
// REQUEST DESCRIPTOR
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartQuery {
    symbol: String,
    interval: Interval,
    selection: TimeSelection,
    base_url: String,
}

impl ChartQuery {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            interval: Interval::OneDay,
            selection: TimeSelection::Range(DateRange::OneMonth),
            base_url: DEFAULT_CHART_URL.to_string(),
        }
    }

    pub fn with_options<I>(symbol: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = QueryOption>,
    {
        options
            .into_iter()
            .fold(Self::new(symbol), |query, option| query.apply(option))
    }

    pub fn apply(self, option: QueryOption) -> Self {
        match option {
            QueryOption::Interval(interval) => self.interval(interval),
            QueryOption::DateRange(range) => self.date_range(range),
            QueryOption::FixedDate(date) => self.fixed_date(date),
            QueryOption::Period(start, end) => self.period(start, end),
        }
    }

    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.selection = TimeSelection::Range(range);
        self
    }

    pub fn fixed_date(mut self, date: impl Into<String>) -> Self {
        self.selection = TimeSelection::FixedDate(date.into());
        self
    }

    pub fn period(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.selection = TimeSelection::Period {
            start: start.into(),
            end: end.into(),
        };
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn selected_interval(&self) -> Interval {
        self.interval
    }

    pub fn selection(&self) -> &TimeSelection {
        &self.selection
    }

    //
    // RENDERING
    //

    pub fn render(&self) -> String {
        self.render_in(&Local)
    }

    pub fn render_in<Tz: TimeZone>(&self, tz: &Tz) -> String {
        // #1. Time selection parameters
        let selection: String = match &self.selection {
            TimeSelection::Range(range) => format!("range={}", range),
            TimeSelection::FixedDate(date) => period_params(
                &to_unix_timestamp(&format!("{} 00:00", date), tz),
                &to_unix_timestamp(&format!("{} 23:59", date), tz),
            ),
            TimeSelection::Period { start, end } => period_params(
                &to_unix_timestamp(&format!("{} 00:00", start), tz),
                &to_unix_timestamp(&format!("{} 23:59", end), tz),
            ),
        };

        // #2. Assemble URL
        let symbol: String = byte_serialize(self.symbol.as_bytes()).collect();
        format!(
            "{}/{}?symbol={}&{}&interval={}&{}",
            self.base_url.trim_end_matches('/'),
            symbol,
            symbol,
            selection,
            self.interval,
            FIXED_PARAMS
        )
    }
}

fn period_params(start: &str, end: &str) -> String {
    format!("period1={}&period2={}", start, end)
}


//
// DATE CONVERSION
//

// Malformed or nonexistent local times yield an empty string, never an error.
pub fn to_unix_timestamp<Tz: TimeZone>(text: &str, tz: &Tz) -> String {
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
        .ok()
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|instant| instant.timestamp().to_string())
        .unwrap_or_default()
}
