// @file: src/core/matrix.rs
// @description: Row-labelled numeric table filled from normalized candles.
// @author: LAS.

use serde::Serialize;

use crate::core::models::Candle;

//
// COLUMN LAYOUT
//

pub const OPEN: usize = 0;
pub const HIGH: usize = 1;
pub const LOW: usize = 2;
pub const CLOSE: usize = 3;
pub const ADJ_CLOSE: usize = 4;
pub const VOLUME: usize = 5;

pub const PRICE_COLUMNS: usize = 6;


//
// TABLE
//

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatrixRow {
    pub label: String,
    values: Vec<f64>,
}

impl MatrixRow {
    // Out-of-range columns are ignored
    pub fn set(&mut self, column: usize, value: f64) {
        if let Some(slot) = self.values.get_mut(column) {
            *slot = value;
        }
    }

    pub fn get(&self, column: usize) -> Option<f64> {
        self.values.get(column).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceMatrix {
    columns: usize,
    rows: Vec<MatrixRow>,
}

impl PriceMatrix {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_candles(candles: &[Candle]) -> Self {
        let mut matrix = Self::new(PRICE_COLUMNS);
        matrix.rows.reserve(candles.len());

        for candle in candles {
            let row = matrix.add_row(candle.timestamp.clone());
            row.set(OPEN, candle.open);
            row.set(HIGH, candle.high);
            row.set(LOW, candle.low);
            row.set(CLOSE, candle.close);
            row.set(ADJ_CLOSE, candle.close);
            row.set(VOLUME, candle.volume as f64);
        }
        matrix
    }

    pub fn add_row(&mut self, label: impl Into<String>) -> &mut MatrixRow {
        self.rows.push(MatrixRow {
            label: label.into(),
            values: vec![0.0; self.columns],
        });
        let last: usize = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    pub fn row(&self, label: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}
