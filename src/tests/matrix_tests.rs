// @file: src/tests/matrix_tests.rs
// @description: Candle to row-labelled matrix projection.
// @author: LAS.

#[cfg(test)]
mod sink_tests {
    use crate::core::matrix::{PriceMatrix, ADJ_CLOSE, CLOSE, HIGH, LOW, OPEN, PRICE_COLUMNS, VOLUME};
    use crate::core::normalizer::parse_chart_in;
    use crate::tests::support::sample_chart;
    use chrono::Utc;

    #[test]
    fn test_rows_follow_candles() {
        let (_, candles) = parse_chart_in(&sample_chart(), &Utc).unwrap();
        let matrix = PriceMatrix::from_candles(&candles);

        assert_eq!(matrix.columns(), PRICE_COLUMNS);
        assert_eq!(matrix.len(), 2);

        let row = matrix.row("2023-11-14 22:18").unwrap();
        assert_eq!(row.get(OPEN), Some(10.5));
        assert_eq!(row.get(HIGH), Some(10.7));
        assert_eq!(row.get(LOW), Some(10.3));
        assert_eq!(row.get(CLOSE), Some(10.6));
        assert_eq!(row.get(ADJ_CLOSE), Some(10.6));
        assert_eq!(row.get(VOLUME), Some(100.0));

        let labels: Vec<&str> = matrix.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["2023-11-14 22:18", "2023-11-14 22:23"]);
    }

    #[test]
    fn test_set_ignores_unknown_column() {
        let mut matrix = PriceMatrix::new(2);
        let row = matrix.add_row("r0");
        row.set(1, 4.0);
        row.set(7, 9.0);

        assert_eq!(matrix.rows()[0].values(), &[0.0, 4.0]);
        assert_eq!(matrix.rows()[0].get(7), None);
    }

    #[test]
    fn test_empty_candles_give_empty_matrix() {
        let matrix = PriceMatrix::from_candles(&[]);

        assert!(matrix.is_empty());
        assert!(matrix.row("2023-11-14 22:18").is_none());
    }
}
