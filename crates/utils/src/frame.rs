//! Conversion from long-format price frames.

use std::collections::BTreeMap;

use factorscope_primitives::{Date, PriceMap, PriceSeries, Symbol};
use polars::prelude::*;

use crate::UtilsError;

/// Build a price map from a long-format frame.
///
/// Expects a `date` column holding ISO-8601 strings, a `ticker` string column
/// and a numeric `close` column. Rows may arrive in any order; each ticker's
/// prices are sorted by date before validation.
///
/// # Errors
/// Returns error if a column is missing or has the wrong type, a value is
/// null or unparseable, or a ticker's series violates `PriceSeries` invariants
/// (duplicate dates, non-positive prices).
pub fn prices_from_frame(df: &DataFrame) -> Result<PriceMap, UtilsError> {
    let dates = df
        .column("date")
        .map_err(|_| UtilsError::MissingColumn("date".to_string()))?
        .str()?;
    let tickers = df
        .column("ticker")
        .map_err(|_| UtilsError::MissingColumn("ticker".to_string()))?
        .str()?;
    let closes = df
        .column("close")
        .map_err(|_| UtilsError::MissingColumn("close".to_string()))?
        .cast(&DataType::Float64)?;
    let closes = closes.f64()?;

    let mut points: BTreeMap<Symbol, Vec<(Date, f64)>> = BTreeMap::new();
    for ((date, ticker), close) in dates.into_iter().zip(tickers).zip(closes) {
        let date = date.ok_or_else(|| null_value("date"))?;
        let date = date.parse::<Date>().map_err(|e| UtilsError::InvalidValue {
            column: "date".to_string(),
            reason: format!("{date}: {e}"),
        })?;
        let ticker = ticker.ok_or_else(|| null_value("ticker"))?;
        let close = close.ok_or_else(|| null_value("close"))?;

        points.entry(Symbol::from(ticker)).or_default().push((date, close));
    }

    points
        .into_iter()
        .map(|(symbol, mut rows)| -> Result<_, UtilsError> {
            rows.sort_by_key(|(date, _)| *date);
            let series = PriceSeries::from_points(symbol.clone(), rows)?;
            Ok((symbol, series))
        })
        .collect()
}

fn null_value(column: &str) -> UtilsError {
    UtilsError::InvalidValue { column: column.to_string(), reason: "null".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_frame_to_price_map() {
        let df = df! {
            "date" => &["2024-01-03", "2024-01-02", "2024-01-02", "2024-01-03"],
            "ticker" => &["AAPL", "AAPL", "SPY", "SPY"],
            "close" => &[101.0, 100.0, 470.0, 472.5],
        }
        .unwrap();

        let prices = prices_from_frame(&df).unwrap();

        assert_eq!(prices.len(), 2);
        let aapl = prices.get("AAPL").unwrap();
        assert_eq!(aapl.closes(), &[100.0, 101.0]);
        assert_eq!(aapl.dates()[0], Date::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(prices.get("SPY").unwrap().closes(), &[470.0, 472.5]);
    }

    #[test]
    fn integer_closes_are_cast() {
        let df = df! {
            "date" => &["2024-01-02", "2024-01-03"],
            "ticker" => &["X", "X"],
            "close" => &[10_i64, 11],
        }
        .unwrap();

        let prices = prices_from_frame(&df).unwrap();
        assert_eq!(prices.get("X").unwrap().closes(), &[10.0, 11.0]);
    }

    #[test]
    fn missing_column_reported() {
        let df = df! {
            "date" => &["2024-01-02"],
            "close" => &[10.0],
        }
        .unwrap();

        let err = prices_from_frame(&df).unwrap_err();
        assert!(matches!(err, UtilsError::MissingColumn(c) if c == "ticker"));
    }

    #[test]
    fn bad_date_reported() {
        let df = df! {
            "date" => &["02/01/2024"],
            "ticker" => &["X"],
            "close" => &[10.0],
        }
        .unwrap();

        assert!(matches!(prices_from_frame(&df), Err(UtilsError::InvalidValue { .. })));
    }

    #[test]
    fn duplicate_dates_rejected() {
        let df = df! {
            "date" => &["2024-01-02", "2024-01-02"],
            "ticker" => &["X", "X"],
            "close" => &[10.0, 11.0],
        }
        .unwrap();

        assert!(matches!(prices_from_frame(&df), Err(UtilsError::Series(_))));
    }
}
