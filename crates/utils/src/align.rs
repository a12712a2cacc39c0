//! Date alignment across several series.

use chrono::Datelike;
use factorscope_primitives::{Date, ReturnSeries};
use polars::prelude::*;

use crate::UtilsError;

const DAY_COL: &str = "day";

/// Borrowed view of one dated column to align.
#[derive(Debug, Clone, Copy)]
pub struct DatedColumn<'a> {
    /// Observation dates, strictly increasing.
    pub dates: &'a [Date],
    /// Values, one per date.
    pub values: &'a [f64],
}

impl<'a> DatedColumn<'a> {
    /// Create a dated column view.
    #[must_use]
    pub const fn new(dates: &'a [Date], values: &'a [f64]) -> Self {
        Self { dates, values }
    }
}

impl<'a> From<&'a ReturnSeries> for DatedColumn<'a> {
    fn from(series: &'a ReturnSeries) -> Self {
        Self::new(series.dates(), series.values())
    }
}

/// Columns restricted to their common dates.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedColumns {
    /// Common dates, ascending.
    pub dates: Vec<Date>,
    /// Values per input column, in input order.
    pub columns: Vec<Vec<f64>>,
}

impl AlignedColumns {
    /// Number of common dates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if there are no common dates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Inner-join dated columns on date.
///
/// The result keeps only the dates present in every input, sorted ascending.
///
/// # Errors
/// Returns error if no columns are given, a column's dates and values differ
/// in length, or the join fails.
pub fn align_on_dates(inputs: &[DatedColumn<'_>]) -> Result<AlignedColumns, UtilsError> {
    let Some((first, rest)) = inputs.split_first() else {
        return Err(UtilsError::InvalidParameter("no series to align".to_string()));
    };

    let mut joined = to_frame(first, 0)?.lazy();
    for (i, input) in rest.iter().enumerate() {
        joined = joined.join(
            to_frame(input, i + 1)?.lazy(),
            [col(DAY_COL)],
            [col(DAY_COL)],
            JoinArgs::new(JoinType::Inner),
        );
    }
    let joined = joined.sort([DAY_COL], SortMultipleOptions::default()).collect()?;

    let dates = joined
        .column(DAY_COL)?
        .i32()?
        .into_iter()
        .map(|day| {
            day.and_then(Date::from_num_days_from_ce_opt).ok_or_else(|| {
                UtilsError::InvalidValue {
                    column: DAY_COL.to_string(),
                    reason: "missing or out-of-range day".to_string(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let columns = (0..inputs.len())
        .map(|i| {
            let name = value_col(i);
            joined
                .column(&name)?
                .f64()?
                .into_iter()
                .map(|v| {
                    v.ok_or_else(|| UtilsError::InvalidValue {
                        column: name.clone(),
                        reason: "null after join".to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AlignedColumns { dates, columns })
}

/// Restrict every return series to the dates common to all of them.
///
/// # Errors
/// See [`align_on_dates`].
pub fn align_return_series(series: &[&ReturnSeries]) -> Result<Vec<ReturnSeries>, UtilsError> {
    let inputs: Vec<DatedColumn<'_>> = series.iter().map(|s| DatedColumn::from(*s)).collect();
    let aligned = align_on_dates(&inputs)?;

    aligned
        .columns
        .into_iter()
        .map(|values| ReturnSeries::new(aligned.dates.clone(), values).map_err(UtilsError::from))
        .collect()
}

fn value_col(i: usize) -> String {
    format!("v{i}")
}

fn to_frame(input: &DatedColumn<'_>, i: usize) -> Result<DataFrame, UtilsError> {
    if input.dates.len() != input.values.len() {
        return Err(UtilsError::InvalidParameter(format!(
            "column {i} has {} dates but {} values",
            input.dates.len(),
            input.values.len()
        )));
    }

    let days: Vec<i32> = input.dates.iter().map(Datelike::num_days_from_ce).collect();
    let df = DataFrame::new(vec![
        Column::new(DAY_COL.into(), days),
        Column::new(value_col(i).into(), input.values.to_vec()),
    ])?;
    Ok(df)
}
