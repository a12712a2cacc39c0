//! Factor-related type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Date, SeriesError, returns::check_ordered};

/// Name of a systematic risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactorName {
    /// Market excess return (MKT).
    #[serde(rename = "MKT")]
    Market,
    /// Small minus big (SMB).
    #[serde(rename = "SMB")]
    Size,
    /// High minus low (HML).
    #[serde(rename = "HML")]
    Value,
}

impl FactorName {
    /// The three-factor set in design-matrix order.
    pub const ALL: [Self; 3] = [Self::Market, Self::Size, Self::Value];

    /// Short label used as a result key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MKT",
            Self::Size => "SMB",
            Self::Value => "HML",
        }
    }
}

impl fmt::Display for FactorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a factor series carries information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorAvailability {
    /// Built from real inputs.
    Available,
    /// Zero-information stand-in; the cross-sectional inputs needed to build
    /// it are not available.
    Placeholder,
}

/// Values of one factor, aligned to the owning table's dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorSeries {
    /// Factor name.
    pub name: FactorName,
    /// Whether the values are informative.
    pub availability: FactorAvailability,
    /// Factor values, one per table date.
    pub values: Vec<f64>,
}

impl FactorSeries {
    /// Create an informative factor series.
    #[must_use]
    pub const fn available(name: FactorName, values: Vec<f64>) -> Self {
        Self { name, availability: FactorAvailability::Available, values }
    }

    /// Create a zero-filled placeholder series of length `len`.
    #[must_use]
    pub fn placeholder(name: FactorName, len: usize) -> Self {
        Self { name, availability: FactorAvailability::Placeholder, values: vec![0.0; len] }
    }

    /// Check if this series is a placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.availability == FactorAvailability::Placeholder
    }
}

/// Daily factor values sharing a date index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    dates: Vec<Date>,
    factors: Vec<FactorSeries>,
}

impl FactorTable {
    /// Create a factor table.
    ///
    /// # Errors
    /// Returns `SeriesError` if dates are unordered or a factor's length
    /// differs from the number of dates.
    pub fn new(dates: Vec<Date>, factors: Vec<FactorSeries>) -> Result<Self, SeriesError> {
        check_ordered(&dates)?;
        if let Some(f) = factors.iter().find(|f| f.values.len() != dates.len()) {
            return Err(SeriesError::LengthMismatch { dates: dates.len(), values: f.values.len() });
        }
        Ok(Self { dates, factors })
    }

    /// Table dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Factor columns in design-matrix order.
    #[must_use]
    pub fn factors(&self) -> &[FactorSeries] {
        &self.factors
    }

    /// Get a factor column by name.
    #[must_use]
    pub fn get(&self, name: FactorName) -> Option<&FactorSeries> {
        self.factors.iter().find(|f| f.name == name)
    }

    /// Factor names in column order.
    #[must_use]
    pub fn names(&self) -> Vec<FactorName> {
        self.factors.iter().map(|f| f.name).collect()
    }

    /// Names of placeholder columns.
    #[must_use]
    pub fn placeholder_names(&self) -> Vec<FactorName> {
        self.factors.iter().filter(|f| f.is_placeholder()).map(|f| f.name).collect()
    }

    /// Copy of this table with placeholder columns removed.
    #[must_use]
    pub fn informative(&self) -> Self {
        Self {
            dates: self.dates.clone(),
            factors: self.factors.iter().filter(|f| !f.is_placeholder()).cloned().collect(),
        }
    }

    /// Number of dates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the table has no dates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of factor columns.
    #[must_use]
    pub const fn n_factors(&self) -> usize {
        self.factors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates() -> Vec<Date> {
        (2..5).map(|d| Date::from_ymd_opt(2024, 1, d).unwrap()).collect()
    }

    #[test]
    fn factor_name_labels() {
        assert_eq!(FactorName::Market.to_string(), "MKT");
        assert_eq!(FactorName::Size.as_str(), "SMB");
        assert_eq!(FactorName::Value.as_str(), "HML");
    }

    #[test]
    fn informative_drops_placeholders() {
        let table = FactorTable::new(
            dates(),
            vec![
                FactorSeries::available(FactorName::Market, vec![0.01, -0.02, 0.03]),
                FactorSeries::placeholder(FactorName::Size, 3),
                FactorSeries::placeholder(FactorName::Value, 3),
            ],
        )
        .unwrap();

        assert_eq!(table.n_factors(), 3);
        assert_eq!(table.placeholder_names(), vec![FactorName::Size, FactorName::Value]);

        let informative = table.informative();
        assert_eq!(informative.names(), vec![FactorName::Market]);
        assert_eq!(informative.len(), 3);
    }

    #[test]
    fn placeholder_is_zero_filled() {
        let series = FactorSeries::placeholder(FactorName::Value, 4);
        assert!(series.is_placeholder());
        assert!(series.values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn table_rejects_short_column() {
        let err = FactorTable::new(
            dates(),
            vec![FactorSeries::available(FactorName::Market, vec![0.01])],
        )
        .unwrap_err();
        assert!(matches!(err, SeriesError::LengthMismatch { dates: 3, values: 1 }));
    }
}
