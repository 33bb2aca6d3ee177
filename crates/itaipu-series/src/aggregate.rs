//! Field aggregation over filtered record sets.
//!
//! The aggregator is filter-agnostic: callers narrow the record set first
//! (see [`filter`](crate::filter)) and pass accessor closures for the
//! fields involved. Division-by-zero is guarded everywhere; "no data"
//! aggregates to `0.0`, never NaN.

use crate::calendar::CalendarSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sum a numeric field across a record set. Empty input yields `0.0`.
pub fn sum_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(value).sum()
}

/// Weighted average of a field: `Σ(value·weight) / Σ(weight)`.
///
/// Returns `0.0` when the total weight is zero; callers relying on this
/// must treat `0.0` as "no data", not a genuine zero price.
pub fn weighted_average<T>(
    records: &[T],
    value: impl Fn(&T) -> f64,
    weight: impl Fn(&T) -> f64,
) -> f64 {
    let total_weight = sum_by(records, &weight);
    if total_weight == 0.0 {
        return 0.0;
    }
    let weighted_sum: f64 = records.iter().map(|r| value(r) * weight(r)).sum();
    weighted_sum / total_weight
}

/// Group records by month and sum a field per month.
///
/// This is the single duplicate-row policy for the dashboard: rows sharing
/// a (year, month) key are always summed before any calendar filling.
pub fn monthly_totals<T>(
    records: &[T],
    month_of: impl Fn(&T) -> u32,
    value: impl Fn(&T) -> f64,
) -> BTreeMap<u32, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(month_of(record)).or_insert(0.0) += value(record);
    }
    totals
}

/// A single (year, month, value) point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: u32,
    /// Aggregated value for the month.
    pub value: f64,
}

impl CalendarSlot for MonthlyPoint {
    fn month(&self) -> u32 {
        self.month
    }

    fn at_slot(&self, month: u32, year: i32) -> Self {
        Self {
            year,
            month,
            value: self.value,
        }
    }
}

/// Summed monthly rollup of a field, as calendar-fillable points.
pub fn monthly_series<T>(
    records: &[T],
    year: i32,
    month_of: impl Fn(&T) -> u32,
    value: impl Fn(&T) -> f64,
) -> Vec<MonthlyPoint> {
    monthly_totals(records, month_of, value)
        .into_iter()
        .map(|(month, value)| MonthlyPoint { year, month, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::fill_months;
    use approx::assert_relative_eq;

    #[derive(Clone)]
    struct Row {
        month: u32,
        volume: f64,
        price: f64,
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let rows: Vec<Row> = Vec::new();
        assert_relative_eq!(sum_by(&rows, |r| r.volume), 0.0);
    }

    #[test]
    fn test_sum_is_permutation_invariant() {
        let a = vec![
            Row { month: 1, volume: 1.5, price: 0.0 },
            Row { month: 2, volume: -3.0, price: 0.0 },
            Row { month: 3, volume: 10.25, price: 0.0 },
        ];
        let b: Vec<Row> = a.iter().rev().cloned().collect();
        assert_relative_eq!(sum_by(&a, |r| r.volume), sum_by(&b, |r| r.volume));
    }

    #[test]
    fn test_weighted_average_zero_weight_is_zero() {
        let rows = vec![Row { month: 1, volume: 0.0, price: 180.0 }];
        assert_relative_eq!(weighted_average(&rows, |r| r.price, |r| r.volume), 0.0);
    }

    #[test]
    fn test_weighted_average_identity_for_unit_weight() {
        let rows = vec![Row { month: 1, volume: 1.0, price: 187.3 }];
        assert_relative_eq!(weighted_average(&rows, |r| r.price, |r| r.volume), 187.3);
    }

    #[test]
    fn test_weighted_average_mixes_by_volume() {
        let rows = vec![
            Row { month: 1, volume: 1.0, price: 100.0 },
            Row { month: 1, volume: 3.0, price: 200.0 },
        ];
        assert_relative_eq!(weighted_average(&rows, |r| r.price, |r| r.volume), 175.0);
    }

    #[test]
    fn test_monthly_totals_sums_duplicates() {
        let rows = vec![
            Row { month: 5, volume: 2.0, price: 0.0 },
            Row { month: 5, volume: 3.0, price: 0.0 },
            Row { month: 7, volume: 1.0, price: 0.0 },
        ];
        let totals = monthly_totals(&rows, |r| r.month, |r| r.volume);
        assert_relative_eq!(totals[&5], 5.0);
        assert_relative_eq!(totals[&7], 1.0);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_monthly_series_fills_to_twelve() {
        let rows = vec![Row { month: 3, volume: 10.0, price: 0.0 }];
        let series = monthly_series(&rows, 2025, |r| r.month, |r| r.volume);
        let default = MonthlyPoint { year: 2025, month: 0, value: 0.0 };
        let filled = fill_months(&series, 2025, &default);
        assert_eq!(filled.len(), 12);
        assert_relative_eq!(filled[2].value, 10.0);
        assert_relative_eq!(sum_by(&filled, |p| p.value), 10.0);
    }
}
