//! Dense 12-month calendar filling over sparse month-keyed data.

/// Months in the dashboard calendar.
pub const MONTHS_PER_YEAR: u32 = 12;

/// A value that occupies one (year, month) slot of a series.
///
/// Implemented by series points and monthly records so they can be gap
/// filled against the 12-month calendar.
pub trait CalendarSlot: Clone {
    /// Month this value belongs to (expected 1-12; out-of-range values
    /// simply never match a canonical slot).
    fn month(&self) -> u32;

    /// Copy of this value restamped onto the given slot. Used to synthesize
    /// entries for absent months from a caller-supplied default.
    fn at_slot(&self, month: u32, year: i32) -> Self;
}

/// Fill a sparse month-keyed sequence into exactly 12 entries, months
/// 1 through 12 ascending.
///
/// For each month the first matching input record is passed through
/// unchanged; absent months get `default` restamped with the month and
/// `year`. Callers are expected to have rolled duplicate months up
/// beforehand (see [`monthly_totals`](crate::aggregate::monthly_totals));
/// if duplicates remain, the first one wins and the rest are ignored.
/// Records with out-of-range months never occupy a slot.
pub fn fill_months<T: CalendarSlot>(records: &[T], year: i32, default: &T) -> Vec<T> {
    (1..=MONTHS_PER_YEAR)
        .map(|month| {
            records
                .iter()
                .find(|r| r.month() == month)
                .cloned()
                .unwrap_or_else(|| default.at_slot(month, year))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        year: i32,
        month: u32,
        volume: f64,
    }

    impl CalendarSlot for Point {
        fn month(&self) -> u32 {
            self.month
        }

        fn at_slot(&self, month: u32, year: i32) -> Self {
            Self {
                year,
                month,
                ..self.clone()
            }
        }
    }

    fn default_point() -> Point {
        Point {
            year: 0,
            month: 0,
            volume: 0.0,
        }
    }

    #[test]
    fn test_empty_input_yields_twelve_defaults() {
        let filled = fill_months(&[], 2025, &default_point());
        assert_eq!(filled.len(), 12);
        for (i, p) in filled.iter().enumerate() {
            assert_eq!(p.month, i as u32 + 1);
            assert_eq!(p.year, 2025);
            assert_eq!(p.volume, 0.0);
        }
    }

    #[test]
    fn test_existing_month_passes_through_unchanged() {
        let records = vec![Point {
            year: 2025,
            month: 3,
            volume: 10.0,
        }];
        let filled = fill_months(&records, 2025, &default_point());
        assert_eq!(filled.len(), 12);
        assert_eq!(filled[2].volume, 10.0);
        assert_eq!(filled[2].month, 3);
        for (i, p) in filled.iter().enumerate() {
            if i != 2 {
                assert_eq!(p.volume, 0.0);
            }
        }
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let records = vec![
            Point {
                year: 2025,
                month: 5,
                volume: 1.0,
            },
            Point {
                year: 2025,
                month: 5,
                volume: 99.0,
            },
        ];
        let filled = fill_months(&records, 2025, &default_point());
        assert_eq!(filled[4].volume, 1.0);
    }

    #[test]
    fn test_out_of_range_months_are_dropped() {
        let records = vec![
            Point {
                year: 2025,
                month: 0,
                volume: 7.0,
            },
            Point {
                year: 2025,
                month: 13,
                volume: 8.0,
            },
        ];
        let filled = fill_months(&records, 2025, &default_point());
        assert_eq!(filled.len(), 12);
        assert!(filled.iter().all(|p| p.volume == 0.0));
        let months: Vec<u32> = filled.iter().map(|p| p.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
    }
}
