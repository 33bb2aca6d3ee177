//! Expected-loss distribution across risk buckets versus the target
//! PMA allocation.

use crate::bucket::{RiskBucket, TARGET_TOTAL_PMA};
use itaipu_data::records::CreditExposureRecord;
use serde::{Deserialize, Serialize};

/// One bucket's slice of the realized versus target comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRow {
    /// The bucket.
    pub bucket: RiskBucket,
    /// Summed EL(PFE) of the bucket's counterparties.
    pub el_sum: f64,
    /// Realized share of total EL, as a fraction.
    pub realized_share: f64,
    /// Realized PMA, thousands of BRL.
    pub realized_pma: f64,
    /// Target share of total PMA, as a fraction.
    pub target_share: f64,
    /// Target PMA, thousands of BRL.
    pub target_pma: f64,
    /// Whether the realized share exceeds the target share.
    pub over_target: bool,
}

/// Realized EL distribution across the six buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDistribution {
    /// One row per bucket, lowest risk first.
    pub rows: Vec<BucketRow>,
    /// Total EL(PFE) across all bucketed counterparties.
    pub total_el: f64,
    /// Total realized PMA, thousands of BRL.
    pub total_pma: f64,
    /// Target total PMA, thousands of BRL.
    pub target_total_pma: f64,
}

/// Distribute annual credit exposures across the risk buckets.
///
/// Only counterparties with a bucketable rating and a positive EL(PFE)
/// enter the distribution; exempt and unknown ratings fall out via
/// [`RiskBucket::classify`]. Shares are zero for every bucket when the
/// total EL is zero.
pub fn distribute(records: &[CreditExposureRecord]) -> RiskDistribution {
    let mut el_by_bucket = [0.0_f64; 6];
    for record in records {
        if record.el_pfe_year <= 0.0 {
            continue;
        }
        if let Some(bucket) = RiskBucket::classify(&record.rating) {
            el_by_bucket[bucket as usize] += record.el_pfe_year;
        }
    }

    let total_el: f64 = el_by_bucket.iter().sum();
    let rows = RiskBucket::ALL
        .iter()
        .map(|&bucket| {
            let el_sum = el_by_bucket[bucket as usize];
            let realized_share = if total_el == 0.0 { 0.0 } else { el_sum / total_el };
            BucketRow {
                bucket,
                el_sum,
                realized_share,
                realized_pma: el_sum / 1000.0,
                target_share: bucket.target_share(),
                target_pma: bucket.target_pma(),
                over_target: realized_share > bucket.target_share(),
            }
        })
        .collect();

    RiskDistribution {
        rows,
        total_el,
        total_pma: total_el / 1000.0,
        target_total_pma: TARGET_TOTAL_PMA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn exposure(rating: &str, el_pfe_year: f64) -> CreditExposureRecord {
        CreditExposureRecord {
            counterparty: "Comercializadora A".to_string(),
            rating: rating.to_string(),
            epe: 0.0,
            pfe_year: 0.0,
            cvar_year: 0.0,
            el_epe: 0.0,
            el_pfe_year,
            el_cvar_year: 0.0,
            profit_loss_year: 0.0,
            profit_loss_limit: 0.0,
        }
    }

    #[test]
    fn test_single_bucket_takes_full_share() {
        let dist = distribute(&[exposure("3C", 100.0), exposure("3C", 300.0)]);
        let medium1 = &dist.rows[RiskBucket::Medium1 as usize];
        assert_relative_eq!(medium1.el_sum, 400.0);
        assert_relative_eq!(medium1.realized_share, 1.0);
        assert_relative_eq!(medium1.realized_pma, 0.4);
        for row in &dist.rows {
            if row.bucket != RiskBucket::Medium1 {
                assert_relative_eq!(row.realized_share, 0.0);
            }
        }
    }

    #[test]
    fn test_shares_sum_to_one() {
        let dist = distribute(&[
            exposure("1A", 50.0),
            exposure("2B", 150.0),
            exposure("4D", 800.0),
        ]);
        let share_sum: f64 = dist.rows.iter().map(|r| r.realized_share).sum();
        assert_relative_eq!(share_sum, 1.0, epsilon = 1e-12);
        assert_relative_eq!(dist.total_el, 1000.0);
    }

    #[test]
    fn test_exempt_and_nonpositive_el_are_excluded() {
        let dist = distribute(&[
            exposure("ACR", 900.0),
            exposure("I", 500.0),
            exposure("3C", 0.0),
            exposure("3C", -10.0),
        ]);
        assert_relative_eq!(dist.total_el, 0.0);
        for row in &dist.rows {
            assert_relative_eq!(row.realized_share, 0.0);
            assert!(!row.over_target);
        }
    }

    #[test]
    fn test_empty_input_has_zero_shares_not_nan() {
        let dist = distribute(&[]);
        assert_eq!(dist.rows.len(), 6);
        for row in &dist.rows {
            assert_relative_eq!(row.realized_share, 0.0);
            assert!(!row.realized_share.is_nan());
        }
        assert_relative_eq!(dist.target_total_pma, TARGET_TOTAL_PMA);
    }

    #[test]
    fn test_over_target_flag() {
        // Everything lands in VeryLow, target share 7%.
        let dist = distribute(&[exposure("1A", 10.0)]);
        let very_low = &dist.rows[RiskBucket::VeryLow as usize];
        assert!(very_low.over_target);
        let medium2 = &dist.rows[RiskBucket::Medium2 as usize];
        assert!(!medium2.over_target);
    }
}
