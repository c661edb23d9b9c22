//! Milk production summary.

use shared::{MilkMetrics, MilkQuality, MilkRecord};

/// Whole-history totals for the production page: liters across every
/// record, the grade-A share, and the record count. Not month-filtered.
pub fn milk_metrics(records: &[MilkRecord]) -> MilkMetrics {
    let total_production: f64 = records.iter().map(|record| record.quantity).sum();

    let quality_a_percentage = if records.is_empty() {
        0.0
    } else {
        let grade_a = records
            .iter()
            .filter(|record| record.quality == MilkQuality::A)
            .count();
        grade_a as f64 / records.len() as f64 * 100.0
    };

    MilkMetrics {
        total_production,
        quality_a_percentage,
        total_records: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quantity: f64, quality: MilkQuality) -> MilkRecord {
        MilkRecord {
            id: format!("milk-{}", quantity),
            animal_id: "a1".to_string(),
            quantity,
            date: "2025-06-01".to_string(),
            quality,
            notes: String::new(),
            created_by: "u1".to_string(),
            created_at: 1,
        }
    }

    #[test]
    fn empty_snapshot_yields_zeros_without_dividing() {
        let metrics = milk_metrics(&[]);
        assert_eq!(metrics.total_production, 0.0);
        assert_eq!(metrics.quality_a_percentage, 0.0);
        assert_eq!(metrics.total_records, 0);
    }

    #[test]
    fn totals_and_grade_a_share() {
        let records = [
            record(10.0, MilkQuality::A),
            record(5.0, MilkQuality::B),
        ];

        let metrics = milk_metrics(&records);

        assert_eq!(metrics.total_production, 15.0);
        assert_eq!(metrics.quality_a_percentage, 50.0);
        assert_eq!(metrics.total_records, 2);
    }

    #[test]
    fn no_grade_a_records_means_zero_percent() {
        let records = [record(8.0, MilkQuality::B), record(2.0, MilkQuality::C)];

        let metrics = milk_metrics(&records);

        assert_eq!(metrics.total_production, 10.0);
        assert_eq!(metrics.quality_a_percentage, 0.0);
    }

    #[test]
    fn every_record_counts_regardless_of_date() {
        // The production page sums the whole history.
        let mut old = record(20.0, MilkQuality::A);
        old.date = "2019-01-01".to_string();
        let records = [old, record(10.0, MilkQuality::A)];

        let metrics = milk_metrics(&records);
        assert_eq!(metrics.total_production, 30.0);
        assert_eq!(metrics.quality_a_percentage, 100.0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let records = [record(10.0, MilkQuality::A), record(5.0, MilkQuality::C)];
        assert_eq!(milk_metrics(&records), milk_metrics(&records));
    }
}
