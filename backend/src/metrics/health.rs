//! Health record census.

use shared::{HealthRecord, HealthRecordType, HealthTypeCounts};

/// Counts of checkups, vaccinations and treatments across the snapshot.
pub fn type_counts(records: &[HealthRecord]) -> HealthTypeCounts {
    let count = |wanted: HealthRecordType| {
        records
            .iter()
            .filter(|record| record.record_type == wanted)
            .count()
    };

    HealthTypeCounts {
        checkups: count(HealthRecordType::Checkup),
        vaccinations: count(HealthRecordType::Vaccination),
        treatments: count(HealthRecordType::Treatment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::HealthStatus;

    fn record(record_type: HealthRecordType) -> HealthRecord {
        HealthRecord {
            id: "h1".to_string(),
            animal_id: "a1".to_string(),
            animal_tag_number: "COW-001".to_string(),
            record_type,
            date: "2025-06-10".to_string(),
            description: "Entry".to_string(),
            performed_by: "u-vet".to_string(),
            status: HealthStatus::Completed,
            notes: String::new(),
            created_at: 1,
        }
    }

    #[test]
    fn empty_snapshot_counts_nothing() {
        assert_eq!(type_counts(&[]), HealthTypeCounts::default());
    }

    #[test]
    fn each_type_is_counted_separately() {
        let records = [
            record(HealthRecordType::Checkup),
            record(HealthRecordType::Checkup),
            record(HealthRecordType::Vaccination),
            record(HealthRecordType::Treatment),
        ];

        let counts = type_counts(&records);

        assert_eq!(counts.checkups, 2);
        assert_eq!(counts.vaccinations, 1);
        assert_eq!(counts.treatments, 1);
    }
}
