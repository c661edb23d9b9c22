//! Dashboard summary cells and the recent-alerts list.

use super::{date_month0, timestamp_month0};
use chrono::{DateTime, Datelike, Local};
use shared::{
    Alert, AlertSeverity, Animal, AnimalStatus, DashboardStats, FinancialRecord, FinancialType,
    HealthRecord, MilkRecord, StatCell,
};

/// At most this many health-derived alert entries.
const MAX_HEALTH_ALERTS: usize = 2;
/// At most this many animal-derived alert entries.
const MAX_ANIMAL_ALERTS: usize = 2;

/// Whether a health record raises a dashboard alert.
///
/// The match is on the animal status vocabulary, so records carrying the
/// scheduling vocabulary (scheduled/completed/cancelled) never qualify;
/// only documents whose status field holds one of these two strings do.
fn needs_attention(record: &HealthRecord) -> bool {
    matches!(record.status.as_str(), "sick" | "quarantined")
}

/// Compute the four dashboard cells from the current snapshots.
///
/// While any snapshot is still unavailable the loading placeholders are
/// returned instead; everything else is recomputed from scratch against
/// the month of `now`.
pub fn dashboard_stats(
    animals: Option<&[Animal]>,
    milk: Option<&[MilkRecord]>,
    health: Option<&[HealthRecord]>,
    financial: Option<&[FinancialRecord]>,
    now: DateTime<Local>,
) -> DashboardStats {
    let (Some(animals), Some(milk), Some(health), Some(financial)) =
        (animals, milk, health, financial)
    else {
        return DashboardStats::loading();
    };

    let current_month = now.month0();

    let monthly_income: f64 = financial
        .iter()
        .filter(|record| {
            date_month0(&record.date) == Some(current_month)
                && record.record_type == FinancialType::Income
        })
        .map(|record| record.amount)
        .sum();

    let total_milk: f64 = milk
        .iter()
        .filter(|record| date_month0(&record.date) == Some(current_month))
        .map(|record| record.quantity)
        .sum();

    let active_alerts = health.iter().filter(|record| needs_attention(record)).count();

    let added_this_month = animals
        .iter()
        .filter(|animal| timestamp_month0(animal.created_at) == Some(current_month))
        .count();

    DashboardStats {
        total_animals: StatCell::new(
            "Total Animals",
            animals.len().to_string(),
            format!("{} this month", added_this_month),
            true,
        ),
        milk_production: StatCell::new(
            "Milk Production",
            format!("{:.1}L", total_milk),
            "This month",
            true,
        ),
        health_alerts: StatCell::new(
            "Health Alerts",
            active_alerts.to_string(),
            format!("{} requiring attention", active_alerts),
            false,
        ),
        monthly_revenue: StatCell::new(
            "Monthly Revenue",
            format!("${:.2}", monthly_income),
            "This month",
            true,
        ),
    }
}

/// The "Recent Alerts" list: up to two health-derived entries first, then
/// up to two animals currently marked sick, in that order. Both halves
/// may reference the same animal; no de-duplication is performed.
pub fn recent_alerts(animals: &[Animal], health: &[HealthRecord]) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = health
        .iter()
        .filter(|record| needs_attention(record))
        .take(MAX_HEALTH_ALERTS)
        .map(|record| Alert {
            title: "Health Alert".to_string(),
            description: format!("Animal #{} needs attention", record.animal_id),
            severity: AlertSeverity::Error,
        })
        .collect();

    alerts.extend(
        animals
            .iter()
            .filter(|animal| animal.status == AnimalStatus::Sick)
            .take(MAX_ANIMAL_ALERTS)
            .map(|animal| Alert {
                title: "Animal Health Check Required".to_string(),
                description: format!("{} needs medical attention", animal.tag_number),
                severity: AlertSeverity::Warning,
            }),
    );

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::{Gender, HealthRecordType, HealthStatus, MilkQuality};

    fn june_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn animal(tag: &str, status: AnimalStatus, created_at: i64) -> Animal {
        Animal {
            id: format!("animal-{}", tag),
            tag_number: tag.to_string(),
            breed: "Holstein".to_string(),
            birth_date: "2021-04-12".to_string(),
            gender: Gender::Female,
            status,
            notes: String::new(),
            created_by: "u1".to_string(),
            created_at,
            last_updated_by: None,
            last_updated_at: None,
        }
    }

    fn health(animal_id: &str, status: HealthStatus) -> HealthRecord {
        HealthRecord {
            id: format!("health-{}", animal_id),
            animal_id: animal_id.to_string(),
            animal_tag_number: format!("COW-{}", animal_id),
            record_type: HealthRecordType::Checkup,
            date: "2025-06-10".to_string(),
            description: "Checkup".to_string(),
            performed_by: "u-vet".to_string(),
            status,
            notes: String::new(),
            created_at: 1,
        }
    }

    fn milk(quantity: f64, date: &str) -> MilkRecord {
        MilkRecord {
            id: format!("milk-{}", date),
            animal_id: "a1".to_string(),
            quantity,
            date: date.to_string(),
            quality: MilkQuality::A,
            notes: String::new(),
            created_by: "u1".to_string(),
            created_at: 1,
        }
    }

    fn financial(amount: f64, record_type: FinancialType, date: &str) -> FinancialRecord {
        FinancialRecord {
            id: format!("fin-{}-{}", amount, date),
            description: "Entry".to_string(),
            amount,
            date: date.to_string(),
            record_type,
            category: "general".to_string(),
            created_by: "u1".to_string(),
            created_at: 1,
        }
    }

    /// Millis for a local date, so the stamp's local month is exact.
    fn local_millis(year: i32, month: u32, day: u32) -> i64 {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn any_missing_snapshot_yields_the_loading_placeholders() {
        let animals = [animal("COW-001", AnimalStatus::Healthy, 1)];
        let milk: [MilkRecord; 0] = [];
        let financial: [FinancialRecord; 0] = [];

        let stats = dashboard_stats(
            Some(&animals),
            Some(&milk),
            None,
            Some(&financial),
            june_noon(),
        );
        assert_eq!(stats, DashboardStats::loading());

        let stats = dashboard_stats(None, None, None, None, june_noon());
        assert_eq!(stats, DashboardStats::loading());
    }

    #[test]
    fn cells_sum_and_count_only_the_current_month() {
        let animals = [
            animal("COW-001", AnimalStatus::Healthy, local_millis(2025, 6, 2)),
            animal("COW-002", AnimalStatus::Healthy, local_millis(2025, 6, 20)),
            animal("COW-003", AnimalStatus::Healthy, local_millis(2025, 5, 20)),
        ];
        let milk = [
            milk(10.0, "2025-06-01"),
            milk(7.5, "2025-06-28"),
            milk(99.0, "2025-05-31"),
            milk(3.0, "bad-date"),
        ];
        let health = [
            health("a1", HealthStatus::Completed),
            health("a2", HealthStatus::Other("sick".to_string())),
        ];
        let financial = [
            financial(100.0, FinancialType::Income, "2025-06-05"),
            financial(40.0, FinancialType::Expense, "2025-06-06"),
            financial(500.0, FinancialType::Income, "2025-05-05"),
        ];

        let stats = dashboard_stats(
            Some(&animals),
            Some(&milk),
            Some(&health),
            Some(&financial),
            june_noon(),
        );

        assert_eq!(stats.total_animals.value, "3");
        assert_eq!(stats.total_animals.trend, "2 this month");
        assert_eq!(stats.milk_production.value, "17.5L");
        assert_eq!(stats.health_alerts.value, "1");
        assert_eq!(stats.health_alerts.trend, "1 requiring attention");
        assert!(!stats.health_alerts.trend_up);
        assert_eq!(stats.monthly_revenue.value, "$100.00");
    }

    #[test]
    fn month_matching_ignores_the_year() {
        // A June record from a previous year still counts in June.
        let milk = [milk(4.0, "2023-06-01"), milk(6.0, "2025-06-01")];

        let stats = dashboard_stats(
            Some(&[]),
            Some(&milk),
            Some(&[]),
            Some(&[]),
            june_noon(),
        );
        assert_eq!(stats.milk_production.value, "10.0L");
    }

    #[test]
    fn scheduling_statuses_never_raise_health_alerts() {
        let health = [
            health("a1", HealthStatus::Scheduled),
            health("a2", HealthStatus::Completed),
            health("a3", HealthStatus::Cancelled),
        ];

        let stats = dashboard_stats(
            Some(&[]),
            Some(&[]),
            Some(&health),
            Some(&[]),
            june_noon(),
        );
        assert_eq!(stats.health_alerts.value, "0");
        assert!(recent_alerts(&[], &health).is_empty());
    }

    #[test]
    fn quarantined_status_strings_count_as_alerts() {
        let health = [
            health("a1", HealthStatus::Other("quarantined".to_string())),
            health("a2", HealthStatus::Other("sick".to_string())),
        ];

        let stats = dashboard_stats(
            Some(&[]),
            Some(&[]),
            Some(&health),
            Some(&[]),
            june_noon(),
        );
        assert_eq!(stats.health_alerts.value, "2");
    }

    #[test]
    fn alerts_keep_health_entries_first_and_cap_each_source_at_two() {
        let health = [
            health("a1", HealthStatus::Other("sick".to_string())),
            health("a2", HealthStatus::Other("quarantined".to_string())),
            health("a3", HealthStatus::Other("sick".to_string())),
        ];
        let animals = [
            animal("COW-001", AnimalStatus::Sick, 1),
            animal("COW-002", AnimalStatus::Sick, 2),
            animal("COW-003", AnimalStatus::Sick, 3),
            animal("COW-004", AnimalStatus::Healthy, 4),
        ];

        let alerts = recent_alerts(&animals, &health);

        assert_eq!(alerts.len(), 4);
        assert_eq!(alerts[0].title, "Health Alert");
        assert_eq!(alerts[0].description, "Animal #a1 needs attention");
        assert_eq!(alerts[0].severity, AlertSeverity::Error);
        assert_eq!(alerts[1].description, "Animal #a2 needs attention");
        assert_eq!(alerts[2].title, "Animal Health Check Required");
        assert_eq!(alerts[2].description, "COW-001 needs medical attention");
        assert_eq!(alerts[2].severity, AlertSeverity::Warning);
        assert_eq!(alerts[3].description, "COW-002 needs medical attention");
    }

    #[test]
    fn the_same_animal_can_appear_in_both_alert_halves() {
        let animals = [animal("COW-001", AnimalStatus::Sick, 1)];
        let health = [health("animal-COW-001", HealthStatus::Other("sick".to_string()))];

        let alerts = recent_alerts(&animals, &health);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].description, "Animal #animal-COW-001 needs attention");
        assert_eq!(alerts[1].description, "COW-001 needs medical attention");
    }

    #[test]
    fn recomputation_is_idempotent() {
        let animals = [animal("COW-001", AnimalStatus::Sick, local_millis(2025, 6, 2))];
        let milk = [milk(12.25, "2025-06-01")];
        let health = [health("a1", HealthStatus::Other("sick".to_string()))];
        let financial = [financial(250.0, FinancialType::Income, "2025-06-05")];

        let first = dashboard_stats(
            Some(&animals),
            Some(&milk),
            Some(&health),
            Some(&financial),
            june_noon(),
        );
        let second = dashboard_stats(
            Some(&animals),
            Some(&milk),
            Some(&health),
            Some(&financial),
            june_noon(),
        );
        assert_eq!(first, second);
        assert_eq!(recent_alerts(&animals, &health), recent_alerts(&animals, &health));
    }
}
