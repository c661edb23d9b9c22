//! Live dashboard feed.
//!
//! Combines the four record subscriptions the dashboard renders from and
//! recomputes the summary on demand. The feed owns no derived state: each
//! `view` call runs the aggregation engine from scratch on the current
//! snapshots.

use crate::metrics::dashboard::{dashboard_stats, recent_alerts};
use crate::storage::{RecordStore, StoreError, Subscription};
use chrono::{DateTime, Local};
use shared::{Alert, Animal, DashboardStats, FinancialRecord, HealthRecord, MilkRecord};
use std::sync::Arc;

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub alerts: Vec<Alert>,
}

#[derive(Clone)]
pub struct DashboardService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> DashboardService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Open the four live queries backing the dashboard.
    pub fn subscribe(&self) -> DashboardFeed {
        DashboardFeed {
            animals: self.store.subscribe(),
            milk: self.store.subscribe(),
            health: self.store.subscribe(),
            financial: self.store.subscribe(),
        }
    }
}

/// Handle onto the dashboard's combined snapshot stream.
pub struct DashboardFeed {
    animals: Subscription<Animal>,
    milk: Subscription<MilkRecord>,
    health: Subscription<HealthRecord>,
    financial: Subscription<FinancialRecord>,
}

impl DashboardFeed {
    /// Recompute stats and alerts from the current snapshots.
    pub fn view(&self) -> Result<DashboardView, StoreError> {
        self.view_at(Local::now())
    }

    /// Recompute against an explicit clock; the aggregation itself is
    /// pure, so the same snapshots and clock always give the same view.
    pub fn view_at(&self, now: DateTime<Local>) -> Result<DashboardView, StoreError> {
        let animals = self.animals.current()?;
        let milk = self.milk.current()?;
        let health = self.health.current()?;
        let financial = self.financial.current()?;

        Ok(DashboardView {
            stats: dashboard_stats(
                Some(&animals),
                Some(&milk),
                Some(&health),
                Some(&financial),
                now,
            ),
            alerts: recent_alerts(&animals, &health),
        })
    }

    /// Wait until any of the four collections changes. Returns false once
    /// the store has gone away; stop recomputing at that point.
    pub async fn changed(&mut self) -> bool {
        tokio::select! {
            alive = self.animals.changed() => alive,
            alive = self.milk.changed() => alive,
            alive = self.health.changed() => alive,
            alive = self.financial.changed() => alive,
        }
    }

    /// Cancel all four live queries; no further recomputation happens.
    pub fn unsubscribe(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::{
        AnimalStatus, FinancialType, HealthStatus, NewAnimal, NewFinancialRecord,
        NewHealthRecord, NewMilkRecord,
    };

    fn today() -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }

    async fn seed(store: &MemoryStore) {
        store
            .create::<Animal>(
                "u1",
                NewAnimal {
                    tag_number: "COW-001".to_string(),
                    breed: "Holstein".to_string(),
                    birth_date: "2021-04-12".to_string(),
                    status: AnimalStatus::Sick,
                    ..NewAnimal::default()
                },
            )
            .await
            .unwrap();
        store
            .create::<MilkRecord>(
                "u1",
                NewMilkRecord {
                    animal_id: "a1".to_string(),
                    quantity: 12.5,
                    date: today(),
                    ..NewMilkRecord::default()
                },
            )
            .await
            .unwrap();
        store
            .create::<HealthRecord>(
                "u-vet",
                NewHealthRecord {
                    animal_id: "a1".to_string(),
                    animal_tag_number: "COW-001".to_string(),
                    date: today(),
                    description: "Fever".to_string(),
                    status: HealthStatus::Other("sick".to_string()),
                    ..NewHealthRecord::default()
                },
            )
            .await
            .unwrap();
        store
            .create::<FinancialRecord>(
                "u1",
                NewFinancialRecord {
                    description: "Milk sale".to_string(),
                    amount: 250.0,
                    date: today(),
                    record_type: FinancialType::Income,
                    category: "dairy".to_string(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn an_empty_store_yields_all_zero_cells() {
        let store = Arc::new(MemoryStore::new());
        let feed = DashboardService::new(store).subscribe();

        let view = feed.view().unwrap();

        assert_eq!(view.stats.total_animals.value, "0");
        assert_eq!(view.stats.milk_production.value, "0.0L");
        assert_eq!(view.stats.health_alerts.value, "0");
        assert_eq!(view.stats.monthly_revenue.value, "$0.00");
        assert!(view.alerts.is_empty());
    }

    #[tokio::test]
    async fn the_view_reflects_seeded_records() {
        let store = Arc::new(MemoryStore::new());
        seed(&store).await;
        let feed = DashboardService::new(store).subscribe();

        let view = feed.view().unwrap();

        assert_eq!(view.stats.total_animals.value, "1");
        assert_eq!(view.stats.total_animals.trend, "1 this month");
        assert_eq!(view.stats.milk_production.value, "12.5L");
        assert_eq!(view.stats.health_alerts.value, "1");
        assert_eq!(view.stats.monthly_revenue.value, "$250.00");

        // One health-derived alert, then the sick animal itself.
        assert_eq!(view.alerts.len(), 2);
        assert_eq!(view.alerts[0].title, "Health Alert");
        assert_eq!(
            view.alerts[1].description,
            "COW-001 needs medical attention"
        );
    }

    #[tokio::test]
    async fn the_feed_wakes_on_any_collection_change() {
        let store = Arc::new(MemoryStore::new());
        let mut feed = DashboardService::new(store.clone()).subscribe();

        store
            .create::<FinancialRecord>(
                "u1",
                NewFinancialRecord {
                    description: "Feed purchase".to_string(),
                    amount: 80.0,
                    date: today(),
                    record_type: FinancialType::Expense,
                    category: "feed".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(feed.changed().await);
        let view = feed.view().unwrap();
        assert_eq!(view.stats.monthly_revenue.value, "$0.00");
    }

    #[tokio::test]
    async fn recomputing_an_unchanged_snapshot_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        seed(&store).await;
        let feed = DashboardService::new(store).subscribe();

        let now = Local::now();
        assert_eq!(feed.view_at(now).unwrap(), feed.view_at(now).unwrap());
    }

    #[tokio::test]
    async fn a_dropped_store_ends_the_feed() {
        let store = Arc::new(MemoryStore::new());
        let mut feed = DashboardService::new(store.clone()).subscribe();
        drop(store);

        assert!(!feed.changed().await);
    }
}
