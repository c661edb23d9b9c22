//! Shared data shapes for the farm monitor.
//!
//! Record types mirror the documents held by the record store (camelCase
//! field names on the wire), draft types are what a client submits before
//! the store assigns `id`, creator and `createdAt`, and the metrics types
//! are the outputs of the aggregation engine.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Role of an authenticated user; governs which mutations may be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Veterinarian,
    Worker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Veterinarian => "veterinarian",
            Role::Worker => "worker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Animals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    Healthy,
    Sick,
    Quarantined,
}

impl AnimalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalStatus::Healthy => "healthy",
            AnimalStatus::Sick => "sick",
            AnimalStatus::Quarantined => "quarantined",
        }
    }
}

/// A registered animal in the herd.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub tag_number: String,
    pub breed: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub birth_date: String,
    pub gender: Gender,
    pub status: AnimalStatus,
    pub notes: String,
    pub created_by: String,
    /// Epoch milliseconds assigned by the store; canonical sort key.
    pub created_at: i64,
    /// Stamped by status updates, absent until the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<i64>,
}

/// Draft animal as entered in the registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
    pub tag_number: String,
    pub breed: String,
    pub birth_date: String,
    pub gender: Gender,
    pub status: AnimalStatus,
    pub notes: String,
}

impl Default for NewAnimal {
    fn default() -> Self {
        Self {
            tag_number: String::new(),
            breed: String::new(),
            birth_date: String::new(),
            gender: Gender::Female,
            status: AnimalStatus::Healthy,
            notes: String::new(),
        }
    }
}

/// Partial update applied when an animal's status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalStatusPatch {
    pub status: AnimalStatus,
    pub last_updated_by: String,
    pub last_updated_at: i64,
}

// ---------------------------------------------------------------------------
// Health records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRecordType {
    Checkup,
    Vaccination,
    Treatment,
}

/// Status of a health record.
///
/// The scheduling vocabulary is `scheduled`/`completed`/`cancelled`, but
/// stored documents occasionally carry other strings (notably the animal
/// vocabulary `sick`/`quarantined`); those must survive a decode/encode
/// round trip, so they land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(untagged)]
    Other(String),
}

impl HealthStatus {
    pub fn as_str(&self) -> &str {
        match self {
            HealthStatus::Scheduled => "scheduled",
            HealthStatus::Completed => "completed",
            HealthStatus::Cancelled => "cancelled",
            HealthStatus::Other(s) => s,
        }
    }
}

/// A checkup, vaccination or treatment entry for one animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: String,
    pub animal_id: String,
    pub animal_tag_number: String,
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub description: String,
    /// User who recorded the entry; doubles as the creator reference.
    pub performed_by: String,
    pub status: HealthStatus,
    pub notes: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthRecord {
    pub animal_id: String,
    pub animal_tag_number: String,
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    pub date: String,
    pub description: String,
    pub status: HealthStatus,
    pub notes: String,
}

impl Default for NewHealthRecord {
    fn default() -> Self {
        Self {
            animal_id: String::new(),
            animal_tag_number: String::new(),
            record_type: HealthRecordType::Checkup,
            date: String::new(),
            description: String::new(),
            status: HealthStatus::Scheduled,
            notes: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Milk production
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilkQuality {
    A,
    B,
    C,
}

/// One milking entry, in liters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkRecord {
    pub id: String,
    pub animal_id: String,
    pub quantity: f64,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub quality: MilkQuality,
    pub notes: String,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilkRecord {
    pub animal_id: String,
    pub quantity: f64,
    pub date: String,
    pub quality: MilkQuality,
    pub notes: String,
}

impl Default for NewMilkRecord {
    fn default() -> Self {
        Self {
            animal_id: String::new(),
            quantity: 0.0,
            date: String::new(),
            quality: MilkQuality::A,
            notes: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Feed inventory and schedules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedStatus {
    Good,
    Low,
    Critical,
}

/// A feed stock line item, in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRecord {
    pub id: String,
    pub name: String,
    pub stock: f64,
    pub status: FeedStatus,
    /// ISO 8601 date (YYYY-MM-DD)
    pub last_updated: String,
    pub nutritional_value: String,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedRecord {
    pub name: String,
    pub stock: f64,
    pub status: FeedStatus,
    pub last_updated: String,
    pub nutritional_value: String,
}

impl Default for NewFeedRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            stock: 0.0,
            status: FeedStatus::Good,
            last_updated: Local::now().format("%Y-%m-%d").to_string(),
            nutritional_value: String::new(),
        }
    }
}

/// A recurring feeding slot for part of the herd.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSchedule {
    pub id: String,
    /// 24h clock, HH:MM
    pub time: String,
    #[serde(rename = "type")]
    pub feed_type: String,
    /// Free-form magnitude plus unit, e.g. "5 kg per head"
    pub quantity: String,
    pub herd_size: u32,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNutritionSchedule {
    pub time: String,
    #[serde(rename = "type")]
    pub feed_type: String,
    pub quantity: String,
    pub herd_size: u32,
}

// ---------------------------------------------------------------------------
// Financial records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialType {
    Income,
    Expense,
}

/// One ledger entry, always a non-negative amount; direction comes from
/// the record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: String,
    pub description: String,
    pub amount: f64,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    #[serde(rename = "type")]
    pub record_type: FinancialType,
    pub category: String,
    pub created_by: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialRecord {
    pub description: String,
    pub amount: f64,
    pub date: String,
    #[serde(rename = "type")]
    pub record_type: FinancialType,
    pub category: String,
}

impl Default for NewFinancialRecord {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: 0.0,
            date: String::new(),
            record_type: FinancialType::Income,
            category: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A dashboard account, keyed by the authentication identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Partial update applied when an admin reassigns a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRolePatch {
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Dashboard summary
// ---------------------------------------------------------------------------

/// One summary card on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCell {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub trend_up: bool,
}

impl StatCell {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        trend: impl Into<String>,
        trend_up: bool,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            trend: trend.into(),
            trend_up,
        }
    }
}

/// The four dashboard summary cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_animals: StatCell,
    pub milk_production: StatCell,
    pub health_alerts: StatCell,
    pub monthly_revenue: StatCell,
}

impl DashboardStats {
    /// Placeholder cells shown while any of the four snapshots is still
    /// loading; the only permitted non-numeric state.
    pub fn loading() -> Self {
        Self {
            total_animals: StatCell::new("Total Animals", "0", "Loading...", true),
            milk_production: StatCell::new("Milk Production", "0L", "Loading...", true),
            health_alerts: StatCell::new("Health Alerts", "0", "Loading...", false),
            monthly_revenue: StatCell::new("Monthly Revenue", "$0", "Loading...", true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Error,
    Warning,
}

/// An entry in the dashboard's "Recent Alerts" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
}

// ---------------------------------------------------------------------------
// Derived metrics
// ---------------------------------------------------------------------------

/// Current-month financial summary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub monthly_revenue: f64,
    pub monthly_expenses: f64,
    pub net_profit: f64,
    pub outstanding_bills: f64,
}

impl FinancialMetrics {
    /// Currency values display with two decimals and a dollar prefix.
    pub fn formatted_revenue(&self) -> String {
        format!("${:.2}", self.monthly_revenue)
    }

    pub fn formatted_expenses(&self) -> String {
        format!("${:.2}", self.monthly_expenses)
    }

    pub fn formatted_net_profit(&self) -> String {
        format!("${:.2}", self.net_profit)
    }

    pub fn formatted_outstanding_bills(&self) -> String {
        format!("${:.2}", self.outstanding_bills)
    }
}

/// Whole-history milk summary (not month-filtered).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MilkMetrics {
    pub total_production: f64,
    pub quality_a_percentage: f64,
    pub total_records: usize,
}

impl MilkMetrics {
    /// Liters display with two decimals on the production page.
    pub fn formatted_total_production(&self) -> String {
        format!("{:.2} L", self.total_production)
    }

    /// Grade-A share displays with one decimal.
    pub fn formatted_quality_a(&self) -> String {
        format!("{:.1}%", self.quality_a_percentage)
    }
}

/// Health record census by record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthTypeCounts {
    pub checkups: usize,
    pub vaccinations: usize,
    pub treatments: usize,
}

/// User census by role; accounts outside the three known roles are not
/// counted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleCensus {
    pub admins: usize,
    pub veterinarians: usize,
    pub workers: usize,
}
