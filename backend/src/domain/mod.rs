//! Domain services: one per record collection, plus the dashboard feed.
//!
//! Every mutation re-validates the access policy and the submitted fields
//! before the store is touched; a hidden control in the presentation
//! layer is never trusted.

pub mod commands;

mod animal_service;
mod dashboard_service;
mod feed_service;
mod financial_service;
mod health_service;
mod milk_service;
mod user_service;

pub use animal_service::AnimalService;
pub use dashboard_service::{DashboardFeed, DashboardService, DashboardView};
pub use feed_service::FeedService;
pub use financial_service::FinancialService;
pub use health_service::HealthService;
pub use milk_service::MilkService;
pub use user_service::UserService;

use crate::auth::AuthContext;
use crate::error::DomainError;
use crate::policy::{can_perform, Action};
use chrono::NaiveDate;
use log::warn;
use std::time::{SystemTime, UNIX_EPOCH};

/// Re-check the access policy at the mutation call path.
pub(crate) fn check_policy(
    ctx: &AuthContext,
    action: Action,
    subject_is_self: bool,
    denial: &str,
) -> Result<(), DomainError> {
    let allowed = ctx
        .role
        .map(|role| can_perform(role, action, subject_is_self))
        .unwrap_or(false);

    if allowed {
        Ok(())
    } else {
        warn!("denied {:?} for role {:?}", action, ctx.role);
        Err(DomainError::Forbidden(denial.to_string()))
    }
}

/// Dates arrive from the entry forms as YYYY-MM-DD.
pub(crate) fn validate_date(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| DomainError::Validation(format!("{} must be a YYYY-MM-DD date", field)))
}

/// A field that must not be blank.
pub(crate) fn require_text(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::Validation(format!("{} is required", field)))
    } else {
        Ok(())
    }
}

/// Current wall clock in epoch milliseconds.
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
