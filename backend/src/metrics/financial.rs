//! Current-month financial summary.

use super::date_month0;
use chrono::{DateTime, Datelike, Local};
use shared::{FinancialMetrics, FinancialRecord, FinancialType};

/// Outstanding bills are estimated as a fixed share of the month's
/// expenses; there is no real liability ledger behind the number.
pub const OUTSTANDING_BILLS_RATIO: f64 = 0.2;

/// Revenue, expenses, net profit and the outstanding-bills estimate for
/// the month of `now`. An empty snapshot yields all zeros.
pub fn financial_metrics(records: &[FinancialRecord], now: DateTime<Local>) -> FinancialMetrics {
    let current_month = now.month0();

    let monthly: Vec<&FinancialRecord> = records
        .iter()
        .filter(|record| date_month0(&record.date) == Some(current_month))
        .collect();

    let monthly_revenue: f64 = monthly
        .iter()
        .filter(|record| record.record_type == FinancialType::Income)
        .map(|record| record.amount)
        .sum();

    let monthly_expenses: f64 = monthly
        .iter()
        .filter(|record| record.record_type == FinancialType::Expense)
        .map(|record| record.amount)
        .sum();

    FinancialMetrics {
        monthly_revenue,
        monthly_expenses,
        net_profit: monthly_revenue - monthly_expenses,
        outstanding_bills: monthly_expenses * OUTSTANDING_BILLS_RATIO,
    }
}
