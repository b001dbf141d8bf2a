//! Pure derivation engines over stored records.
//!
//! Every function here is synchronous and side-effect free: callers pass a
//! snapshot (and a reference date where "today" matters) and get derived
//! values back. Empty input is always a valid, zero-valued case.

pub mod advisor;
pub mod bills;
pub mod cashflow;
pub mod forecast;
pub mod insights;
pub mod summary;

pub use advisor::{generate_advisor_insights, AdvisorInsight, AdvisorKind, Severity};
pub use bills::{
    bill_status, bills_by_status, revalidate_status, upcoming_alert, BillBuckets,
    BillStatusReport, CategorizedBill, DueStatus, UpcomingAlert,
};
pub use cashflow::{daily_cash_flow, weekly_cash_flow, CashFlowDay, WeeklyCashFlow};
pub use forecast::{forecast_predictions, ForecastPrediction};
pub use insights::{generate_insights, Insight, InsightKind};
pub use summary::{
    budget_summary, category_spending, financial_ratios, BudgetHealth, BudgetSummary,
    CategorySpending, FinancialRatio, RatioStatus,
};
