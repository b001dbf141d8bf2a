use serde::{Deserialize, Serialize};

/// A monthly spending ceiling for one category. The category name is the
/// unique key within a budget set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub limit: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}

/// Merges one budget into a set by category, replacing an existing limit or
/// appending a new entry. Saving the whole set wholesale is the other
/// supported write path; both end in a full-collection replacement on disk.
pub fn upsert(budgets: &mut Vec<Budget>, budget: Budget) {
    match budgets.iter_mut().find(|b| b.category == budget.category) {
        Some(existing) => existing.limit = budget.limit,
        None => budgets.push(budget),
    }
}
