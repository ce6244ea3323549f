use serde::Serialize;

use crate::models::{Category, LogRow};

/// Number of history rows in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Summary of the rolling history window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total: usize,
    /// Non-zero counts in [`Category::ALL`] order
    pub by_category: Vec<CategoryCount>,
    pub oldest: Option<String>,
    pub newest: Option<String>,
}

impl HistoryStats {
    /// Rows are expected in append order, so the first is the oldest
    pub fn from_rows(rows: &[LogRow]) -> Self {
        let by_category = Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: rows.iter().filter(|r| r.category == category).count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        Self {
            total: rows.len(),
            by_category,
            oldest: rows.first().map(|r| r.timestamp.clone()),
            newest: rows.last().map(|r| r.timestamp.clone()),
        }
    }
}
