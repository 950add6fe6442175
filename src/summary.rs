use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::store::TransactionStore;
use crate::types::EntryKind;

/// category label for records saved without one
pub const UNCATEGORIZED: &str = "uncategorized";

/// totals for one month, aggregated over effective dates
///
/// A card purchase made in January that settles in March counts toward
/// March — the summary reflects when money actually moves, which is the
/// point of storing the effective date. Expense is a positive magnitude;
/// balance is income minus expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
    /// expense magnitude per category
    pub expense_by_category: BTreeMap<String, Money>,
}

impl MonthlySummary {
    pub fn compute(store: &TransactionStore, year: i32, month: u32) -> Self {
        let mut income = Money::ZERO;
        let mut expense = Money::ZERO;
        let mut expense_by_category: BTreeMap<String, Money> = BTreeMap::new();

        for txn in store.effective_in_month(year, month) {
            match txn.kind {
                EntryKind::Income => income += txn.amount,
                EntryKind::Expense => {
                    expense += txn.amount;
                    let category = txn
                        .category
                        .clone()
                        .unwrap_or_else(|| UNCATEGORIZED.to_string());
                    *expense_by_category.entry(category).or_insert(Money::ZERO) += txn.amount;
                }
            }
        }

        Self {
            year,
            month,
            income,
            expense,
            balance: income - expense,
            expense_by_category,
        }
    }
}

/// twelve monthly buckets plus year totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    pub months: Vec<MonthlySummary>,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl YearlySummary {
    pub fn compute(store: &TransactionStore, year: i32) -> Self {
        let months: Vec<MonthlySummary> = (1..=12)
            .map(|month| MonthlySummary::compute(store, year, month))
            .collect();

        let income = months.iter().map(|m| m.income).sum();
        let expense = months.iter().map(|m| m.expense).sum();

        Self {
            year,
            months,
            income,
            expense,
            balance: income - expense,
        }
    }
}
