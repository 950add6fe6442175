use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a transaction
pub type TransactionId = Uuid;

/// unique identifier shared by the installments of one purchase
pub type GroupId = Uuid;

/// direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Income,
    Expense,
}

/// how a card balance is settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementKind {
    /// full statement balance debited on the payment day
    BalanceInFull,
    /// revolving balance, minimum due on the payment day
    Revolving,
}

/// installment metadata for a split purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentTag {
    /// 1-based position within the group
    pub number: u32,
    pub total: u32,
    pub group_id: GroupId,
}

/// a single ledger entry
///
/// `effective_date` is derived at save time and persisted redundantly so
/// storage can sort and query on it; it is never recomputed when settings
/// change later. Serialized dates are ISO calendar dates, so lexicographic
/// order equals chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub kind: EntryKind,
    /// nonnegative magnitude; direction lives in `kind`
    pub amount: Money,
    pub category: Option<String>,
    /// purchase date
    pub date: NaiveDate,
    pub is_credit_card: bool,
    /// date the amount is actually debited or received
    pub effective_date: NaiveDate,
    pub installment: Option<InstallmentTag>,
}

impl Transaction {
    pub fn is_installment(&self) -> bool {
        self.installment.is_some()
    }

    /// amount with its sign: income positive, expense negative
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: Money) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            description: "groceries".to_string(),
            kind: EntryKind::Expense,
            amount,
            category: Some("food".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            is_credit_card: false,
            effective_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            installment: None,
        }
    }

    #[test]
    fn test_signed_amount() {
        let txn = expense(Money::from_major(50));
        assert_eq!(txn.signed_amount(), -Money::from_major(50));

        let income = Transaction {
            kind: EntryKind::Income,
            ..txn
        };
        assert_eq!(income.signed_amount(), Money::from_major(50));
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let txn = expense(Money::from_major(50));
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"2024-03-10\""));
    }
}
