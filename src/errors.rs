use thiserror::Error;
use uuid::Uuid;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid closing day: {day} (expected 0 or 1..=31)")]
    InvalidClosingDay {
        day: u8,
    },

    #[error("invalid payment day: {day} (expected 0 or 1..=31)")]
    InvalidPaymentDay {
        day: u8,
    },

    #[error("invalid settlement delay: {months} months (expected 0..=6)")]
    InvalidDelayMonths {
        months: u8,
    },

    #[error("invalid installment count: {count} (expected at least 2)")]
    InvalidInstallmentCount {
        count: u32,
    },

    #[error("amount must be positive: {amount}")]
    NonPositiveAmount {
        amount: Money,
    },

    #[error("empty description")]
    EmptyDescription,

    #[error("transaction not found: {id}")]
    TransactionNotFound {
        id: Uuid,
    },

    #[error("installment group not found: {group_id}")]
    InstallmentGroupNotFound {
        group_id: Uuid,
    },

    #[error("feature disabled: {feature}")]
    FeatureDisabled {
        feature: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
