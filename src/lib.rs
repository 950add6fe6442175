pub mod decimal;
pub mod errors;
pub mod policy;
pub mod settings;
pub mod settlement;
pub mod store;
pub mod summary;
pub mod types;
pub mod wearable;

// re-export key types
pub use decimal::Money;
pub use errors::{LedgerError, Result};
pub use policy::{CardBillingPolicy, LegacyDelayPolicy, SettlementPolicy};
pub use settings::{DateDisplayFormat, Settings};
pub use settlement::{effective_date, split_into_installments, Installment};
pub use store::{NewTransaction, TransactionStore};
pub use summary::{MonthlySummary, YearlySummary};
pub use types::{
    EntryKind, GroupId, InstallmentTag, SettlementKind, Transaction, TransactionId,
};
pub use wearable::{ingest_quick_entry, QuickEntry};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
