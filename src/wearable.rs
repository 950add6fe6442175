use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::settings::Settings;
use crate::store::{NewTransaction, TransactionStore};
use crate::types::{EntryKind, TransactionId};

/// quick expense pushed from a paired watch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickEntry {
    pub description: String,
    pub amount: Money,
}

/// insert a quick entry as a same-day cash expense
///
/// The watch sends only a description and an amount; everything else is
/// fixed: dated today per the injected clock, not a card charge, so it
/// settles on its own date. Rejected when the wearable channel is toggled
/// off; amount and description validation is the store's usual insert
/// contract.
pub fn ingest_quick_entry(
    store: &mut TransactionStore,
    settings: &Settings,
    entry: QuickEntry,
    time: &SafeTimeProvider,
) -> Result<TransactionId> {
    if !settings.wearable_enabled {
        return Err(LedgerError::FeatureDisabled {
            feature: "wearable",
        });
    }

    let today = time.now().date_naive();
    let id = store.insert(
        NewTransaction {
            description: entry.description,
            kind: EntryKind::Expense,
            amount: entry.amount,
            category: None,
            date: today,
            is_credit_card: false,
        },
        &settings.default_policy(),
    )?;
    info!(%id, date = %today, "quick entry ingested");
    Ok(id)
}
