use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::policy::SettlementPolicy;
use crate::settlement::effective_date::effective_date;
use crate::settlement::installments::split_into_installments;
use crate::types::{EntryKind, GroupId, InstallmentTag, Transaction, TransactionId};

/// a transaction as entered by the user, before the derived fields exist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub kind: EntryKind,
    pub amount: Money,
    pub category: Option<String>,
    pub date: NaiveDate,
    pub is_credit_card: bool,
}

impl NewTransaction {
    fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

/// in-memory transaction store
///
/// The effective date is computed once, at save time, from the policy the
/// caller supplies, and persisted on the record. Changing settings later
/// never touches stored rows; editing a row recomputes its effective date
/// at that save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionStore {
    records: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// insert a new transaction, deriving its effective date
    pub fn insert(&mut self, new: NewTransaction, policy: &SettlementPolicy) -> Result<TransactionId> {
        new.validate()?;
        let id = Uuid::new_v4();
        let record = Transaction {
            id,
            description: new.description,
            kind: new.kind,
            amount: new.amount,
            category: new.category,
            date: new.date,
            is_credit_card: new.is_credit_card,
            effective_date: effective_date(new.date, new.is_credit_card, policy),
            installment: None,
        };
        debug!(%id, date = %record.date, effective = %record.effective_date, "transaction inserted");
        self.records.push(record);
        Ok(id)
    }

    /// insert a card purchase split into monthly installments
    ///
    /// Creates one record per installment; the whole group is inserted or
    /// nothing is. Returns the ids in installment order.
    pub fn insert_split(
        &mut self,
        new: NewTransaction,
        count: u32,
        policy: &SettlementPolicy,
    ) -> Result<Vec<TransactionId>> {
        new.validate()?;
        let plan = split_into_installments(Uuid::new_v4(), new.date, new.amount, count, policy)?;

        debug!(
            group = %plan[0].group_id,
            count,
            total = %new.amount,
            "installment group inserted"
        );
        let ids = plan.iter().map(|entry| entry.id).collect();
        for entry in plan {
            self.records.push(Transaction {
                id: entry.id,
                description: new.description.clone(),
                kind: new.kind,
                amount: entry.amount,
                category: new.category.clone(),
                date: entry.date,
                is_credit_card: true,
                effective_date: entry.effective_date,
                installment: Some(InstallmentTag {
                    number: entry.number,
                    total: entry.total,
                    group_id: entry.group_id,
                }),
            });
        }
        Ok(ids)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    /// update a transaction via the provided mutator, then re-derive its
    /// effective date from `policy`
    pub fn update<F>(&mut self, id: TransactionId, policy: &SettlementPolicy, mutator: F) -> Result<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let record = self
            .records
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound { id })?;
        mutator(record);
        record.effective_date = effective_date(record.date, record.is_credit_card, policy);
        debug!(%id, effective = %record.effective_date, "transaction updated");
        Ok(())
    }

    /// remove a transaction, returning the removed record
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction> {
        let index = self
            .records
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound { id })?;
        let removed = self.records.remove(index);
        debug!(%id, "transaction removed");
        Ok(removed)
    }

    /// all installments of a group, in installment order
    pub fn group(&self, group_id: GroupId) -> Vec<&Transaction> {
        let mut entries: Vec<&Transaction> = self
            .records
            .iter()
            .filter(|t| t.installment.map(|tag| tag.group_id) == Some(group_id))
            .collect();
        entries.sort_by_key(|t| t.installment.map(|tag| tag.number));
        entries
    }

    /// remove every installment of a group, returning the removed records
    pub fn remove_group(&mut self, group_id: GroupId) -> Result<Vec<Transaction>> {
        let mut removed = Vec::new();
        self.records.retain(|t| {
            if t.installment.map(|tag| tag.group_id) == Some(group_id) {
                removed.push(t.clone());
                false
            } else {
                true
            }
        });
        if removed.is_empty() {
            return Err(LedgerError::InstallmentGroupNotFound { group_id });
        }
        removed.sort_by_key(|t| t.installment.map(|tag| tag.number));
        debug!(group = %group_id, count = removed.len(), "installment group removed");
        Ok(removed)
    }

    /// records sorted by effective date, then purchase date
    pub fn sorted_by_effective_date(&self) -> Vec<&Transaction> {
        let mut records: Vec<&Transaction> = self.records.iter().collect();
        records.sort_by_key(|t| (t.effective_date, t.date));
        records
    }

    /// earliest purchase date across all records
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|t| t.date).min()
    }

    /// case-insensitive prefix search on descriptions
    pub fn search_description(&self, prefix: &str) -> Vec<&Transaction> {
        let needle = prefix.to_lowercase();
        self.records
            .iter()
            .filter(|t| t.description.to_lowercase().starts_with(&needle))
            .collect()
    }

    /// records whose effective date falls in the given month
    pub fn effective_in_month(&self, year: i32, month: u32) -> Vec<&Transaction> {
        self.records
            .iter()
            .filter(|t| t.effective_date.year() == year && t.effective_date.month() == month)
            .collect()
    }

    /// snapshot of all records
    pub fn export_records(&self) -> Vec<Transaction> {
        self.records.clone()
    }

    /// replace the store contents with previously exported records
    pub fn import_records(&mut self, records: Vec<Transaction>) {
        debug!(count = records.len(), "records imported");
        self.records = records;
    }

    /// serialize the record set to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// rebuild a store from a JSON record set
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Transaction> = serde_json::from_str(json)?;
        Ok(Self { records })
    }
}
