use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};
use crate::types::SettlementKind;

/// billing policy of a credit card
///
/// `closing_day` and `payment_day` are days of month in 1..=31, or 0 for
/// "no cycle defined" (the charge settles immediately). Out-of-range values
/// are rejected here, at construction, so the settlement calculator never
/// has to guess. The policy is an immutable value: computations capture it
/// by value, and editing a card later never touches effective dates that
/// were already derived and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBillingPolicy {
    closing_day: u8,
    payment_day: u8,
    pub settlement_kind: SettlementKind,
}

impl CardBillingPolicy {
    pub fn new(closing_day: u8, payment_day: u8, settlement_kind: SettlementKind) -> Result<Self> {
        if closing_day > 31 {
            return Err(LedgerError::InvalidClosingDay { day: closing_day });
        }
        if payment_day > 31 {
            return Err(LedgerError::InvalidPaymentDay { day: payment_day });
        }
        Ok(Self {
            closing_day,
            payment_day,
            settlement_kind,
        })
    }

    /// a card with no billing cycle; charges settle on the purchase date
    pub fn immediate(settlement_kind: SettlementKind) -> Self {
        Self {
            closing_day: 0,
            payment_day: 0,
            settlement_kind,
        }
    }

    pub fn closing_day(&self) -> u8 {
        self.closing_day
    }

    pub fn payment_day(&self) -> u8 {
        self.payment_day
    }

    /// true when either day is 0, meaning no cycle is defined
    pub fn has_cycle(&self) -> bool {
        self.closing_day > 0 && self.payment_day > 0
    }
}

/// flat month delay used when no card entity is attached
///
/// The legacy model: the charge settles in the month after the purchase, on
/// a day-of-month equal to `delay_months` clamped into the month. Kept
/// alongside the card model because persisted data may have been created
/// under either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyDelayPolicy {
    delay_months: u8,
}

impl LegacyDelayPolicy {
    pub const MAX_DELAY_MONTHS: u8 = 6;

    pub fn new(delay_months: u8) -> Result<Self> {
        if delay_months > Self::MAX_DELAY_MONTHS {
            return Err(LedgerError::InvalidDelayMonths {
                months: delay_months,
            });
        }
        Ok(Self { delay_months })
    }

    pub fn delay_months(&self) -> u8 {
        self.delay_months
    }
}

impl Default for LegacyDelayPolicy {
    fn default() -> Self {
        Self { delay_months: 1 }
    }
}

/// which settlement model applies to a deferred charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementPolicy {
    Card(CardBillingPolicy),
    Legacy(LegacyDelayPolicy),
}

impl From<CardBillingPolicy> for SettlementPolicy {
    fn from(policy: CardBillingPolicy) -> Self {
        SettlementPolicy::Card(policy)
    }
}

impl From<LegacyDelayPolicy> for SettlementPolicy {
    fn from(policy: LegacyDelayPolicy) -> Self {
        SettlementPolicy::Legacy(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_card_policy() {
        let policy = CardBillingPolicy::new(15, 5, SettlementKind::BalanceInFull).unwrap();
        assert_eq!(policy.closing_day(), 15);
        assert_eq!(policy.payment_day(), 5);
        assert!(policy.has_cycle());
    }

    #[test]
    fn test_out_of_range_days_rejected() {
        let err = CardBillingPolicy::new(35, 5, SettlementKind::BalanceInFull).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidClosingDay { day: 35 }));

        let err = CardBillingPolicy::new(15, 32, SettlementKind::Revolving).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidPaymentDay { day: 32 }));
    }

    #[test]
    fn test_immediate_card_has_no_cycle() {
        let policy = CardBillingPolicy::immediate(SettlementKind::BalanceInFull);
        assert!(!policy.has_cycle());
    }

    #[test]
    fn test_zero_day_means_no_cycle() {
        let policy = CardBillingPolicy::new(0, 5, SettlementKind::BalanceInFull).unwrap();
        assert!(!policy.has_cycle());
    }

    #[test]
    fn test_delay_bounds() {
        assert!(LegacyDelayPolicy::new(0).is_ok());
        assert!(LegacyDelayPolicy::new(6).is_ok());
        let err = LegacyDelayPolicy::new(7).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDelayMonths { months: 7 }));
    }
}
