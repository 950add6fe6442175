use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::policy::{CardBillingPolicy, LegacyDelayPolicy, SettlementPolicy};

/// how dates are rendered on screen
///
/// Display preference only — stored and serialized dates stay ISO so that
/// lexicographic order equals chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateDisplayFormat {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

impl DateDisplayFormat {
    /// strftime pattern for this preference
    pub fn pattern(&self) -> &'static str {
        match self {
            DateDisplayFormat::DayMonthYear => "%d/%m/%Y",
            DateDisplayFormat::MonthDayYear => "%m/%d/%Y",
            DateDisplayFormat::YearMonthDay => "%Y-%m-%d",
        }
    }
}

/// application-level defaults and feature toggles
///
/// Supplies the settlement policy used when a save names no card. Settings
/// are read at save time only: a change here never rewrites effective
/// dates already stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub currency_symbol: String,
    pub date_format: DateDisplayFormat,
    pub(crate) default_delay: LegacyDelayPolicy,
    pub(crate) default_card: Option<CardBillingPolicy>,
    pub credit_card_enabled: bool,
    pub wearable_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: DateDisplayFormat::DayMonthYear,
            default_delay: LegacyDelayPolicy::default(),
            default_card: None,
            credit_card_enabled: true,
            wearable_enabled: true,
        }
    }
}

impl Settings {
    /// set the flat delay used when no card is attached
    pub fn set_default_delay(&mut self, delay_months: u8) -> Result<()> {
        self.default_delay = LegacyDelayPolicy::new(delay_months)?;
        Ok(())
    }

    pub fn default_delay(&self) -> LegacyDelayPolicy {
        self.default_delay
    }

    pub fn set_default_card(&mut self, card: Option<CardBillingPolicy>) {
        self.default_card = card;
    }

    pub fn default_card(&self) -> Option<CardBillingPolicy> {
        self.default_card
    }

    /// policy applied to saves that do not name a card: the default card
    /// when one is configured, the legacy delay otherwise
    pub fn default_policy(&self) -> SettlementPolicy {
        match self.default_card {
            Some(card) => SettlementPolicy::Card(card),
            None => SettlementPolicy::Legacy(self.default_delay),
        }
    }
}
