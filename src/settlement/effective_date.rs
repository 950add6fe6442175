use chrono::{Datelike, NaiveDate};

use crate::policy::{CardBillingPolicy, LegacyDelayPolicy, SettlementPolicy};
use crate::settlement::calendar::day_in_month_after;

/// date on which a charge is actually debited
///
/// Non-card entries settle on the purchase date. Card entries settle per
/// the attached policy; see [`card_effective_date`] and
/// [`legacy_effective_date`] for the two models. Pure function: no clock,
/// no state, safe to call from any thread.
pub fn effective_date(
    transaction_date: NaiveDate,
    is_credit_card: bool,
    policy: &SettlementPolicy,
) -> NaiveDate {
    if !is_credit_card {
        return transaction_date;
    }
    match policy {
        SettlementPolicy::Card(card) => card_effective_date(transaction_date, card),
        SettlementPolicy::Legacy(legacy) => legacy_effective_date(transaction_date, legacy),
    }
}

/// closing-day / payment-day model
///
/// A purchase strictly before the closing day belongs to the cycle closing
/// in its own month; on or after the closing day it rolls into the next
/// month's cycle. The balance is debited on the payment day of the month
/// following the cycle's closing month, clamped to that month's length.
/// A policy with no cycle (either day 0) charges immediately.
pub fn card_effective_date(transaction_date: NaiveDate, policy: &CardBillingPolicy) -> NaiveDate {
    if !policy.has_cycle() {
        return transaction_date;
    }
    let months_ahead = if transaction_date.day() >= u32::from(policy.closing_day()) {
        2
    } else {
        1
    };
    day_in_month_after(transaction_date, months_ahead, u32::from(policy.payment_day()))
}

/// flat month-delay model
///
/// The candidate settlement is in the month after the purchase, on a
/// day-of-month equal to the configured delay clamped into that month. A
/// candidate strictly before the purchase date advances one more month and
/// re-clamps. Only whole-month steps from "purchase month + 1"; this model
/// knows nothing about mid-cycle closing days.
pub fn legacy_effective_date(transaction_date: NaiveDate, policy: &LegacyDelayPolicy) -> NaiveDate {
    let day = u32::from(policy.delay_months());
    let candidate = day_in_month_after(transaction_date, 1, day);
    if candidate < transaction_date {
        day_in_month_after(transaction_date, 2, day)
    } else {
        candidate
    }
}
